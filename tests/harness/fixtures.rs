//! JSON payloads shaped like the Actions REST API.

pub(crate) const IN_PROGRESS_RUN_1234: &str = r#"{
  "id": 1234,
  "name": "CI",
  "display_title": "cool commit",
  "status": "in_progress",
  "conclusion": null,
  "workflow_id": 123,
  "head_branch": "trunk",
  "event": "push",
  "created_at": "2021-02-23T04:51:00Z"
}"#;

pub(crate) const COMPLETED_RUN_4567: &str = r#"{
  "id": 4567,
  "name": "CI",
  "display_title": "cool commit",
  "status": "completed",
  "conclusion": "failure",
  "workflow_id": 123,
  "head_branch": "trunk",
  "event": "push",
  "created_at": "2021-02-23T04:51:00Z"
}"#;

pub(crate) const WORKFLOW_123: &str = r#"{
  "id": 123,
  "name": "a workflow",
  "path": ".github/workflows/flow.yml",
  "state": "active"
}"#;

mod fake_actions_client;
mod fake_terminal;
mod stub_chooser;

pub use fake_actions_client::{FakeActionsClient, FakeActionsClientFactory};
pub use fake_terminal::FakeTerminal;
pub use fixtures::{test_run, test_workflow};
pub use stub_chooser::StubChooser;

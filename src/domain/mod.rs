mod config;
mod error;
mod repository;
mod run;

pub use config::{ApiConfig, Config};
pub use error::AppError;
pub use repository::RepoRef;
pub use run::{Run, RunConclusion, RunStatus, SelectionCandidate, Workflow};

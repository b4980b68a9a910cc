mod actions_client;
mod run_chooser;
mod terminal;

pub use actions_client::{ActionsClient, ActionsClientFactory};
pub use run_chooser::RunChooser;
pub use terminal::Terminal;

pub mod actions_client_http;
pub mod config_file;
pub mod git_remote;
pub mod run_chooser_dialoguer;
pub mod terminal_std;

pub use actions_client_http::{HttpActionsClient, HttpActionsClientFactory};
pub use run_chooser_dialoguer::DialoguerRunChooser;
pub use terminal_std::StdTerminal;

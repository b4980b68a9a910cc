mod repository_resolver;

pub use repository_resolver::{REPO_ENV, resolve_repository};

use crate::domain::AppError;

/// Port for picking one entry out of a list.
pub trait RunChooser {
    /// Present `labels` and return the zero-based index the user picked.
    fn choose(&self, prompt: &str, labels: &[String]) -> Result<usize, AppError>;
}

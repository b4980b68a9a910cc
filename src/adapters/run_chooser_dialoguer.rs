//! Interactive chooser backed by `dialoguer`.

use dialoguer::Select;

use crate::domain::AppError;
use crate::ports::RunChooser;

#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerRunChooser;

impl DialoguerRunChooser {
    pub fn new() -> Self {
        Self
    }
}

impl RunChooser for DialoguerRunChooser {
    fn choose(&self, prompt: &str, labels: &[String]) -> Result<usize, AppError> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(labels)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to select run: {}", err)))?;

        selection.ok_or_else(|| AppError::Prompt("Selection cancelled".to_string()))
    }
}

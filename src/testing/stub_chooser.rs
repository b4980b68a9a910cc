use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RunChooser;

/// Chooser that always answers with a fixed index, or fails when cancelled.
#[derive(Clone)]
pub struct StubChooser {
    answer: Option<usize>,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl StubChooser {
    pub fn new(index: usize) -> Self {
        Self { answer: Some(index), calls: Arc::new(Mutex::new(vec![])) }
    }

    pub fn cancelled() -> Self {
        Self { answer: None, calls: Arc::new(Mutex::new(vec![])) }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RunChooser for StubChooser {
    fn choose(&self, prompt: &str, labels: &[String]) -> Result<usize, AppError> {
        self.calls.lock().unwrap().push((prompt.to_string(), labels.to_vec()));
        self.answer.ok_or_else(|| AppError::Prompt("Selection cancelled".to_string()))
    }
}

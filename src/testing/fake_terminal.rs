use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Terminal;

/// Terminal with configurable tty flags that captures stdout.
#[derive(Clone)]
pub struct FakeTerminal {
    stdin_tty: bool,
    stdout_tty: bool,
    output: Arc<Mutex<String>>,
}

impl FakeTerminal {
    pub fn new(tty: bool) -> Self {
        Self::with_streams(tty, tty)
    }

    pub fn with_streams(stdin_tty: bool, stdout_tty: bool) -> Self {
        Self { stdin_tty, stdout_tty, output: Arc::new(Mutex::new(String::new())) }
    }

    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }
}

impl Terminal for FakeTerminal {
    fn stdin_is_tty(&self) -> bool {
        self.stdin_tty
    }

    fn stdout_is_tty(&self) -> bool {
        self.stdout_tty
    }

    fn print_success(&self, message: &str) -> Result<(), AppError> {
        let mut output = self.output.lock().unwrap();
        output.push_str(message);
        output.push('\n');
        Ok(())
    }
}

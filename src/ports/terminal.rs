use crate::domain::AppError;

/// Port for terminal capabilities and the final output line.
pub trait Terminal {
    fn stdin_is_tty(&self) -> bool;

    fn stdout_is_tty(&self) -> bool;

    /// Whether an interactive prompt can be shown.
    fn can_prompt(&self) -> bool {
        self.stdin_is_tty() && self.stdout_is_tty()
    }

    /// Write a single success line to standard output.
    fn print_success(&self, message: &str) -> Result<(), AppError>;
}

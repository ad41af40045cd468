//! I/O abstraction for the front end.
//!
//! The application core interacts with the user only through the [`IoHost`]
//! trait: the terminal host implements it with reedline, and tests drive the
//! core with a scripted host.

pub mod types;

#[cfg(test)]
pub mod test_host;

pub use types::*;

#[cfg(test)]
pub use test_host::TestHost;

/// Error type for I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(String),
}

/// Host interface for front-end I/O.
pub trait IoHost {
    /// Show the prompt and wait for the next input event.
    fn read_event(&mut self, prompt: &PromptConfig) -> Result<HostEvent, IoError>;

    /// Write output to the user.
    fn write_output(&mut self, output: Output) -> Result<(), IoError>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}

//! Host implementations.

pub mod terminal;

pub use terminal::{TerminalConfirm, TerminalHost};

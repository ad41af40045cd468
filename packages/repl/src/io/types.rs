//! I/O types shared between the application core and its hosts.

/// An input event from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A line of user input.
    Line(String),
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+D.
    Eof,
}

/// Output to be written by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub style: OutputStyle,
}

impl Output {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Info,
        }
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Banner,
        }
    }
}

/// Style hint for output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Normal output (already contains ANSI codes if applicable).
    #[default]
    Normal,
    /// Error message (host may add a red prefix).
    Error,
    /// Informational message.
    Info,
    /// Startup banner.
    Banner,
}

/// Prompt configuration sent from core to host.
#[derive(Debug, Clone, Default)]
pub struct PromptConfig {
    /// Canonical path of the active route.
    pub route: String,
}

/// Reason the application loop exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// User typed `exit` or `quit`.
    UserExit,
    /// User pressed Ctrl+D.
    Eof,
}

//! Terminal host implementation using Reedline.
//!
//! Provides readline-style line editing with a file-backed history, and the
//! interactive confirmation prompt for destructive actions.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use nu_ansi_term::Color;
use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus,
    Reedline, Signal as ReedlineSignal,
};

use replica_store::ConfirmAction;

use crate::io::{HostEvent, IoError, IoHost, Output, OutputStyle, PromptConfig};

/// Terminal host using Reedline for interactive I/O.
pub struct TerminalHost {
    line_editor: Reedline,
}

impl TerminalHost {
    pub fn new() -> io::Result<Self> {
        let mut line_editor = Reedline::create();

        if let Some(history_path) = history_path() {
            if let Some(parent) = history_path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(1000, history_path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        Ok(Self { line_editor })
    }
}

impl IoHost for TerminalHost {
    fn read_event(&mut self, prompt: &PromptConfig) -> Result<HostEvent, IoError> {
        let prompt = RoutePrompt::from_config(prompt);

        match self.line_editor.read_line(&prompt) {
            Ok(ReedlineSignal::Success(line)) => Ok(HostEvent::Line(line)),
            Ok(ReedlineSignal::CtrlC) => Ok(HostEvent::Interrupt),
            Ok(ReedlineSignal::CtrlD) => Ok(HostEvent::Eof),
            Err(e) => Err(IoError::Io(format!("Reedline error: {e}"))),
        }
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        let styled = match output.style {
            OutputStyle::Normal => output.text,
            OutputStyle::Error => {
                format!("{} {}", Color::Red.bold().paint("Error:"), output.text)
            }
            OutputStyle::Info => Color::Cyan.paint(&output.text).to_string(),
            OutputStyle::Banner => Color::Cyan.paint(&output.text).to_string(),
        };
        println!("{styled}");
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        io::stdout().flush().map_err(|e| IoError::Io(e.to_string()))
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("replica").join("history.txt"))
}

/// Stdin-backed confirmation for destructive actions.
pub struct TerminalConfirm;

impl ConfirmAction for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [s/N] ", Color::Yellow.paint(prompt));
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
    }
}

/// Prompt showing the active route.
struct RoutePrompt {
    route: String,
}

impl RoutePrompt {
    fn from_config(config: &PromptConfig) -> Self {
        Self {
            route: config.route.clone(),
        }
    }
}

impl Prompt for RoutePrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(Color::Yellow.paint(&self.route).to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search: {}) ", prefix, history_search.term))
    }
}

//! Scripted host for tests.

use std::collections::VecDeque;

use super::{HostEvent, IoError, IoHost, Output, PromptConfig};

/// Feeds a fixed sequence of events to the core and records every output.
pub struct TestHost {
    events: VecDeque<HostEvent>,
    pub outputs: Vec<Output>,
    pub prompts: Vec<PromptConfig>,
}

impl TestHost {
    pub fn with_lines(lines: Vec<&str>) -> Self {
        Self {
            events: lines
                .into_iter()
                .map(|l| HostEvent::Line(l.to_string()))
                .collect(),
            outputs: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    /// All recorded output concatenated, for containment asserts.
    pub fn transcript(&self) -> String {
        self.outputs
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IoHost for TestHost {
    fn read_event(&mut self, prompt: &PromptConfig) -> Result<HostEvent, IoError> {
        self.prompts.push(prompt.clone());
        // A drained script behaves like the user hanging up.
        Ok(self.events.pop_front().unwrap_or(HostEvent::Eof))
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.outputs.push(output);
        Ok(())
    }
}

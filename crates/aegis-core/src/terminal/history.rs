//! Terminal history.
//!
//! An append-only transcript of echoed inputs and output blocks, scoped to
//! one terminal surface. Only the `clear` command resets it.

use super::builtin::interpret;
use super::model::CommandOutcome;

/// One entry in the terminal transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// An echoed input line (stored without the prompt prefix).
    Input(String),
    /// An output block, possibly multi-line.
    Output(String),
}

impl HistoryEntry {
    /// Renders the entry for display; input lines get a `$ ` prompt prefix.
    pub fn render(&self) -> String {
        match self {
            HistoryEntry::Input(line) => format!("$ {}", line),
            HistoryEntry::Output(block) => block.clone(),
        }
    }
}

/// The ordered, append-only terminal transcript.
#[derive(Debug, Default)]
pub struct TerminalHistory {
    entries: Vec<HistoryEntry>,
}

impl TerminalHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits one input line: the line is echoed into the history and the
    /// interpreter's outcome is applied.
    ///
    /// An `Output` outcome is appended after the echo; a `Clear` outcome
    /// resets the history (including the echo) to empty. The outcome is
    /// returned so the caller can update its display.
    pub fn submit(&mut self, line: &str) -> CommandOutcome {
        let trimmed = line.trim();
        self.entries.push(HistoryEntry::Input(trimmed.to_string()));

        let outcome = interpret(trimmed);
        match &outcome {
            CommandOutcome::Output(block) => {
                self.entries.push(HistoryEntry::Output(block.clone()));
            }
            CommandOutcome::Clear => self.clear(),
        }
        outcome
    }

    /// Appends an echoed input line without interpreting it.
    pub fn record_input(&mut self, line: impl Into<String>) {
        self.entries.push(HistoryEntry::Input(line.into()));
    }

    /// Appends an output block.
    pub fn record_output(&mut self, block: impl Into<String>) {
        self.entries.push(HistoryEntry::Output(block.into()));
    }

    /// Resets the history to empty.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries in arrival order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

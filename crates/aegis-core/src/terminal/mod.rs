//! Simulated terminal: command interpreter and history.
//!
//! The interpreter is a pure mapping from an input line to an outcome and
//! never fails; unrecognized input falls through to a "command not found"
//! line. History is owned by the terminal surface that displays it, not by
//! the application state container.

pub mod builtin;
pub mod history;
pub mod model;

pub use builtin::{HELP_TEXT, SCAN_TEXT, STATUS_TEXT, interpret};
pub use history::{HistoryEntry, TerminalHistory};
pub use model::{CommandOutcome, TerminalCommand};

//! Builtin terminal commands and their canned output.
//!
//! Output blocks are constants so repeated invocations of the same command
//! produce byte-identical text.

use super::model::{CommandOutcome, TerminalCommand};

/// Usage text produced by `help`.
pub const HELP_TEXT: &str = "Available commands:
- scan: Run a security scan
- clear: Clear terminal
- help: Show this help message
- status: Show system status";

/// Narration produced by `scan`. Purely cosmetic; the terminal's `scan`
/// never touches the application state container.
pub const SCAN_TEXT: &str = "Initiating security scan...
Scanning ports...
Checking vulnerabilities...
Scan complete.";

/// Canned status report produced by `status`.
pub const STATUS_TEXT: &str = "System Status: Online
CPU Usage: 45%
Memory: 62%
Active Scans: 1";

/// Maps one input line to its outcome.
///
/// The input is trimmed and matched case-insensitively. Unrecognized input
/// always falls through to a "command not found" line that echoes the
/// original (non-lowercased) trimmed input; this function never fails.
pub fn interpret(input: &str) -> CommandOutcome {
    let trimmed = input.trim();
    match TerminalCommand::parse(trimmed) {
        Some(TerminalCommand::Help) => CommandOutcome::Output(HELP_TEXT.to_string()),
        Some(TerminalCommand::Scan) => CommandOutcome::Output(SCAN_TEXT.to_string()),
        Some(TerminalCommand::Clear) => CommandOutcome::Clear,
        Some(TerminalCommand::Status) => CommandOutcome::Output(STATUS_TEXT.to_string()),
        None => CommandOutcome::Output(format!(
            "Command not found: {}. Type 'help' for available commands.",
            trimmed
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_is_idempotent() {
        let first = interpret("help");
        let second = interpret("help");
        assert_eq!(first, second);
        assert_eq!(first, CommandOutcome::Output(HELP_TEXT.to_string()));
    }

    #[test]
    fn test_status_is_idempotent() {
        assert_eq!(interpret("status"), interpret("STATUS"));
        assert_eq!(
            interpret("status"),
            CommandOutcome::Output(STATUS_TEXT.to_string())
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let CommandOutcome::Output(text) = interpret("help") else {
            panic!("help should produce output");
        };
        for name in ["scan", "clear", "help", "status"] {
            assert!(text.contains(name), "help output should mention '{}'", name);
        }
    }

    #[test]
    fn test_clear_produces_no_output() {
        assert_eq!(interpret("clear"), CommandOutcome::Clear);
        assert_eq!(interpret("  CLEAR  "), CommandOutcome::Clear);
    }

    #[test]
    fn test_unknown_command_echoes_original_case() {
        let outcome = interpret("  NMap -sV  ");
        assert_eq!(
            outcome,
            CommandOutcome::Output(
                "Command not found: NMap -sV. Type 'help' for available commands.".to_string()
            )
        );
    }

    #[test]
    fn test_interpret_trims_before_matching() {
        assert_eq!(
            interpret("   help   "),
            CommandOutcome::Output(HELP_TEXT.to_string())
        );
    }
}

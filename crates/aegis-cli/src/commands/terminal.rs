//! `aegis terminal` - the interactive security terminal.
//!
//! A rustyline REPL over the pure command interpreter. The REPL owns the
//! terminal history; `clear` wipes both the history and the screen.

use std::borrow::Cow::{self, Borrowed, Owned};

use aegis_core::terminal::{CommandOutcome, TerminalHistory};
use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

const BANNER: &str = "Welcome to Aegis Security Terminal v1.0.0
Type 'help' for available commands.";

const COMMANDS: [&str; 5] = ["help", "scan", "clear", "status", "quit"];

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct TerminalHelper {
    commands: Vec<String>,
}

impl TerminalHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for TerminalHelper {}

impl Completer for TerminalHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for TerminalHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.commands.iter().any(|cmd| cmd == line.trim()) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for TerminalHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return None;
        }

        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for TerminalHelper {}

pub fn run() -> Result<()> {
    let helper = TerminalHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    let mut history = TerminalHistory::new();
    println!("{}", BANNER.green());

    loop {
        match rl.readline("$ ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                let _ = rl.add_history_entry(&line);

                match history.submit(trimmed) {
                    CommandOutcome::Output(output) => {
                        println!("{}", output);
                    }
                    CommandOutcome::Clear => {
                        // ANSI clear screen + cursor home, then the banner.
                        print!("\x1b[2J\x1b[1;1H");
                        println!("{}", BANNER.green());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

//! `aegis chat` - one exchange with the security assistant.

use aegis_core::chat::MessageRole;
use anyhow::Result;
use colored::Colorize;

pub async fn run(message: &str) -> Result<()> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        println!("{}", "Nothing to send".bright_black());
        return Ok(());
    }

    let console = super::build_console()?;

    match console.send_message(trimmed).await {
        Ok(()) => {
            for entry in console.chat_messages() {
                match entry.role {
                    MessageRole::User => println!("{} {}", "you:".green(), entry.content),
                    MessageRole::Assistant => {
                        println!("{}", "assistant:".bright_blue());
                        for line in entry.content.lines() {
                            println!("  {}", line.bright_blue());
                        }
                    }
                }
            }
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", "Failed to reach the assistant".red());
            Err(error.into())
        }
    }
}

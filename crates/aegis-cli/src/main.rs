use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aegis")]
#[command(about = "Aegis - Simulated Security Operations Console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulated security scan and print the findings
    Scan,
    /// Send one message to the security assistant
    Chat {
        /// The message to send
        message: String,
    },
    /// Open the interactive security terminal
    Terminal,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan => commands::scan::run().await?,
        Commands::Chat { message } => commands::chat::run(&message).await?,
        Commands::Terminal => commands::terminal::run()?,
    }

    Ok(())
}

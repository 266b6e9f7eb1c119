//! `aegis scan` - run one simulated security scan.

use aegis_core::scan::Severity;
use anyhow::Result;
use colored::Colorize;

pub async fn run() -> Result<()> {
    let console = super::build_console()?;

    println!("{}", "Starting security scan...".bright_blue());

    match console.start_scan().await {
        Ok(()) => {
            println!("{}", "Scan completed successfully".green());
            for finding in console.scan_results() {
                let severity = match finding.severity {
                    Severity::High => finding.severity.to_string().red(),
                    Severity::Medium => finding.severity.to_string().yellow(),
                    Severity::Low => finding.severity.to_string().bright_blue(),
                };
                println!("  [{}] {}: {}", severity, finding.kind, finding.message);
            }
            Ok(())
        }
        Err(error) if error.is_scan_in_progress() => {
            println!("{}", "A scan is already in progress".yellow());
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", "Failed to complete scan".red());
            Err(error.into())
        }
    }
}

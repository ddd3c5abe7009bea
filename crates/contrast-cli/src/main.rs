//! Contrast CLI
//!
//! Command-line interface for rendering API contract diff reports

use clap::{Parser, Subcommand};
use contrast_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "contrast")]
#[command(about = "Contrast - API contract diff reports", long_about = None)]
struct Cli {
    /// Emit logs to stderr as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a spec diff as an HTML or JSON report
    Render(commands::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Render command
//!
//! Usage: contrast render --diff <FILE> --old <NAME> --new <NAME>
//!        [--config <FILE>] [--output <FILE>] [--format html|text|json]

use clap::{Args, ValueEnum};
use contrast_core::{
    build_report, render_html, render_json, render_text, ReportConfig, SpecDiff,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Spec diff JSON produced by the contract comparison
    #[arg(short, long)]
    pub diff: PathBuf,

    /// Name of the old contract, shown in headings
    #[arg(long)]
    pub old: String,

    /// Name of the new contract, shown in headings
    #[arg(long)]
    pub new: String,

    /// Report configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    let text = std::fs::read_to_string(&args.diff)?;
    let diff = SpecDiff::from_json_str(&text)?;

    let report = build_report(&args.old, &args.new, &diff, &config)?;
    let rendered = match args.format {
        OutputFormat::Html => render_html(&report, &config.render),
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered)?;
        println!("✓ Rendered to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

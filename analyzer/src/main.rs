use analyzer::{analyze, build_report, collect_inputs, render, OutputFormat};
use anyhow::Result;
use booklex_core::Normalizer;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Word-frequency statistics for plain-text documents", long_about = None)]
struct Cli {
    /// Input path (file, or directory of .txt files)
    #[arg(long, default_value = "inputs/activeInput.txt")]
    input: PathBuf,
    /// Prefix to include in the prefix-sum statistic (repeatable)
    #[arg(long = "prefix", default_values_t = ["o".to_string(), "e".to_string()])]
    prefixes: Vec<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also list every distinct word in ascending order
    #[arg(long, default_value_t = false)]
    words: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let files = collect_inputs(&cli.input)?;
    if files.is_empty() {
        tracing::warn!(input = %cli.input.display(), "no .txt files found");
    }
    let (index, lines) = analyze(&files, &Normalizer::new())?;
    let report = build_report(&files, &index, lines, &cli.prefixes, cli.words)?;
    print!("{}", render(&report, cli.format)?);
    Ok(())
}

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use cvvc_rs::cvvc::{run, DirectoryClipSource, SpliceConfig};

/// Splice consonant and vowel clips into CVVC reclist recordings.
#[derive(Debug, Parser)]
#[command(name = "cvvc-concat", version)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory of `<consonant>-.wav` clips.
    #[arg(long)]
    consonant_dir: Option<PathBuf>,
    /// Directory of `<vowel>.wav` clips.
    #[arg(long)]
    vowel_dir: Option<PathBuf>,
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Phrase-table line to synthesize (repeatable). Replaces the built-in table.
    #[arg(long = "line")]
    lines: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SpliceConfig::from_json_file(path)?,
        None => SpliceConfig::default(),
    };
    if let Some(dir) = cli.consonant_dir {
        config.consonant_dir = dir;
    }
    if let Some(dir) = cli.vowel_dir {
        config.vowel_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if !cli.lines.is_empty() {
        config.phrase_table = cli.lines;
    }
    config.validate()?;

    println!("Starting audio concatenation...");
    let start = Instant::now();
    let source = DirectoryClipSource::from_config(&config);
    let summary = run(&config, &source)?;

    if let Some(report) = &summary.report {
        println!("\nError report generated: {}", report.display());
    }
    println!(
        "\nProcessing complete! Successful: {}, Failed: {} ({:.2?})",
        summary.succeeded(),
        summary.failed(),
        start.elapsed()
    );
    Ok(())
}

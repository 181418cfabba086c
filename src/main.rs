use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use infobox_scraper::{batch, Extractor, Settings};

#[derive(Parser)]
#[command(name = "infobox_scraper", about = "Extract language metadata from infobox cell markup")]
struct Cli {
    /// Base URL prepended to relative links (overrides INFOBOX_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a name cell into name, qualifier and link
    Name { fragment: String },
    /// Parse a year cell ("1991", "1970–72")
    Years { text: String },
    /// Parse an "Influenced by" cell
    Predecessors { fragment: String },
    /// Process JSON-lines rows of {name, year, predecessors}
    Extract {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Max rows to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.base_url.as_deref())?;
    let extractor = Extractor::new(&settings);

    match cli.command {
        Commands::Name { fragment } => {
            print_json(&extractor.extract_info_from_name(&fragment))?;
        }
        Commands::Years { text } => {
            print_json(&extractor.extract_year_of_creation(&text))?;
        }
        Commands::Predecessors { fragment } => {
            print_json(&extractor.extract_predecessors(&fragment))?;
        }
        Commands::Extract { input, limit } => {
            let raw = read_input(input.as_ref())?;
            let parsed = batch::parse_rows(&raw, limit);
            if parsed.rows.is_empty() {
                eprintln!("No rows to process ({} lines skipped).", parsed.errors.len());
                return Ok(());
            }

            let pb = ProgressBar::new(parsed.rows.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
                    .progress_chars("#>-"),
            );

            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            let stats = batch::run(&extractor, &parsed, &mut out, |n| pb.inc(n as u64))?;
            pb.finish_and_clear();

            eprintln!(
                "Extracted {} records from {} rows ({} predecessors, {} lines skipped).",
                stats.records, stats.rows, stats.predecessors, stats.skipped
            );
            let elapsed = t0.elapsed();
            if elapsed.as_secs() >= 1 {
                eprintln!("Done in {}", format_duration(elapsed));
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "faq_extract", about = "Extract FAQ categories and entries from markdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a document and print the resulting JSON
    Extract {
        /// Input markdown file (stdin if omitted)
        file: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Parse a document and report extraction warnings (non-zero exit if any)
    Check {
        /// Input markdown file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Extract every *.md file in a directory, writing <name>.json next to each
    Batch {
        dir: PathBuf,
        /// Max files to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { file, pretty } => {
            let markdown = read_input(file.as_deref())?;
            let extraction = faq_extract::extract(&markdown);
            for warning in &extraction.warnings {
                tracing::warn!("{warning}");
            }
            let json = if pretty {
                serde_json::to_string_pretty(&extraction.faq)?
            } else {
                serde_json::to_string(&extraction.faq)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Check { file } => {
            let markdown = read_input(file.as_deref())?;
            let extraction = faq_extract::extract(&markdown);
            let entries: usize = extraction.faq.data.iter().map(|c| c.items.len()).sum();
            println!(
                "{} categories, {} entries, {} warnings",
                extraction.faq.data.len(),
                entries,
                extraction.warnings.len()
            );
            for warning in &extraction.warnings {
                println!("  warning: {warning}");
            }
            if extraction.warnings.is_empty() {
                Ok(())
            } else {
                Err(anyhow::anyhow!(
                    "{} entries skipped",
                    extraction.warnings.len()
                ))
            }
        }
        Commands::Batch { dir, limit } => batch(&dir, limit),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

#[derive(Default)]
struct BatchCounts {
    files: usize,
    categories: usize,
    entries: usize,
    warnings: usize,
    errors: usize,
}

impl BatchCounts {
    fn add(&mut self, other: &BatchCounts) {
        self.files += other.files;
        self.categories += other.categories;
        self.entries += other.entries;
        self.warnings += other.warnings;
        self.errors += other.errors;
    }

    fn print(&self) {
        println!(
            "Extracted {} files: {} categories, {} entries ({} warnings, {} errors).",
            self.files, self.categories, self.entries, self.warnings, self.errors,
        );
    }
}

fn batch(dir: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    if files.is_empty() {
        println!("No markdown files found in {}.", dir.display());
        return Ok(());
    }

    println!("Extracting {} files...", files.len());
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let per_file: Vec<BatchCounts> = files
        .par_iter()
        .map(|path| {
            let counts = batch_one(path);
            pb.inc(1);
            counts
        })
        .collect();
    pb.finish_and_clear();

    let mut totals = BatchCounts::default();
    for c in &per_file {
        totals.add(c);
    }
    totals.print();
    Ok(())
}

fn batch_one(path: &Path) -> BatchCounts {
    let mut counts = BatchCounts::default();
    let markdown = match fs::read_to_string(path) {
        Ok(md) => md,
        Err(err) => {
            tracing::error!("{}: {err}", path.display());
            counts.errors += 1;
            return counts;
        }
    };

    let extraction = faq_extract::extract(&markdown);
    for warning in &extraction.warnings {
        tracing::warn!("{}: {warning}", path.display());
    }

    let out = path.with_extension("json");
    let json = match serde_json::to_string_pretty(&extraction.faq) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!("{}: {err}", path.display());
            counts.errors += 1;
            return counts;
        }
    };
    if let Err(err) = fs::write(&out, json) {
        tracing::error!("{}: {err}", out.display());
        counts.errors += 1;
        return counts;
    }

    counts.files = 1;
    counts.categories = extraction.faq.data.len();
    counts.entries = extraction.faq.data.iter().map(|c| c.items.len()).sum();
    counts.warnings = extraction.warnings.len();
    counts
}

mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use powerpick_data::models::{DrawingRecord, PredictionSet};
use powerpick_data::source::{prepare, CsvSource, DateRange, DrawSource, EmbeddedSource, TextSource};
use powerpick_engine::analysis::analyze;
use powerpick_engine::config::EngineConfig;
use powerpick_engine::predictor::generate_predictions;
use powerpick_engine::sampler::seeded_rng;

use crate::display::{display_draws, display_predictions, display_stats};

#[derive(Parser)]
#[command(name = "powerpick", about = "Powerball drawing statistics and weighted number picks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SourceArgs {
    /// CSV file with columns date,n1,n2,n3,n4,n5,bonus,multiplier
    #[arg(long, conflicts_with = "text")]
    csv: Option<PathBuf>,

    /// Results page saved as plain text
    #[arg(long)]
    text: Option<PathBuf>,

    /// Year used for text dates written without one (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// Oldest drawing date to keep (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Newest drawing date to keep (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Command {
    /// List the most recent drawings
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of drawings to show
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Show frequencies, pairs, overdue numbers, sums and parity
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// JSON engine configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate weighted number picks from the analysis
    Predict {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of sets to generate
        #[arg(short, long, default_value = "5")]
        count: usize,

        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,

        /// JSON engine configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the picks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default engine configuration as JSON
    Config {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::List { source, last } => cmd_list(&source, last),
        Command::Stats {
            source,
            config,
            json,
        } => cmd_stats(&source, config.as_deref(), json),
        Command::Predict {
            source,
            count,
            seed,
            config,
            json,
        } => cmd_predict(&source, count, seed, config.as_deref(), json),
        Command::Config { output } => cmd_config(output.as_deref()),
    }
}

fn load_records(args: &SourceArgs) -> Result<Vec<DrawingRecord>> {
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let source: Box<dyn DrawSource> = match (&args.csv, &args.text) {
        (Some(path), _) => Box::new(CsvSource::new(path)),
        (None, Some(path)) => Box::new(TextSource::new(path, year)),
        (None, None) => Box::new(EmbeddedSource::default()),
    };

    let records = source.load()?;
    let range = DateRange {
        from: args.from,
        to: args.to,
    };
    let records = prepare(records, range);
    log::info!("{} drawings loaded from {}", records.len(), source.name());
    Ok(records)
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn cmd_list(source: &SourceArgs, last: usize) -> Result<()> {
    let records = load_records(source)?;
    display_draws(&records[..last.min(records.len())]);
    Ok(())
}

fn cmd_stats(source: &SourceArgs, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let records = load_records(source)?;
    let snapshot = analyze(&records, &config.analysis).context("Analysis failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        display_stats(&snapshot, &records);
    }
    Ok(())
}

#[derive(Serialize)]
struct PredictOutput<'a> {
    draw_count: usize,
    seed: Option<u64>,
    predictions: &'a [PredictionSet],
}

fn cmd_predict(
    source: &SourceArgs,
    count: usize,
    seed: Option<u64>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let records = load_records(source)?;
    let snapshot = analyze(&records, &config.analysis).context("Analysis failed")?;

    let mut rng = seeded_rng(seed);
    let predictions = generate_predictions(&snapshot, count, &config.predictor, &mut rng)
        .context("Prediction failed")?;

    if json {
        let output = PredictOutput {
            draw_count: snapshot.draw_count,
            seed,
            predictions: &predictions,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_predictions(&predictions, snapshot.draw_count);
    }
    Ok(())
}

fn cmd_config(output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&EngineConfig::default())?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?;
            println!("Default configuration written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

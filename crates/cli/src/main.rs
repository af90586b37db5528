//! # weightrend
//!
//! Command-line interface for the weight trend prediction stack.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use prediction_facade::{Clock, PredictionEngine, SystemClock, WeightGoal, WeightSample};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "weightrend")]
#[command(about = "Weight trend prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the weight trend, goal dates, and next-month weight
    Predict {
        /// Entries file (CSV with date,weight_kg columns, or JSON array)
        #[arg(short, long)]
        input: PathBuf,

        /// Active goals file (JSON array)
        #[arg(short, long)]
        goals: Option<PathBuf>,

        /// Override today's date, YYYY-MM-DD (defaults to the system date)
        #[arg(short, long)]
        today: Option<String>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the individual strategy slopes behind the blended estimate
    Trend {
        /// Entries file (CSV with date,weight_kg columns, or JSON array)
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Load weight entries from a CSV file with `date,weight_kg` columns
fn load_csv_entries(path: &PathBuf) -> CliResult<Vec<WeightSample>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut samples = Vec::new();
    for result in reader.deserialize() {
        let sample: WeightSample = result.map_err(|e| format!("Failed to read record: {}", e))?;
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err("No entries found in input file".to_string());
    }

    Ok(samples)
}

/// Load weight entries from a JSON array of `{date, weight_kg}` objects
fn load_json_entries(path: &PathBuf) -> CliResult<Vec<WeightSample>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);

    let samples: Vec<WeightSample> =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    if samples.is_empty() {
        return Err("No entries found in input file".to_string());
    }

    Ok(samples)
}

/// Load entries from file (auto-detect format) and sort them by date
///
/// The engine's ordering contract belongs to its callers, so the CLI sorts
/// here rather than trusting the file.
fn load_entries(path: &PathBuf) -> CliResult<Vec<WeightSample>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut samples = match ext.as_str() {
        "csv" => load_csv_entries(path),
        "json" => load_json_entries(path),
        _ => load_csv_entries(path).or_else(|_| load_json_entries(path)),
    }?;

    samples.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(samples)
}

/// Load active goals from a JSON array
fn load_goals(path: &PathBuf) -> CliResult<Vec<WeightGoal>> {
    let file = File::open(path).map_err(|e| format!("Failed to open goals file: {}", e))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| format!("Failed to parse goals JSON: {}", e))
}

/// Resolve "today" from the flag or the system clock
fn resolve_today(flag: Option<&str>) -> CliResult<NaiveDate> {
    match flag {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|e| format!("Invalid --today value '{}': {}", text, e)),
        None => Ok(SystemClock.today()),
    }
}

/// Write a JSON value to file or stdout
fn write_results(json: &serde_json::Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Report written to {:?}", path);
    } else {
        println!("{}", serde_json::to_string_pretty(json).unwrap());
    }

    Ok(())
}

/// Run predict command
fn run_predict(
    input: PathBuf,
    goals: Option<PathBuf>,
    today: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let samples = load_entries(&input)?;
    let goals = match goals {
        Some(path) => load_goals(&path)?,
        None => Vec::new(),
    };
    let today = resolve_today(today.as_deref())?;

    let engine = PredictionEngine::new();
    let report = engine.report(&samples, &goals, today);

    let json = serde_json::to_value(&report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    write_results(&json, output.as_ref())
}

/// Run trend command
fn run_trend(input: PathBuf) -> CliResult<()> {
    let samples = load_entries(&input)?;

    let engine = PredictionEngine::new();
    let json = match engine.slopes(&samples) {
        Some(slopes) => serde_json::json!({
            "entryCount": samples.len(),
            "slopes": slopes,
        }),
        None => serde_json::json!({
            "entryCount": samples.len(),
            "slopes": serde_json::Value::Null,
        }),
    };

    write_results(&json, None)
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            input,
            goals,
            today,
            output,
        } => run_predict(input, goals, today, output),

        Commands::Trend { input } => run_trend(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use clap::Parser;
use peakloc::{LocateConfig, PeakLocator, DEFAULT_ERROR_RANGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Locate dominant signal peaks with sub-sample precision"
)]
struct Cli {
    /// Path to a JSON file holding one signal (array of integers) or a
    /// batch (array of such arrays). Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Rival-search radius and flat-top tolerance.
    #[arg(long, value_name = "SAMPLES", default_value_t = DEFAULT_ERROR_RANGE)]
    error_range: usize,
    /// Emit results as a JSON document instead of plain lines.
    #[arg(long)]
    json: bool,
    /// Write the output to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Enable tracing output for profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignalInput {
    Batch(Vec<Vec<i32>>),
    Single(Vec<i32>),
}

impl SignalInput {
    fn into_signals(self) -> Vec<Vec<i32>> {
        match self {
            SignalInput::Batch(signals) => signals,
            SignalInput::Single(signal) => vec![signal],
        }
    }
}

#[derive(Debug, Serialize)]
struct PositionRecord {
    index: usize,
    position: f64,
    shape: &'static str,
}

#[derive(Debug, Serialize)]
struct Output {
    error_range: usize,
    results: Vec<PositionRecord>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("peakloc=info".parse()?)
                    .add_directive("peakloc_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    let text = read_input(cli.input.as_ref())?;
    let signals: Vec<Vec<i32>> = serde_json::from_str::<SignalInput>(&text)?.into_signals();
    tracing::info!(signals = signals.len(), "input parsed");

    let locator = PeakLocator::with_config(LocateConfig {
        error_range: cli.error_range,
    })?;

    // Signals are independent; one bad entry must not abort the batch.
    let mut results = Vec::with_capacity(signals.len());
    let mut failures = 0usize;
    for (index, signal) in signals.iter().enumerate() {
        match locator.locate(signal) {
            Ok(found) => results.push(PositionRecord {
                index,
                position: found.position,
                shape: found.shape.as_str(),
            }),
            Err(err) => {
                failures += 1;
                eprintln!("signal {index}: {err}");
            }
        }
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&Output {
            error_range: cli.error_range,
            results,
        })?
    } else {
        results
            .iter()
            .map(|r| format!("{} ({})", r.position, r.shape))
            .collect::<Vec<_>>()
            .join("\n")
    };

    match cli.output {
        Some(path) => fs::write(path, rendered + "\n")?,
        None => println!("{rendered}"),
    }

    if failures > 0 {
        return Err(format!("{failures} of {} signal(s) failed", signals.len()).into());
    }

    Ok(())
}

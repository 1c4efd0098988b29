use clap::{Parser, ValueEnum};
use form_infer::config::{InferConfig, TelemetryConfig};
use form_infer::{analyze_in_background, materialize};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Infer a form schema from pasted questions", long_about = None)]
struct Args {
    /// Questions to analyze, one per line
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Read questions from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Output::Questions)]
    output: Output,

    /// Number of fields already on the form (offsets `order`)
    #[arg(long, default_value_t = 0)]
    existing: usize,

    /// Pause before analysis, overriding FORM_INFER_ANALYSIS_DELAY_MS
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Output {
    /// Classified questions with confidence scores
    Questions,
    /// Materialized field records
    Fields,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match InferConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(&config.telemetry) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args, &config).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean JSON. `RUST_LOG` wins over the
/// configured level.
fn init_logging(config: &TelemetryConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| format!("invalid log level '{}': {}", config.log_level, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}

async fn run(args: Args, config: &InferConfig) -> Result<String, Box<dyn std::error::Error>> {
    let text = match (args.text, args.input) {
        (Some(t), _) => t,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err("no input text provided".into());
    }

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(config.analysis_delay);
    let questions = analyze_in_background(text, delay).await?;

    let json = match args.output {
        Output::Questions => serde_json::to_string_pretty(&questions)?,
        Output::Fields => serde_json::to_string_pretty(&materialize(&questions, args.existing))?,
    };
    Ok(json)
}

use std::env;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod counter;
mod error;
mod input;
mod ranker;
mod report;

use error::{FreqError, Result};

const DEFAULT_LOG_FILTER: &str = "warn";

/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG` overrides the level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("debug: logging disabled: {}", e);
    }
}

fn run(args: &[String]) -> Result<()> {
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("freq-counter");
        return Err(FreqError::Usage { program: program.to_string() });
    }
    let path = Path::new(&args[1]);

    let text = input::read_text(path)?;
    let freq_map = counter::count_chars_parallel(&text);
    let ranking = ranker::rank(freq_map);
    tracing::debug!(unique = ranking.unique, total = ranking.total, "ranked");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_report(&mut out, &ranking)?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

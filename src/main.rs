use anyhow::Context;
use commission_fees::{config::Config, Orchestrator};
use std::io::{self, BufWriter, Write};

fn main() {
    // Logs go to stderr so stdout carries only fees.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let input_path = match std::env::args().nth(1).or_else(|| config.input_path.clone()) {
        Some(path) => path,
        None => {
            eprintln!("Usage: commission-fees <operations.json>");
            eprintln!("       (or set COMMISSION_INPUT_PATH)");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &input_path) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, input_path: &str) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(config.commission.clone());
    let fees = orchestrator
        .run_path(input_path)
        .with_context(|| format!("failed to calculate commissions for {}", input_path))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for fee in &fees {
        writeln!(out, "{}", fee)?;
    }
    out.flush()?;
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::error;

use retentee::utils::{setup_logging, validate_args};
use retentee::{run, Args, Config};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    let config = Config::from(&args);
    let outcomes = run(&config, args.fail_fast);

    let failures: Vec<_> = outcomes.iter().filter(|o| !o.is_ok()).collect();
    if failures.is_empty() {
        return Ok(());
    }

    for outcome in &failures {
        if let Err(e) = &outcome.result {
            error!(action = "summary", component = "run", dataset = outcome.name, error = %e, "Dataset produced no report");
            eprintln!("{}: {}", outcome.label, e);
        }
    }
    std::io::stdout().flush()?;
    std::process::exit(1);
}

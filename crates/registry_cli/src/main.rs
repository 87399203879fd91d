//! Customer registry CLI entry point.
//!
//! # Responsibility
//! - Parse launch options and optionally enable file logging.
//! - Build the in-memory registry and hand stdin/stdout to the menu loop.
//!
//! # Invariants
//! - Customer data lives only for the lifetime of the process.
//! - Log output never goes to stdout, so the menu text stays clean.

mod menu;

use clap::Parser;
use log::{error, info};
use registry_core::{
    default_log_level, init_logging, seed_customers, CustomerService, InMemoryCustomerRepository,
    LogLevel,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "customer_registry")]
#[command(version, about = "Interactive in-memory customer registry")]
struct Cli {
    /// Start with no customers instead of the sample records
    #[arg(long)]
    empty: bool,

    /// Absolute directory for rolling log files (logging is off when omitted)
    #[arg(long, value_name = "ABS_PATH")]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse::<LogLevel>().map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.unwrap_or_else(default_log_level);
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let repo = if cli.empty {
        InMemoryCustomerRepository::new()
    } else {
        InMemoryCustomerRepository::with_customers(seed_customers())
    };
    let mut service = CustomerService::new(repo);
    info!(
        "event=session_start module=cli status=ok count={}",
        service.list().len()
    );

    let stdin = io::stdin();
    let mut console = menu::Console::new(stdin.lock(), io::stdout().lock());
    match menu::run(&mut service, &mut console) {
        Ok(()) => {
            info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=session_end module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

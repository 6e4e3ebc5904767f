//! Route table generator - Command-line tool for building a route dispatch module.
//!
//! Scans a directory of web handler files and writes a module mapping every URL path
//! to the handler file serving it.
//!
//! # Usage
//!
//! ```bash
//! route-table-gen [OPTIONS]
//! ```
//!
//! # Examples
//!
//! Generate `src/routes.ts` from `src/routes/`, run from the project root:
//! ```bash
//! route-table-gen
//! ```
//!
//! Generate a JSON manifest instead:
//! ```bash
//! route-table-gen -f json -o build/routes.json
//! ```

use anyhow::Result;
use route_table_gen::cli;
use route_table_gen::error::Error;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Successful runs stay silent unless verbose output is requested
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<Error>() {
            Some(config_err) if config_err.is_configuration() => {
                println!("{}", config_err);
                std::process::exit(1);
            }
            _ => Err(err),
        },
    }
}

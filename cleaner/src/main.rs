//! `clean-generated`: remove generated `debian/` and `rpm/` directories.
//!
//! Reads the code tree root from `CODE_DIR` (default `/opt/code_dir`) and
//! deletes every packaging directory beneath it so the packaging generator
//! can recreate them from scratch.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use cleaner::clean::run_clean;
use cleaner::config::{CODE_DIR_ENV, CleanConfig, DEFAULT_CODE_DIR};
use cleaner::error::CleanError;
use cleaner::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "clean-generated",
    version,
    about = "Remove generated debian/ and rpm/ directories before regeneration",
    after_help = format!("The root is read from ${CODE_DIR_ENV} (default: {DEFAULT_CODE_DIR}).")
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        let code = err
            .downcast_ref::<CleanError>()
            .map_or(exit_codes::FAILED, CleanError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let config = CleanConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_clean(&config, &mut out)
        .with_context(|| format!("clean {}", config.root.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        let _cli = Cli::parse_from(["clean-generated"]);
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["clean-generated", "/tmp"]).is_err());
    }
}

//! Main entry point for colcompare CLI

use clap::error::ErrorKind;
use clap::Parser;
use colcompare::cli::{normalize_args, Cli, USAGE};
use colcompare::commands::run_compare;

fn main() {
    // Parse command line arguments
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            return;
        }
    };

    // Initialize logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let Some(config) = cli.into_config() else {
        println!("{}", USAGE);
        return;
    };

    let stdout = std::io::stdout();
    if let Err(e) = run_compare(&config, stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

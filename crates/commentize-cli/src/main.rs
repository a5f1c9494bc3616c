use clap::Parser;
use commentize_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Parse first: missing --inFile/--outFile must fail before any I/O.
    let cli = Cli::parse();

    if let Some(log_file) = cli.log_file_path() {
        if let Err(err) = log_file.and_then(|path| logging::init_logging(&path)) {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
    } else {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run().await {
        eprintln!("commentize error: {:#}", err);
        std::process::exit(1);
    }
}

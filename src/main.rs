//! upscale-runner CLI entrypoint.
//!
//! Parse args, dispatch to single-file or batch upscaling, and exit with
//! an appropriate status. For programmatic use, prefer `upscale_runner::api`.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

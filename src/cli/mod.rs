//! Command Line Interface (CLI) layer.
//!
//! Defines argument parsing (`args`), error types (`errors`) and the
//! orchestration logic (`runner`) for single-file and batch upscaling.
//! Embedders should call `upscale_runner::api` instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

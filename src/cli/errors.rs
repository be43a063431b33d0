use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Cannot combine {single} with {batch}")]
    MixedModes {
        single: &'static str,
        batch: &'static str,
    },

    #[error(transparent)]
    Upscale(#[from] upscale_runner::Error),
}

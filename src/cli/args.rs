use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "upscale-runner", version, about = "Run an external image upscaler")]
pub struct CliArgs {
    /// Source image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination PNG (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory of source images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory for upscaled PNGs (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Upscaler executable, invoked with no arguments.
    /// Leave unset to use the embedded waifu2x script.
    #[arg(short, long)]
    pub upscaler: Option<PathBuf>,

    /// Interpreter for the embedded script (default: python)
    #[arg(long)]
    pub interpreter: Option<String>,

    /// JSON file with upscale parameters; flags given here override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Multiply both dimensions by this factor
    #[arg(long, allow_negative_numbers = true)]
    pub scale: Option<i64>,

    /// Fit target width (width OR height reaches the target)
    #[arg(long, allow_negative_numbers = true)]
    pub target_width: Option<i64>,

    /// Fit target height
    #[arg(long, allow_negative_numbers = true)]
    pub target_height: Option<i64>,

    /// Fill minimum width (width AND height reach the minimum)
    #[arg(long, allow_negative_numbers = true)]
    pub min_width: Option<i64>,

    /// Fill minimum height
    #[arg(long, allow_negative_numbers = true)]
    pub min_height: Option<i64>,

    /// Ask the upscaler to denoise (may be ignored).
    /// Only turns denoise on; a config file with "denoise": true cannot be overridden here
    #[arg(long, default_value_t = false)]
    pub denoise: bool,

    /// Batch mode: keep going when a file fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Batch mode: write a JSON report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

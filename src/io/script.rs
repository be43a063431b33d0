//! Default upscaler used when no executable is configured.
//!
//! The script drives `waifu2x-ncnn-vulkan` and speaks the same environment
//! protocol as any user-supplied upscaler. It is passed inline with `-c`, so
//! nothing is written to disk.

/// Program that runs [`DEFAULT_SCRIPT`]
pub const DEFAULT_INTERPRETER: &str = "python";

pub const DEFAULT_SCRIPT: &str = include_str!("../../scripts/default-upscale.py");

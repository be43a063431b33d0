//! I/O layer around the external upscaler.
//! Provides the embedded default `script`, and `destination` checks run
//! before (extension) and after (existence) an invocation.
pub mod destination;
pub use destination::{ensure_png_destination, verify_output_exists};

pub mod script;
pub use script::{DEFAULT_INTERPRETER, DEFAULT_SCRIPT};

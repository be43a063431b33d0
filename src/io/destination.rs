use std::path::Path;

use crate::error::{Error, Result};

/// Reject destinations whose extension is not `png` (any case)
pub fn ensure_png_destination(destination: &Path) -> Result<()> {
    match destination.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(()),
        _ => Err(Error::InvalidDestinationFormat {
            path: destination.to_path_buf(),
        }),
    }
}

/// Confirm the upscaler actually wrote `destination`.
/// Symlinks count as long as they resolve.
pub fn verify_output_exists(destination: &Path) -> Result<()> {
    std::fs::metadata(destination)
        .map(|_| ())
        .map_err(|source| Error::OutputMissing {
            path: destination.to_path_buf(),
            source,
        })
}

//! Environment variables understood by upscaler executables.
use std::ffi::OsString;
use std::path::Path;

use crate::types::ResizeMode;

pub const SOURCE: &str = "UPSCALE_SOURCE";
pub const DESTINATION: &str = "UPSCALE_DESTINATION";
pub const SCALING_FACTOR: &str = "UPSCALE_SCALING_FACTOR";
pub const TARGET_WIDTH: &str = "UPSCALE_TARGET_WIDTH";
pub const TARGET_HEIGHT: &str = "UPSCALE_TARGET_HEIGHT";
pub const MIN_WIDTH: &str = "UPSCALE_MIN_WIDTH";
pub const MIN_HEIGHT: &str = "UPSCALE_MIN_HEIGHT";
pub const DENOISE: &str = "UPSCALE_DENOISE";

/// Variables added on top of the inherited environment for one invocation.
///
/// Width/height pairs are emitted together as soon as either is non-zero.
pub fn upscale_vars(
    source: &Path,
    destination: &Path,
    resize: &ResizeMode,
    denoise: bool,
) -> Vec<(&'static str, OsString)> {
    let mut vars = vec![
        (SOURCE, source.as_os_str().to_owned()),
        (DESTINATION, destination.as_os_str().to_owned()),
    ];

    let scale = resize.scale();
    if scale != 0 {
        vars.push((SCALING_FACTOR, scale.to_string().into()));
    }

    push_pair(&mut vars, (TARGET_WIDTH, TARGET_HEIGHT), resize.target());
    push_pair(&mut vars, (MIN_WIDTH, MIN_HEIGHT), resize.minimum());

    if denoise {
        vars.push((DENOISE, "true".into()));
    }

    vars
}

fn push_pair(
    vars: &mut Vec<(&'static str, OsString)>,
    (width_key, height_key): (&'static str, &'static str),
    (width, height): (i64, i64),
) {
    if width != 0 || height != 0 {
        vars.push((width_key, width.to_string().into()));
        vars.push((height_key, height.to_string().into()));
    }
}

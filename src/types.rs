//! Shared types used across the crate.
//! Includes the `ResizeMode` tagged union and the `Resolution` reported by upscalers.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the upscaler should size the output image.
///
/// Values are signed so that out-of-range input survives until validation,
/// where a negative component is rejected with `Error::InvalidParameters`.
/// A zero width or height in `FitTo`/`FillTo` means that dimension is ignored.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResizeMode {
    /// Leave the size alone (denoise or format conversion only)
    #[default]
    None,
    /// Multiply both dimensions by a factor
    Scale { factor: i64 },
    /// Fit to container: width OR height reaches the target
    FitTo { width: i64, height: i64 },
    /// Fill container: width AND height reach the minimum
    FillTo { width: i64, height: i64 },
}

impl ResizeMode {
    /// Named numeric components, in the order they are validated
    pub fn components(&self) -> Vec<(&'static str, i64)> {
        match *self {
            ResizeMode::None => Vec::new(),
            ResizeMode::Scale { factor } => vec![("scale", factor)],
            ResizeMode::FitTo { width, height } => {
                vec![("target_width", width), ("target_height", height)]
            }
            ResizeMode::FillTo { width, height } => {
                vec![("min_width", width), ("min_height", height)]
            }
        }
    }

    /// Scale factor, or 0 when another mode is active
    pub fn scale(&self) -> i64 {
        match *self {
            ResizeMode::Scale { factor } => factor,
            _ => 0,
        }
    }

    /// Target (fit) resolution, or (0, 0)
    pub fn target(&self) -> (i64, i64) {
        match *self {
            ResizeMode::FitTo { width, height } => (width, height),
            _ => (0, 0),
        }
    }

    /// Minimum (fill) resolution, or (0, 0)
    pub fn minimum(&self) -> (i64, i64) {
        match *self {
            ResizeMode::FillTo { width, height } => (width, height),
            _ => (0, 0),
        }
    }
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeMode::None => write!(f, "None"),
            ResizeMode::Scale { factor } => write!(f, "Scale(x{})", factor),
            ResizeMode::FitTo { width, height } => write!(f, "FitTo({}x{})", width, height),
            ResizeMode::FillTo { width, height } => write!(f, "FillTo({}x{})", width, height),
        }
    }
}

/// Output resolution as printed by an upscaler, e.g. `3840x2160`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", s))?;
        let width = w
            .parse::<u32>()
            .map_err(|e| format!("invalid width {:?}: {}", w, e))?;
        let height = h
            .parse::<u32>()
            .map_err(|e| format!("invalid height {:?}: {}", h, e))?;
        Ok(Resolution { width, height })
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_parses_trimmed_output() {
        let res: Resolution = "3840x2160\n".parse().unwrap();
        assert_eq!(res, Resolution { width: 3840, height: 2160 });
        assert_eq!(res.to_string(), "3840x2160");
    }

    #[test]
    fn resolution_rejects_garbage() {
        assert!("".parse::<Resolution>().is_err());
        assert!("1920".parse::<Resolution>().is_err());
        assert!("axb".parse::<Resolution>().is_err());
        assert!("-1x20".parse::<Resolution>().is_err());
    }

    #[test]
    fn accessors_report_zero_for_inactive_families() {
        let fit = ResizeMode::FitTo { width: 800, height: 0 };
        assert_eq!(fit.scale(), 0);
        assert_eq!(fit.target(), (800, 0));
        assert_eq!(fit.minimum(), (0, 0));

        let scale = ResizeMode::Scale { factor: 2 };
        assert_eq!(scale.target(), (0, 0));
        assert_eq!(scale.components(), vec![("scale", 2)]);
        assert!(ResizeMode::None.components().is_empty());
    }

    #[test]
    fn resize_mode_serializes_with_tag() {
        let json = serde_json::to_string(&ResizeMode::FillTo { width: 10, height: 20 }).unwrap();
        assert_eq!(json, r#"{"mode":"fill_to","width":10,"height":20}"#);
    }
}

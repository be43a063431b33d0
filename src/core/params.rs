use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::upscaler::Upscaler;
use crate::error::{Error, Result};
use crate::types::ResizeMode;

/// Upscale parameters suitable for config files and CLI flags.
///
/// Values are flat, so a file may name both a scale and a resolution;
/// [`UpscaleParams::resize_mode`] rejects such combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpscaleParams {
    /// Upscaler executable; None uses the embedded default script
    pub executable: Option<PathBuf>,
    /// Interpreter for the default script; None uses `python`
    pub interpreter: Option<String>,
    pub scale: i64,
    pub target_width: i64,
    pub target_height: i64,
    pub min_width: i64,
    pub min_height: i64,
    pub denoise: bool,
}

impl UpscaleParams {
    /// Load parameters from a JSON file. Anything before the first `{` is
    /// ignored, so files may start with a `//` comment header.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json = content.find('{').map_or("", |start| &content[start..]);
        let params: UpscaleParams = serde_json::from_str(json)?;
        debug!("Loaded upscale parameters from {:?}: {:?}", path, params);
        Ok(params)
    }

    /// Reject negative numeric values, in the same field order `Upscaler::validate` uses
    pub fn check_non_negative(&self) -> Result<()> {
        let fields = [
            ("scale", self.scale),
            ("target_width", self.target_width),
            ("target_height", self.target_height),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
        ];
        match fields.into_iter().find(|&(_, value)| value < 0) {
            Some((field, value)) => Err(Error::InvalidParameters { field, value }),
            None => Ok(()),
        }
    }

    /// Collapse the flat values into a single resize family.
    /// Negative values are reported before any conflict between families.
    pub fn resize_mode(&self) -> Result<ResizeMode> {
        self.check_non_negative()?;

        let has_target = self.target_width != 0 || self.target_height != 0;
        let has_min = self.min_width != 0 || self.min_height != 0;

        if self.scale != 0 && (has_target || has_min) {
            return Err(Error::conflicting(
                "cannot specify scaling factor alongside target or minimum resolution",
            ));
        }
        if has_target && has_min {
            return Err(Error::conflicting(
                "cannot specify both target (fit) and minimum (fill) resolution",
            ));
        }

        Ok(if self.scale != 0 {
            ResizeMode::Scale { factor: self.scale }
        } else if has_target {
            ResizeMode::FitTo {
                width: self.target_width,
                height: self.target_height,
            }
        } else if has_min {
            ResizeMode::FillTo {
                width: self.min_width,
                height: self.min_height,
            }
        } else {
            ResizeMode::None
        })
    }

    pub fn to_upscaler(&self) -> Result<Upscaler> {
        let mut upscaler = Upscaler::new(self.executable.clone());
        upscaler
            .set_resize_mode(self.resize_mode()?)
            .set_denoise(self.denoise);
        if let Some(interpreter) = &self.interpreter {
            upscaler.set_interpreter(interpreter.clone());
        }
        Ok(upscaler)
    }
}

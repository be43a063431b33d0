//! The `Upscaler`: resize/denoise settings plus one synchronous run of an
//! external upscaler (validate, invoke, verify).
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::core::env;
use crate::error::{Error, ExecutionError, Result};
use crate::io::{DEFAULT_INTERPRETER, DEFAULT_SCRIPT, ensure_png_destination, verify_output_exists};
use crate::types::{ResizeMode, Resolution};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Wraps an external executable that upscales images.
///
/// Configure it with the fluent setters, then call [`Upscaler::process`] as
/// many times as needed; the settings are only read during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upscaler {
    executable: Option<PathBuf>,
    interpreter: String,
    resize: ResizeMode,
    denoise: bool,
}

impl Default for Upscaler {
    fn default() -> Self {
        Self {
            executable: None,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            resize: ResizeMode::None,
            denoise: false,
        }
    }
}

impl Upscaler {
    /// Create an upscaler around `executable`. `None` or an empty path selects
    /// the embedded default script.
    pub fn new(executable: Option<PathBuf>) -> Self {
        Self {
            executable: executable.filter(|p| !p.as_os_str().is_empty()),
            ..Default::default()
        }
    }

    /// Multiply both dimensions by `scale`. Clears any target or minimum resolution.
    pub fn set_scale(&mut self, scale: i64) -> &mut Self {
        self.resize = ResizeMode::Scale { factor: scale };
        self
    }

    /// "Fit to container": afterwards the width OR the height reaches the target.
    /// A zero dimension is ignored.
    ///
    /// Replaces the current resize setting: this clears the scale and also any
    /// minimum resolution from [`Upscaler::set_min_resolution`], since fit and
    /// fill are exclusive here.
    pub fn set_target_resolution(&mut self, width: i64, height: i64) -> &mut Self {
        self.resize = ResizeMode::FitTo { width, height };
        self
    }

    /// "Fill container": afterwards the width AND the height reach the minimum.
    /// A zero dimension is ignored.
    ///
    /// Replaces the current resize setting: this clears the scale and also any
    /// target resolution from [`Upscaler::set_target_resolution`].
    pub fn set_min_resolution(&mut self, width: i64, height: i64) -> &mut Self {
        self.resize = ResizeMode::FillTo { width, height };
        self
    }

    pub fn set_resize_mode(&mut self, resize: ResizeMode) -> &mut Self {
        self.resize = resize;
        self
    }

    /// Request denoising. Upscalers are free to ignore it.
    pub fn set_denoise(&mut self, denoise: bool) -> &mut Self {
        self.denoise = denoise;
        self
    }

    /// Program used to run the default script; has no effect with an explicit executable.
    pub fn set_interpreter<S: Into<String>>(&mut self, interpreter: S) -> &mut Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    pub fn resize_mode(&self) -> ResizeMode {
        self.resize
    }

    pub fn denoise(&self) -> bool {
        self.denoise
    }

    /// Checks performed before anything is spawned
    pub fn validate(&self, destination: &Path) -> Result<()> {
        ensure_png_destination(destination)?;

        for (field, value) in self.resize.components() {
            if value < 0 {
                return Err(Error::InvalidParameters { field, value });
            }
        }
        Ok(())
    }

    /// `UPSCALE_*` variables for a run from `source` to `destination`
    pub fn environment(&self, source: &Path, destination: &Path) -> Vec<(&'static str, OsString)> {
        env::upscale_vars(source, destination, &self.resize, self.denoise)
    }

    /// Build the child process: inherited environment plus [`Upscaler::environment`]
    pub fn command(&self, source: &Path, destination: &Path) -> Command {
        let mut cmd = match &self.executable {
            Some(exe) => Command::new(exe),
            None => {
                let mut cmd = Command::new(&self.interpreter);
                cmd.arg("-c").arg(DEFAULT_SCRIPT);
                cmd
            }
        };

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd.envs(self.environment(source, destination));
        cmd
    }

    /// Upscale `source` into `destination`, which must be a PNG path.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(&self, source: P, destination: Q) -> Result<()> {
        self.process_reporting(source, destination).map(|_| ())
    }

    /// Same as [`Upscaler::process`], also returning the resolution the
    /// upscaler printed, when it printed a well-formed `WIDTHxHEIGHT`.
    pub fn process_reporting<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
    ) -> Result<Option<Resolution>> {
        let (source, destination) = (source.as_ref(), destination.as_ref());
        self.validate(destination)?;

        let mut cmd = self.command(source, destination);
        let program = cmd.get_program().to_string_lossy().into_owned();
        debug!(
            "Running upscaler {:?} ({}, denoise={}): {:?} -> {:?}",
            program, self.resize, self.denoise, source, destination
        );

        let output = cmd
            .output()
            .map_err(|source| ExecutionError::Spawn { program, source })?;

        if !output.status.success() {
            return Err(ExecutionError::Exit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        verify_output_exists(destination)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        let reported = match stdout.parse::<Resolution>() {
            Ok(res) => Some(res),
            Err(e) => {
                if !stdout.is_empty() {
                    debug!("Ignoring upscaler output {:?}: {}", stdout, e);
                }
                None
            }
        };

        match reported {
            Some(res) => info!("Upscaled {:?} -> {:?} ({})", source, destination, res),
            None => info!("Upscaled {:?} -> {:?}", source, destination),
        }
        Ok(reported)
    }
}

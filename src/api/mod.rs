//! High-level library API: upscale a single file or every image in a
//! directory using `UpscaleParams`. Prefer these entrypoints over driving
//! `core::upscaler::Upscaler` by hand when working from config values.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::UpscaleParams;
use crate::error::Result;
use crate::io::ensure_png_destination;
use crate::types::Resolution;

/// Upscale `source` into the PNG `destination` using `params`.
/// Checks run in order: destination extension, negative values, conflicting families.
pub fn upscale_file(
    source: &Path,
    destination: &Path,
    params: &UpscaleParams,
) -> Result<Option<Resolution>> {
    ensure_png_destination(destination)?;
    params.to_upscaler()?.process_reporting(source, destination)
}

/// Batch processing report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl BatchReport {
    fn start() -> Self {
        Self {
            processed: 0,
            skipped: 0,
            errors: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Sorted entries of `dir`, split into regular files and everything else
fn partition_entries(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths.into_iter().partition(|p| p.is_file()))
}

/// Regular files directly inside `input_dir`, sorted by path
pub fn iterate_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let (files, _) = partition_entries(input_dir)?;
    Ok(files.into_iter())
}

/// Output path for `input` inside `output_dir`: same stem, `.png` extension
pub fn destination_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".png");
    output_dir.join(name)
}

/// Upscale every file in `input_dir` into `output_dir` using `params`.
/// If `continue_on_error` is true, failures are counted in the report and
/// processing continues; otherwise the first error is returned.
pub fn upscale_directory(
    input_dir: &Path,
    output_dir: &Path,
    params: &UpscaleParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    // Negative or conflicting parameters would fail every file; surface them once.
    // Destinations are always `.png`, so the extension check cannot fail here.
    let upscaler = params.to_upscaler()?;
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::start();

    let (files, others) = partition_entries(input_dir)?;
    for path in &others {
        info!("Skipping non-file: {:?}", path);
    }
    report.skipped = others.len();

    for path in files {
        let output_path = destination_for(&path, output_dir);
        info!("Processing: {:?} -> {:?}", path, output_path);

        match upscaler.process(&path, &output_path) {
            Ok(()) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
            }
        }
    }

    report.finished_at = Some(Utc::now());
    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn destination_replaces_extension() {
        let out = Path::new("/out");
        assert_eq!(
            destination_for(Path::new("/in/photo.jpg"), out),
            PathBuf::from("/out/photo.png")
        );
        assert_eq!(
            destination_for(Path::new("/in/archive.tar.gz"), out),
            PathBuf::from("/out/archive.tar.png")
        );
        assert_eq!(
            destination_for(Path::new("/in/noext"), out),
            PathBuf::from("/out/noext.png")
        );
    }

    #[test]
    fn iterate_images_lists_sorted_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files: Vec<_> = iterate_images(dir.path()).unwrap().collect();
        assert_eq!(
            files,
            vec![dir.path().join("a.png"), dir.path().join("b.jpg")]
        );
    }

    #[test]
    fn destination_is_checked_before_params() {
        let conflicting = UpscaleParams {
            scale: 2,
            target_width: 800,
            ..Default::default()
        };
        assert!(matches!(
            upscale_file(Path::new("in.jpg"), Path::new("out.jpg"), &conflicting),
            Err(Error::InvalidDestinationFormat { .. })
        ));

        let negative = UpscaleParams {
            scale: -1,
            min_width: 5,
            ..Default::default()
        };
        assert!(matches!(
            upscale_file(Path::new("in.jpg"), Path::new("out.jpg"), &negative),
            Err(Error::InvalidDestinationFormat { .. })
        ));
    }

    #[test]
    fn negative_values_are_checked_before_conflicts() {
        let params = UpscaleParams {
            scale: -1,
            min_width: 5,
            ..Default::default()
        };
        assert!(matches!(
            upscale_file(Path::new("in.jpg"), Path::new("out.png"), &params),
            Err(Error::InvalidParameters { field: "scale", value: -1 })
        ));

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        assert!(matches!(
            upscale_directory(dir.path(), &out, &params, true),
            Err(Error::InvalidParameters { field: "scale", value: -1 })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn report_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = BatchReport::start();
        report.processed = 3;
        report.errors = 1;
        report.finished_at = Some(Utc::now());

        let path = dir.path().join("report.json");
        report.write_json(&path).unwrap();
        let loaded: BatchReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, report);
    }
}

use tracing::info;
use tracing_subscriber::EnvFilter;

use upscale_runner::api::{upscale_directory, upscale_file};
use upscale_runner::UpscaleParams;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(enabled: bool) {
    if enabled {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Config file values (if any) overridden by command-line flags.
/// Any resize flag replaces every resize value from the file.
fn build_params(args: &CliArgs) -> Result<UpscaleParams, AppError> {
    let mut params = match &args.config {
        Some(path) => UpscaleParams::from_json_file(path)?,
        None => UpscaleParams::default(),
    };

    if args.upscaler.is_some() {
        params.executable = args.upscaler.clone();
    }
    if args.interpreter.is_some() {
        params.interpreter = args.interpreter.clone();
    }

    let resize_flags = [
        args.scale,
        args.target_width,
        args.target_height,
        args.min_width,
        args.min_height,
    ];
    if resize_flags.iter().any(Option::is_some) {
        params.scale = args.scale.unwrap_or(0);
        params.target_width = args.target_width.unwrap_or(0);
        params.target_height = args.target_height.unwrap_or(0);
        params.min_width = args.min_width.unwrap_or(0);
        params.min_height = args.min_height.unwrap_or(0);
    }

    params.denoise |= args.denoise;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = build_params(&args)?;
    let batch_mode = args.input_dir.is_some() || args.output_dir.is_some();

    if batch_mode {
        if args.input.is_some() {
            return Err(AppError::MixedModes {
                single: "--input",
                batch: "--input-dir/--output-dir",
            }
            .into());
        }
        if args.output.is_some() {
            return Err(AppError::MixedModes {
                single: "--output",
                batch: "--input-dir/--output-dir",
            }
            .into());
        }
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch upscale from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = upscale_directory(&input_dir, &output_dir, &params, args.continue_on_error)
            .map_err(AppError::from)?;

        if let Some(path) = &args.report {
            report.write_json(path).map_err(AppError::from)?;
            info!("Report written to {:?}", path);
        }
        println!(
            "processed={} skipped={} errors={}",
            report.processed, report.skipped, report.errors
        );
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        let reported = upscale_file(&input, &output, &params).map_err(AppError::from)?;
        info!("Successfully upscaled: {:?} -> {:?}", input, output);
        if let Some(res) = reported {
            println!("{}", res);
        }
    }

    Ok(())
}

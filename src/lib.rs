#![doc = r#"
upscale-runner — drive an external image upscaler from Rust.

This crate configures and runs an external upscaling executable (by default an
embedded script wrapping `waifu2x-ncnn-vulkan`). Settings are validated, handed to
the child process as `UPSCALE_*` environment variables, and the destination PNG is
verified to exist once the process exits successfully. It powers the
`upscale-runner` CLI and can be embedded in your own applications.

Requirements
------------
- An upscaler executable that speaks the environment protocol below, or
  `python`, `waifu2x-ncnn-vulkan` and ImageMagick for the default script.
- Rust 2024 edition toolchain.

Environment protocol
--------------------
| Variable | When set |
|---|---|
| `UPSCALE_SOURCE` | always |
| `UPSCALE_DESTINATION` | always; a `.png` path |
| `UPSCALE_SCALING_FACTOR` | scale is non-zero |
| `UPSCALE_TARGET_WIDTH` / `UPSCALE_TARGET_HEIGHT` | either fit dimension is non-zero |
| `UPSCALE_MIN_WIDTH` / `UPSCALE_MIN_HEIGHT` | either fill dimension is non-zero |
| `UPSCALE_DENOISE` | denoise requested (`true`) |

The executable is invoked without arguments, must exit with status 0 and write
the destination. It may print the resulting `WIDTHxHEIGHT` on stdout.

Quick start
-----------
```rust,no_run
use upscale_runner::Upscaler;

fn main() -> upscale_runner::Result<()> {
    let mut upscaler = Upscaler::new(None);
    upscaler.set_target_resolution(3840, 2160).set_denoise(true);
    upscaler.process("/images/in.jpg", "/images/out.png")
}
```

From config values
------------------
```rust,no_run
use std::path::Path;
use upscale_runner::{upscale_file, UpscaleParams};

fn main() -> upscale_runner::Result<()> {
    let params = UpscaleParams {
        scale: 2,
        ..Default::default()
    };
    if let Some(res) = upscale_file(Path::new("in.webp"), Path::new("out.png"), &params)? {
        println!("upscaled to {res}");
    }
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use upscale_runner::{upscale_directory, UpscaleParams};

fn main() -> upscale_runner::Result<()> {
    let params = UpscaleParams::from_json_file(Path::new("preset.json"))?;
    let report = upscale_directory(Path::new("/in"), Path::new("/out"), &params, true)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `upscale_runner::Result<T>`; match on
`upscale_runner::Error` to handle specific cases.

```rust,no_run
use upscale_runner::{Error, Upscaler};

fn main() {
    let mut upscaler = Upscaler::new(Some("/opt/upscaler/run".into()));
    upscaler.set_scale(2);
    match upscaler.process("in.jpg", "out.png") {
        Ok(()) => {}
        Err(Error::ExecutionFailed(e)) => eprintln!("upscaler failed: {e}"),
        Err(Error::OutputMissing { path, .. }) => eprintln!("no output at {path:?}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level single-file and batch entry points.
- [`core`] — the `Upscaler`, its environment protocol and `UpscaleParams`.
- [`types`] — `ResizeMode` and `Resolution`.
- [`io`] — the embedded default script and destination checks.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::UpscaleParams;
pub use crate::core::upscaler::Upscaler;
pub use error::{Error, ExecutionError, Result};
pub use types::{ResizeMode, Resolution};

pub use api::{BatchReport, iterate_images, upscale_directory, upscale_file};

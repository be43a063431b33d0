use std::fs;
use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_upscale-runner"))
}

#[test]
fn help_lists_resize_flags() {
    let output = cli().arg("--help").output().expect("run --help");
    assert!(
        output.status.success(),
        "--help failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--scale",
        "--target-width",
        "--target-height",
        "--min-width",
        "--min-height",
        "--denoise",
        "--upscaler",
        "--config",
    ] {
        assert!(stdout.contains(flag), "missing {flag} in help output");
    }
    assert!(
        stdout.contains("cannot be overridden"),
        "--denoise help should explain it only enables denoising"
    );
}

#[test]
fn non_png_output_fails_before_running_upscaler() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli()
        .args(["--input", "in.jpg", "--output"])
        .arg(dir.path().join("out.jpg"))
        .args(["--upscaler", "/nonexistent/upscaler"])
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Destination must be a .png file"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn errors_are_printed_as_messages() {
    let output = cli().args(["--output", "out.png"]).output().expect("run cli");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim(), "Error: Missing required argument: --input");
    assert!(!stderr.contains("MissingArgument"), "debug output leaked: {stderr}");
}

#[test]
fn negative_scale_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli()
        .args(["--input", "in.jpg", "--output"])
        .arg(dir.path().join("out.png"))
        .args(["--scale", "-2"])
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("scale=-2"), "unexpected stderr: {stderr}");
}

#[test]
fn non_png_output_wins_over_conflicting_flags() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli()
        .args(["--input", "in.jpg", "--output"])
        .arg(dir.path().join("out.jpg"))
        .args(["--scale", "2", "--target-width", "800"])
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Destination must be a .png file"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn conflicting_flags_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli()
        .args(["--input", "in.jpg", "--output"])
        .arg(dir.path().join("out.png"))
        .args(["--scale", "2", "--target-width", "800"])
        .output()
        .expect("run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Conflicting parameters"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn missing_input_is_reported() {
    let output = cli().args(["--output", "out.png"]).output().expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--input"), "unexpected stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn batch_mode_writes_report() {
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("in");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("one.jpg"), b"x").unwrap();
    let report = work.path().join("report.json");

    // `true` never writes outputs, so every file counts as an error.
    let output = cli()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output-dir")
        .arg(work.path().join("out"))
        .args(["--upscaler", "true", "--continue-on-error", "--report"])
        .arg(&report)
        .output()
        .expect("run cli");

    assert!(
        output.status.success(),
        "batch failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("processed=0 skipped=0 errors=1"), "stdout: {stdout}");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value.get("errors").and_then(|v| v.as_u64()), Some(1));
    assert!(value.get("started_at").is_some());
}

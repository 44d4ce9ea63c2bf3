//! CLI tests: exit status and streams of the real binary with the bundled image converter.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn imgconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn write_jpg(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbImage::from_pixel(4, 4, image::Rgb([200, 10, 10]))
        .save(path)
        .unwrap();
}

#[test]
fn test_no_dir_prints_usage_and_exits_zero() {
    let out = imgconv(&[]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("source_ext"));
}

#[test]
fn test_missing_dir_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let out = imgconv(&[missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!String::from_utf8_lossy(&out.stdout).contains("[OK]"));
}

#[test]
fn test_converts_tree_to_png() {
    let dir = tempfile::tempdir().unwrap();
    write_jpg(&dir.path().join("a.jpg"));
    write_jpg(&dir.path().join("sub/b.JPG"));

    let out = imgconv(&[dir.path().to_str().unwrap()]);
    assert!(out.status.success());
    assert!(dir.path().join("a.png").is_file());
    assert!(dir.path().join("sub/b.png").is_file());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("[OK]").count(), 2);
    let img = image::open(dir.path().join("a.png")).unwrap();
    assert_eq!((img.width(), img.height()), (4, 4));
}

#[test]
fn test_failed_file_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_jpg(&dir.path().join("good1.jpg"));
    write_jpg(&dir.path().join("good2.jpg"));
    fs::write(dir.path().join("broken.jpg"), b"definitely not a jpeg").unwrap();

    let out = imgconv(&[dir.path().to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("[Failed]").count(), 1);
    assert!(stdout.contains("broken.jpg"));
    assert!(!dir.path().join("broken.png").exists());
    assert!(dir.path().join("good1.png").is_file());
    assert!(!String::from_utf8_lossy(&out.stderr).is_empty());
}

#[test]
fn test_extension_flags_and_jobs() {
    let dir = tempfile::tempdir().unwrap();
    write_jpg(&dir.path().join("x.jpg"));
    let root = dir.path().to_str().unwrap();

    let out = imgconv(&["--source_ext", "JPG", "--target-ext", ".bmp", "-j", "2", root]);
    assert!(out.status.success());
    assert!(dir.path().join("x.bmp").is_file());
}

#[test]
fn test_config_file_is_overridden_by_flags() {
    let dir = tempfile::tempdir().unwrap();
    write_jpg(&dir.path().join("x.jpg"));
    fs::write(
        dir.path().join(".imgconv.toml"),
        "[settings]\ntarget_ext = \"tiff\"\n",
    )
    .unwrap();
    let root = dir.path().to_str().unwrap();

    let out = imgconv(&[root]);
    assert!(out.status.success());
    assert!(dir.path().join("x.tiff").is_file());

    let out = imgconv(&["--target_ext", "bmp", root]);
    assert!(out.status.success());
    assert!(dir.path().join("x.bmp").is_file());
}

#[test]
fn test_single_dash_long_flag_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_jpg(&dir.path().join("x.jpg"));
    let root = dir.path().to_str().unwrap();

    let out = imgconv(&["-source_ext=jpg", root]);
    assert!(!out.status.success());
    assert!(!dir.path().join("x.png").exists());
}

#[test]
fn test_invalid_extension_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = imgconv(&["--target_ext", "p=ng", dir.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid extension"));
}

#[test]
fn test_rust_log_off_silences_logger() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.jpg"), b"not a jpeg").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .arg(dir.path())
        .env("RUST_LOG", "off")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    assert!(String::from_utf8_lossy(&out.stdout).contains("[Failed]"));
}

#[test]
fn test_closed_stdout_with_pool_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..40 {
        fs::write(dir.path().join(format!("junk{i:02}.jpg")), b"not a jpeg").unwrap();
    }
    let mut child = Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(["-j", "1", dir.path().to_str().unwrap()])
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Reader goes away before the first line is written.
    drop(child.stdout.take());
    let out = child.wait_with_output().unwrap();

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("Converted 0/40 files (40 failed)"));
    assert!(!stderr.contains("panicked"));
}

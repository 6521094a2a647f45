use std::path::PathBuf;
use std::process::Command;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_waves-native"))
}

fn out_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("waves_native_cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cli_writes_png_of_canvas_size() {
    let out_path = out_dir().join("frame.png");
    let _ = std::fs::remove_file(&out_path);

    let status = Command::new(bin())
        .args([
            "--viewport-height",
            "200",
            "--seed",
            "16",
            "--pointer",
            "30,90",
            "--taps",
            "2",
            "--rng-seed",
            "7",
            "--out",
        ])
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(&out_path).unwrap();
    // 200 * 0.38 = 76 wide, 2 * (200 * 0.35) = 140 tall
    assert_eq!((img.width(), img.height()), (76, 140));
}

#[test]
fn cli_accepts_custom_palette() {
    let out_path = out_dir().join("palette.png");
    let _ = std::fs::remove_file(&out_path);

    let status = Command::new(bin())
        .args(["--viewport-height", "100", "--palette", "#FFFFFF,#000000", "--out"])
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(out_path.is_file());
}

#[test]
fn cli_rejects_bad_palette_and_pointer() {
    let out_path = out_dir().join("never.png");

    let status = Command::new(bin())
        .args(["--palette", "#nothex", "--out"])
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(!status.success());

    let status = Command::new(bin())
        .args(["--pointer", "12", "--out"])
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(!status.success());
}

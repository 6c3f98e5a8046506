use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkpad_cmd() -> Command {
    Command::cargo_bin("inkpad").expect("binary exists")
}

fn write_script(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.json");
    std::fs::write(&path, contents).unwrap();
    path
}

const SQUIGGLE: &str = r#"[
    {"op": "press", "x": 5, "y": 5},
    {"op": "move", "x": 15, "y": 10},
    {"op": "move", "x": 20, "y": 20},
    {"op": "release"}
]"#;

#[test]
fn inkpad_help_prints_usage() {
    inkpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand glyph capture surface for handwriting recognition",
        ));
}

#[test]
fn script_argument_is_required() {
    inkpad_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn missing_script_file_is_reported() {
    let temp = TempDir::new().unwrap();
    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn replayed_gesture_writes_png_and_prints_tokens() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SQUIGGLE);
    let png_path = temp.path().join("glyph.png");

    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script)
        .args(["--output", png_path.to_str().unwrap(), "--tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"kind":"start"}"#))
        .stdout(predicate::str::contains(r#"{"kind":"end"}"#));

    let png = std::fs::read(&png_path).unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn payload_flag_prints_a_data_url() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SQUIGGLE);

    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script)
        .arg("--payload")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/png;base64,"));
}

#[test]
fn locked_replay_records_nothing() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        r#"[
            {"op": "lock"},
            {"op": "press", "x": 5, "y": 5},
            {"op": "move", "x": 15, "y": 10},
            {"op": "release"}
        ]"#,
    );

    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script)
        .arg("--tokens")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn custom_config_sets_the_raster_dimensions() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, SQUIGGLE);
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "[surface]\nwidth = 28\nheight = 28\n").unwrap();
    let png_path = temp.path().join("glyph.png");

    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script)
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--output", png_path.to_str().unwrap()])
        .assert()
        .success();

    // IHDR width/height are big-endian u32 at byte offsets 16 and 20.
    let png = std::fs::read(&png_path).unwrap();
    assert_eq!(&png[16..20], &[0, 0, 0, 28]);
    assert_eq!(&png[20..24], &[0, 0, 0, 28]);
}

#[test]
fn malformed_script_is_rejected() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, r#"[{"op": "scribble"}]"#);

    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

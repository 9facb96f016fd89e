/// Tests that run the `renderstat` binary
///
/// They cover what only the real process shows: JSON on standard output
/// and log lines on the console.
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CUBE_SCENE: &str = r#"{
    "geometry": {
        "kind": "solid3d", "facets": 12, "convex": true,
        "bounding_box": { "min": [0, 0, 0], "max": [1, 1, 1] }
    },
    "camera": { "distance": 10, "fov": 22.5 }
}"#;

fn write_scene(dir: &Path) -> PathBuf {
    let path = dir.join("scene.json");
    std::fs::write(&path, CUBE_SCENE).unwrap();
    path
}

fn renderstat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_renderstat"))
        .args(args)
        .env_remove("RENDERSTAT_CONFIG")
        .env_remove("RENDERSTAT_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_summary_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let scene = write_scene(dir.path());

    let output = renderstat(&[
        scene.to_str().unwrap(),
        "--summary",
        "geometry",
        "--summary",
        "bounding_box",
        "--summary-file",
        "-",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["geometry"]["facets"], 12);
    assert_eq!(doc["geometry"]["bounding_box"]["size"], json!([1.0, 1.0, 1.0]));
    assert!(doc.get("camera").is_none());
    assert!(doc.get("cache").is_none());
}

#[test]
fn test_log_on_console() {
    let dir = tempfile::tempdir().unwrap();
    let scene = write_scene(dir.path());

    let output = renderstat(&[scene.to_str().unwrap(), "--summary", "camera"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l.starts_with("Total rendering time: ")));
    assert!(stdout.lines().any(|l| l == "Top level object is a 3D object:"));
    assert!(stdout.lines().any(|l| l == "   Distance:    10.00"));
}

#[test]
fn test_missing_scene_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let output = renderstat(&[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

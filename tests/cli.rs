use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkboard_cmd() -> Command {
    Command::cargo_bin("inkboard").expect("binary exists")
}

const SAMPLE_BOARD: &str = r##"[
    {"id":"1718000000000","tool":"pen","color":"#EF4444","size":5.0,
     "points":[{"x":10.0,"y":10.0},{"x":20.0,"y":10.0},{"x":20.0,"y":20.0}]},
    {"id":"1718000000001","tool":"rectangle","color":"#3B82F6","size":3.0,
     "points":[{"x":0.0,"y":0.0},{"x":50.0,"y":30.0}]},
    {"id":"1718000000002","tool":"text","color":"#000000","size":8.0,
     "points":[{"x":40.0,"y":60.0}],"text":"hello"}
]"##;

#[test]
fn help_prints_usage() {
    inkboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replayable whiteboard drawing core"));
}

#[test]
fn inspect_summarizes_actions_per_tool() {
    let temp = TempDir::new().unwrap();
    let board = temp.path().join("whiteboard-state.json");
    std::fs::write(&board, SAMPLE_BOARD).unwrap();

    inkboard_cmd()
        .arg("inspect")
        .arg("-i")
        .arg(&board)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 action(s)"))
        .stdout(predicate::str::contains("pen: 1"))
        .stdout(predicate::str::contains("rectangle: 1"))
        .stdout(predicate::str::contains("text: 1"));
}

#[test]
fn render_writes_a_png() {
    let temp = TempDir::new().unwrap();
    let board = temp.path().join("whiteboard-state.json");
    let image = temp.path().join("board.png");
    std::fs::write(&board, SAMPLE_BOARD).unwrap();

    inkboard_cmd()
        .arg("render")
        .arg("-i")
        .arg(&board)
        .arg("-o")
        .arg(&image)
        .args(["--width", "200", "--height", "120", "--theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 3 actions"));

    let bytes = std::fs::read(&image).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn render_rejects_malformed_boards() {
    let temp = TempDir::new().unwrap();
    let board = temp.path().join("whiteboard-state.json");
    let image = temp.path().join("board.png");
    std::fs::write(&board, "not json").unwrap();

    inkboard_cmd()
        .arg("render")
        .arg("-i")
        .arg(&board)
        .arg("-o")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file format"));

    assert!(!image.exists());
}

#[test]
fn render_rejects_unknown_theme() {
    let temp = TempDir::new().unwrap();
    let board = temp.path().join("whiteboard-state.json");
    std::fs::write(&board, SAMPLE_BOARD).unwrap();

    inkboard_cmd()
        .arg("render")
        .arg("-i")
        .arg(&board)
        .arg("-o")
        .arg(temp.path().join("out.png"))
        .args(["--theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn inspect_fails_cleanly_on_missing_file() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd()
        .arg("inspect")
        .arg("-i")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure();
}

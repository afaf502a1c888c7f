use super::*;
use crate::config::StorageConfig;
use crate::draw::{ActionLog, DrawingAction, Point, Tool};
use tempfile::TempDir;

fn pen(id: &str, points: &[(f64, f64)]) -> DrawingAction {
    DrawingAction {
        id: id.into(),
        tool: Tool::Pen,
        color: "#000000".into(),
        size: 5.0,
        points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        text: None,
    }
}

#[test]
fn save_and_load_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE_NAME);

    let actions = vec![
        pen("1", &[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]),
        DrawingAction::text_at("2".into(), "#EF4444".into(), 8.0, Point::new(5.0, 5.0), "hi".into()),
    ];

    save_board(&path, &actions).unwrap();
    let restored = load_board(&path, &StorageConfig::default()).unwrap();
    assert_eq!(restored, actions);
}

#[test]
fn save_overwrites_atomically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE_NAME);

    save_board(&path, &[pen("1", &[(0.0, 0.0)])]).unwrap();
    save_board(&path, &[pen("2", &[(1.0, 1.0)]), pen("3", &[(2.0, 2.0)])]).unwrap();

    let restored = load_board(&path, &StorageConfig::default()).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored[0].id, "2");

    // No temp leftovers.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn failed_load_leaves_log_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE_NAME);
    std::fs::write(&path, "not json").unwrap();

    let mut log = ActionLog::new();
    log.replace_all(vec![pen("1", &[(0.0, 0.0)])]);

    let result = load_board(&path, &StorageConfig::default());
    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("Invalid file format"));

    // The log is only replaced on success, so it is exactly as before.
    assert_eq!(log.len(), 1);
    assert_eq!(log.committed()[0].id, "1");
}

#[test]
fn load_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    assert!(load_board(&path, &StorageConfig::default()).is_err());
}

#[test]
fn load_refuses_oversize_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE_NAME);

    // 4 MiB of valid JSON, 1 MiB limit: refused before parsing.
    let big = format!("[{}0]", "0,".repeat(2 * 1024 * 1024));
    std::fs::write(&path, big).unwrap();

    let limits = StorageConfig {
        max_file_size_mb: 1,
        ..Default::default()
    };
    let err = load_board(&path, &limits).unwrap_err();
    assert!(format!("{err:#}").contains("exceeds"));
}

#[test]
fn load_truncates_to_max_actions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE_NAME);

    let actions: Vec<DrawingAction> = (0..10)
        .map(|i| pen(&i.to_string(), &[(f64::from(i), 0.0)]))
        .collect();
    save_board(&path, &actions).unwrap();

    let limits = StorageConfig {
        max_actions: 4,
        ..Default::default()
    };
    let restored = load_board(&path, &limits).unwrap();
    assert_eq!(restored.len(), 4);
    assert_eq!(restored[3].id, "3");
}

#[test]
fn loaded_actions_replace_the_log_wholesale() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(BOARD_FILE_NAME);
    save_board(&path, &[pen("10", &[(0.0, 0.0)])]).unwrap();

    let mut log = ActionLog::new();
    log.replace_all(vec![pen("1", &[(0.0, 0.0)]), pen("2", &[(1.0, 1.0)])]);
    log.begin(pen("3", &[(2.0, 2.0)]));

    let actions = load_board(&path, &StorageConfig::default()).unwrap();
    log.replace_all(actions);

    assert_eq!(log.len(), 1);
    assert_eq!(log.committed()[0].id, "10");
    assert!(log.in_progress().is_none());
}

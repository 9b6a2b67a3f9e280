//! Config file loading tests

use mdgrid::config::EditorConfig;
use mdgrid::session::EditSession;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "blank_rows: [oops\n").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        min_column_width: 5,
        undo_limit: 20,
        blank_rows: 2,
        blank_columns: 4,
    };
    config.save_to(&path).unwrap();
    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_config_shapes_blank_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "blank_rows: 4\nblank_columns: 2\nmin_column_width: 6\n").unwrap();

    let config = EditorConfig::load_from(&path);
    let session = EditSession::blank(0, &config);
    assert_eq!((session.row_count(), session.column_count()), (4, 2));
    assert!(session.grid().columns().iter().all(|c| c.width == 6));
}

//! Config persistence and document loading against real files.

use confdiff::core::{
    load_file, Algorithm, Config, ConfigError, DocumentSource, LoadError, TieBreak, MAX_FILE_SIZE,
};
use tempfile::TempDir;

#[test]
fn missing_config_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        lookahead_window: 12,
        tie_break: TieBreak::PreferDeletion,
        algorithm: Algorithm::Myers,
        theme: "everforest".to_string(),
        color: false,
    };

    config.save_to(&path).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"tie_break\": \"deletion\""));
    assert!(raw.contains("\"algorithm\": \"myers\""));
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn malformed_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn file_source_loads_and_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.yaml");
    std::fs::write(&path, "name: api\r\nreplicas: 2\r\n").unwrap();

    let source = DocumentSource::File(path.clone());
    assert_eq!(source.path(), Some(path.as_path()));
    assert_eq!(source.label(), path.display().to_string());

    let buffer = source.load().unwrap();
    assert_eq!(buffer.owned_lines(), vec!["name: api\r", "replicas: 2\r", ""]);
}

#[test]
fn empty_file_is_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.yaml");
    std::fs::write(&path, "").unwrap();

    let buffer = load_file(&path).unwrap();
    assert!(buffer.is_empty());
    assert_eq!(buffer.line_count(), 0);
}

#[test]
fn oversized_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huge.yaml");
    let file = std::fs::File::create(&path).unwrap();
    // Sparse file; nothing is actually written.
    file.set_len(MAX_FILE_SIZE + 1).unwrap();

    let err = load_file(&path).unwrap_err();
    match err {
        LoadError::TooLarge { size, max, .. } => {
            assert_eq!(size, MAX_FILE_SIZE + 1);
            assert_eq!(max, MAX_FILE_SIZE);
        }
        other => panic!("unexpected error: {other}"),
    }
}

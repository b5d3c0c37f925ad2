use std::sync::Arc;

use cuecss_rs::{CueCssError, Engine, MemoryTarget, Registry, init_logger};
use log::LevelFilter;

#[test]
fn test_file_logger_records_skipped_selectors() {
    let path = std::env::temp_dir().join(format!("cuecss-log-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    init_logger(&path, LevelFilter::Debug).unwrap();

    let mut registry = Registry::new();
    registry.add(Arc::new(MemoryTarget::new()), "d1", &["spot"]).unwrap();
    let mut engine = Engine::with_css(registry, ".test1 spot { color: red; }").unwrap();
    engine.activate(".test1").unwrap();
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[WARN]"), "log was: {contents}");
    assert!(contents.contains("skipping selector \".test1 spot\""));
    assert!(contents.contains("[DEBUG]"));

    // trace is above the configured level
    assert!(!contents.contains("[TRACE]"));

    let err = init_logger(&path, LevelFilter::Info).unwrap_err();
    assert!(matches!(err, CueCssError::LoggerInstalled(_)));

    let _ = std::fs::remove_file(&path);
}

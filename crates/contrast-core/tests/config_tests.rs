#![allow(clippy::unwrap_used, clippy::expect_used)]

use contrast_core::errors::ContrastError;
use contrast_core::ReportConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contrast.toml");
    fs::write(
        &path,
        r#"
starting_indent = 1
index_depth = 3

[render]
title = "Release 5.0"
changed_style = "background-color:gold;"
"#,
    )
    .unwrap();

    let config = ReportConfig::load(&path).unwrap();

    assert_eq!(config.starting_indent, 1);
    assert_eq!(config.index_depth, 3);
    assert_eq!(config.render.title, "Release 5.0");
    assert_eq!(config.render.changed_style, "background-color:gold;");
    assert_eq!(config.render.added_style, "background-color:lightgreen;");
}

#[test]
fn test_unknown_render_key_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contrast.toml");
    fs::write(&path, "[render]\nfont = \"serif\"\n").unwrap();

    let err = ReportConfig::load(&path).unwrap_err();

    assert!(matches!(err, ContrastError::Config(_)));
    assert!(!err.is_config_error());
}

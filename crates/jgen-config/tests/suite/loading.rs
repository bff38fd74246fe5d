use jgen_config::{
    CommentsConfig, ConfigError, EngineConfig, ImportsConfig, LoggingConfig,
    DEFAULT_IMPLICIT_PACKAGE,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn empty_document_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.imports.implicit_packages, vec![DEFAULT_IMPLICIT_PACKAGE.to_owned()]);
    assert_eq!(config.comments.max_line_length, 100);
    assert_eq!(config.comments.indent, "");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
}

#[test]
fn full_document_round_trips() {
    let text = r#"
[imports]
implicit_packages = ["java.lang", "com.google.protobuf"]

[comments]
max_line_length = 80
indent = "  "

[logging]
level = "jgen.writer=trace,info"
json = true
"#;
    let config = EngineConfig::from_toml_str(text).unwrap();
    assert_eq!(
        config,
        EngineConfig {
            imports: ImportsConfig {
                implicit_packages: vec!["java.lang".into(), "com.google.protobuf".into()],
            },
            comments: CommentsConfig {
                max_line_length: 80,
                indent: "  ".into(),
            },
            logging: LoggingConfig {
                level: "jgen.writer=trace,info".into(),
                json: true,
            },
        }
    );
}

#[test]
fn partial_table_keeps_other_defaults() {
    let config = EngineConfig::from_toml_str("[comments]\nindent = \"    \"\n").unwrap();
    assert_eq!(config.comments.max_line_length, 100);
    assert_eq!(config.comments.indent, "    ");
    assert_eq!(config.imports, ImportsConfig::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = EngineConfig::from_toml_str("[imports]\nimplicit_package = [\"java.lang\"]\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");

    let err = EngineConfig::from_toml_str("[render]\nwidth = 3\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn validation_rejects_empty_package_entry() {
    let err = EngineConfig::from_toml_str("[imports]\nimplicit_packages = [\"java.lang\", \" \"]\n")
        .unwrap_err();
    match err {
        ConfigError::Invalid { field, message } => {
            assert_eq!(field, "imports.implicit_packages");
            assert_eq!(message, "entry 1 is empty");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_rejects_narrow_comments() {
    let err = EngineConfig::from_toml_str("[comments]\nmax_line_length = 12\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid `comments.max_line_length`: 12 is below the minimum of 20"
    );
}

#[test]
fn empty_implicit_package_list_is_allowed() {
    let config = EngineConfig::from_toml_str("[imports]\nimplicit_packages = []\n").unwrap();
    assert!(config.imports.implicit_packages.is_empty());
}

#[test]
fn load_from_path_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jgen.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

    let config = EngineConfig::load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn load_from_missing_path_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = EngineConfig::load_from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string())
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn env_filter_accepts_directive_strings() {
    let config = LoggingConfig {
        level: "jgen.writer=trace,warn".into(),
        json: false,
    };
    let rendered = config.env_filter().to_string();
    assert!(rendered.contains("jgen.writer=trace"), "{rendered}");
}

//! 配置与可观测性集成测试
//!
//! 测试从配置目录加载配置后初始化日志的完整流程。

use pricing_shared::config::AppConfig;
use pricing_shared::observability;
use std::fs;

#[test]
fn test_init_from_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[observability]\nlog_level = \"debug\"\njson_logs = true\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json_logs);

    observability::init(&config.observability).unwrap();
    tracing::info!("logging initialized from config");

    // 第二次初始化保持首次安装的 subscriber
    observability::init(&config.observability).unwrap();
}

#[test]
fn test_environment_specific_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[rules]\npath = \"pricing/rules.json\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.rules.path.to_str(), Some("pricing/rules.json"));
}

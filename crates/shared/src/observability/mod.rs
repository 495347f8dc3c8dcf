//! 统一可观测性模块
//!
//! 所有二进制通过单一入口点初始化日志，确保一致的输出格式。
//! 日志统一写入 stderr，stdout 留给命令行交互与结果输出。

pub mod tracing;

pub use crate::config::ObservabilityConfig;

use ::tracing::debug;
use anyhow::Result;

/// 初始化可观测性
///
/// 重复初始化（例如在测试中）不会报错，后续调用保持首次安装的 subscriber。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let installed = tracing::init(config)?;

    debug!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        installed,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        let config = ObservabilityConfig::default();
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }
}

//! 日志订阅器初始化

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::ObservabilityConfig;

/// 构建环境过滤器
///
/// 优先级：`RUST_LOG` > 配置中的 `log_level` > `warn`。
pub fn build_env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// 安装全局 subscriber
///
/// 返回是否由本次调用完成安装；已存在全局 subscriber 时返回 `false`。
pub fn init(config: &ObservabilityConfig) -> Result<bool> {
    let env_filter = build_env_filter(config);

    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(false)
            .boxed()
    };

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    match result {
        Ok(()) => Ok(true),
        Err(_) if tracing::dispatcher::has_been_set() => Ok(false),
        Err(e) => Err(e).context("failed to install tracing subscriber"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "pricing=loudest".to_string(),
            json_logs: false,
        };
        // 非法过滤表达式回退到 warn
        assert_eq!(build_env_filter(&config).to_string(), "warn");
    }

    #[test]
    fn test_configured_level_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            json_logs: false,
        };
        assert_eq!(build_env_filter(&config).to_string(), "debug");
    }
}

//! 定价引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("规则文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("未知的条件标签: 规则 #{rule_index} '{tag}'")]
    UnknownConditionTag { rule_index: usize, tag: String },

    #[error("未知的动作标签: 规则 #{rule_index} '{tag}'")]
    UnknownActionTag { rule_index: usize, tag: String },

    #[error("无效的动作取值: 规则 #{rule_index} 值 {value}")]
    InvalidActionValue { rule_index: usize, value: f64 },

    #[error("输入无效: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RuleError>;

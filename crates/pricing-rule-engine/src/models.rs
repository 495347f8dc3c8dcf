//! 定价引擎领域模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 贷款产品
///
/// 由调用方独占持有，评估时以可变引用交给执行器原地修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub interest_rate: f64,
    pub state: String,
    pub credit_score: i32,
    #[serde(default)]
    pub disqualified: bool,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        interest_rate: f64,
        state: impl Into<String>,
        credit_score: i32,
    ) -> Self {
        Self {
            name: name.into(),
            interest_rate,
            state: state.into(),
            credit_score,
            disqualified: false,
        }
    }
}

/// 定价规则（规则文件中的原始记录）
///
/// 字段名与规则文件保持一致；多余字段会被忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "ActionValue", default)]
    pub action_value: f64,
}

impl PricingRule {
    pub fn new(condition: impl Into<String>, action: impl Into<String>, action_value: f64) -> Self {
        Self {
            condition: condition.into(),
            action: action.into(),
            action_value,
        }
    }
}

/// 评估诊断信息
///
/// 所有诊断均为非致命：评估总会执行完毕。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// 规则集未加载，评估未做任何修改
    RulesNotLoaded,
    /// 条件标签无法识别，该规则视为不匹配
    UnknownCondition { rule_index: usize, tag: String },
    /// 动作标签无法识别，该规则未产生修改
    UnknownAction { rule_index: usize, tag: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RulesNotLoaded => write!(f, "Error: Pricing rules not loaded."),
            Self::UnknownCondition { tag, .. } => write!(f, "Unknown condition: {}", tag),
            Self::UnknownAction { tag, .. } => write!(f, "Unknown action: {}", tag),
        }
    }
}

/// 评估报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    /// 实际访问的规则数
    pub rules_evaluated: usize,
    /// 条件匹配的规则序号（按规则文件顺序）
    pub matched_rules: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
    pub evaluation_trace: Vec<String>,
    pub evaluation_time_us: u64,
}

impl EvaluationReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

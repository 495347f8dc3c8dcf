//! 规则编译器
//!
//! 将规则文件中的原始记录解析为带类型的条件/动作，标签只在加载时解析一次。

use crate::error::{Result, RuleError};
use crate::models::PricingRule;
use crate::operators::{Action, Condition};
use tracing::debug;

/// 编译后的规则
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    /// 在规则文件中的序号（从 0 开始）
    pub index: usize,
    pub condition: Condition,
    pub action: Action,
}

impl CompiledRule {
    /// 是否包含无法识别的标签
    pub fn has_unknown_tag(&self) -> bool {
        !self.condition.is_known() || !self.action.is_known()
    }
}

/// 规则编译器
#[derive(Debug, Clone, Default)]
pub struct RuleCompiler {
    strict_tags: bool,
}

impl RuleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 严格模式：未知标签直接导致编译失败
    pub fn strict(mut self, strict_tags: bool) -> Self {
        self.strict_tags = strict_tags;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_tags
    }

    /// 从 JSON 字符串编译整个规则集
    pub fn compile_from_json(&self, json: &str) -> Result<Vec<CompiledRule>> {
        let rules: Vec<PricingRule> = serde_json::from_str(json)?;
        self.compile_all(rules)
    }

    /// 按顺序编译规则
    pub fn compile_all(&self, rules: Vec<PricingRule>) -> Result<Vec<CompiledRule>> {
        rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| self.compile(index, rule))
            .collect()
    }

    /// 编译单条规则
    pub fn compile(&self, index: usize, rule: PricingRule) -> Result<CompiledRule> {
        if !rule.action_value.is_finite() {
            return Err(RuleError::InvalidActionValue {
                rule_index: index,
                value: rule.action_value,
            });
        }

        // 未知标签在宽松模式下保留，评估时以诊断信息报告
        let condition = Condition::from_tag(&rule.condition);
        if let Condition::Unknown(tag) = &condition {
            if self.strict_tags {
                return Err(RuleError::UnknownConditionTag {
                    rule_index: index,
                    tag: tag.clone(),
                });
            }
            debug!(rule_index = index, tag = %tag, "Rule has unknown condition tag");
        }

        let action = Action::from_tag(&rule.action, rule.action_value);
        if let Action::Unknown(tag) = &action {
            if self.strict_tags {
                return Err(RuleError::UnknownActionTag {
                    rule_index: index,
                    tag: tag.clone(),
                });
            }
            debug!(rule_index = index, tag = %tag, "Rule has unknown action tag");
        }

        Ok(CompiledRule {
            index,
            condition,
            action,
        })
    }
}

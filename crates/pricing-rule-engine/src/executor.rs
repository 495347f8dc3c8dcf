//! 规则执行器
//!
//! 按规则文件顺序单次遍历规则集，条件成立时立即对产品执行动作。
//! 所有异常情况（规则集缺失、未知标签）都转换为诊断信息，执行总会完成。

use crate::compiler::CompiledRule;
use crate::evaluator::{ActionApplier, ConditionEvaluator};
use crate::models::{Diagnostic, EvaluationReport, Product};
use crate::operators::{Action, Condition};
use crate::store::RuleSet;
use std::time::Instant;
use tracing::debug;

/// 规则执行器
#[derive(Debug, Clone, Default)]
pub struct RuleExecutor {
    /// 是否记录详细评估追踪
    trace_enabled: bool,
}

impl RuleExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 启用评估追踪
    pub fn with_trace(mut self) -> Self {
        self.trace_enabled = true;
        self
    }

    /// 对产品应用规则集
    ///
    /// `rules` 为 `None` 表示规则未加载：记录诊断后直接返回，不修改产品。
    pub fn apply(&self, rules: Option<&RuleSet>, product: &mut Product) -> EvaluationReport {
        let start = Instant::now();
        let mut report = EvaluationReport::default();

        let Some(rules) = rules else {
            debug!("Pricing rules not loaded, skipping evaluation");
            report.diagnostics.push(Diagnostic::RulesNotLoaded);
            return report;
        };

        for rule in rules {
            self.apply_rule(rule, product, &mut report);
        }

        report.evaluation_time_us = start.elapsed().as_micros() as u64;
        debug!(
            product = %product.name,
            rules_evaluated = report.rules_evaluated,
            matched = report.matched_rules.len(),
            diagnostics = report.diagnostics.len(),
            "Pricing rules applied"
        );
        report
    }

    fn apply_rule(&self, rule: &CompiledRule, product: &mut Product, report: &mut EvaluationReport) {
        report.rules_evaluated += 1;

        if let Condition::Unknown(tag) = &rule.condition {
            debug!(rule_index = rule.index, tag = %tag, "Unknown condition");
            report.diagnostics.push(Diagnostic::UnknownCondition {
                rule_index: rule.index,
                tag: tag.clone(),
            });
            self.trace(report, rule, "SKIPPED");
            return;
        }

        if !ConditionEvaluator::matches(&rule.condition, product) {
            self.trace(report, rule, "NOT_MATCHED");
            return;
        }

        report.matched_rules.push(rule.index);

        if let Action::Unknown(tag) = &rule.action {
            debug!(rule_index = rule.index, tag = %tag, "Unknown action");
            report.diagnostics.push(Diagnostic::UnknownAction {
                rule_index: rule.index,
                tag: tag.clone(),
            });
            self.trace(report, rule, "MATCHED, NO_EFFECT");
            return;
        }

        ActionApplier::apply(&rule.action, product);
        self.trace(report, rule, "MATCHED, APPLIED");
    }

    fn trace(&self, report: &mut EvaluationReport, rule: &CompiledRule, outcome: &str) {
        if self.trace_enabled {
            report.evaluation_trace.push(format!(
                "rules[{}]: if {} then {} => {}",
                rule.index, rule.condition, rule.action, outcome
            ));
        }
    }
}

//! 贷款定价规则引擎
//!
//! 提供：
//! - JSON 规则文件加载，标签在加载时解析为封闭的条件/动作枚举
//! - 按文件顺序单次遍历、原地修改产品的规则执行
//! - 结构化诊断信息，代替控制台输出

pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod models;
pub mod operators;
pub mod store;

pub use compiler::{CompiledRule, RuleCompiler};
pub use error::{Result, RuleError};
pub use evaluator::{ActionApplier, ConditionEvaluator};
pub use executor::RuleExecutor;
pub use models::{Diagnostic, EvaluationReport, PricingRule, Product};
pub use operators::{Action, Condition};
pub use store::{RuleSet, RuleStore};

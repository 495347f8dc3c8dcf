//! 规则存储
//!
//! 启动时从 JSON 规则文件一次性加载有序规则集。规则集加载后不可变，
//! 以 `Arc` 共享，可在多个产品评估之间只读复用。

use crate::compiler::{CompiledRule, RuleCompiler};
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// 有序、不可变的规则集
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Arc<[CompiledRule]>,
}

impl RuleSet {
    pub fn new(rules: Vec<CompiledRule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按规则文件顺序遍历
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CompiledRule> {
        self.rules.get(index)
    }

    /// 含未知标签的规则数量
    pub fn unknown_tag_count(&self) -> usize {
        self.rules.iter().filter(|r| r.has_unknown_tag()).count()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 规则存储
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    compiler: RuleCompiler,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定编译器（例如严格模式）创建
    pub fn with_compiler(compiler: RuleCompiler) -> Self {
        Self { compiler }
    }

    /// 从规则文件加载
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load(&self, path: impl AsRef<Path>) -> Result<RuleSet> {
        let json = std::fs::read_to_string(path.as_ref())?;
        self.load_from_json(&json)
    }

    /// 从 JSON 字符串加载
    #[instrument(skip(self, json), fields(bytes = json.len()))]
    pub fn load_from_json(&self, json: &str) -> Result<RuleSet> {
        let rules = self.compiler.compile_from_json(json)?;
        let rule_set = RuleSet::new(rules);

        info!(
            rules = rule_set.len(),
            unknown_tags = rule_set.unknown_tag_count(),
            strict = self.compiler.is_strict(),
            "Pricing rules loaded"
        );
        Ok(rule_set)
    }

    /// 加载规则文件，失败时输出诊断并返回 `None`
    ///
    /// 加载失败不是致命错误：调用方拿到 `None` 后仍可继续评估（评估器会空操作）。
    pub fn load_or_report(&self, path: impl AsRef<Path>) -> Option<RuleSet> {
        let path = path.as_ref();
        match self.load(path) {
            Ok(rule_set) => Some(rule_set),
            Err(e) => {
                debug!(path = %path.display(), "Pricing rules unavailable");
                eprintln!("Error loading pricing rules: {}", e);
                None
            }
        }
    }
}

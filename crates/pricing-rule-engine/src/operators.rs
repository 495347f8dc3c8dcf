//! 条件与动作词汇定义
//!
//! 规则文件中的条件/动作以字符串标签给出，加载时一次性解析为封闭的枚举。
//! 标签匹配不区分大小写。

use std::fmt;

/// 条件标签
pub const TAG_FLORIDA: &str = "florida";
pub const TAG_CREDIT_SCORE_720: &str = "creditscore720";
pub const TAG_PRODUCT_NAME_7_1_ARM: &str = "productname7-1arm";

/// 动作标签
pub const TAG_DISQUALIFY: &str = "disqualify";
pub const TAG_REDUCE_INTEREST: &str = "reduceinterest";
pub const TAG_INCREASE_INTEREST: &str = "increaseinterest";

/// 条件：针对产品属性的布尔谓词
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// 州名相等（不区分大小写）
    StateEquals(String),
    /// 信用分不低于阈值
    CreditScoreAtLeast(i32),
    /// 产品名相等（不区分大小写）
    ProductNameEquals(String),
    /// 无法识别的标签，保留原文用于诊断
    Unknown(String),
}

impl Condition {
    /// 从规则标签解析条件
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            TAG_FLORIDA => Self::StateEquals("florida".to_string()),
            TAG_CREDIT_SCORE_720 => Self::CreditScoreAtLeast(720),
            TAG_PRODUCT_NAME_7_1_ARM => Self::ProductNameEquals("7-1 arm".to_string()),
            _ => Self::Unknown(tag.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateEquals(state) => write!(f, "state == {}", state),
            Self::CreditScoreAtLeast(min) => write!(f, "credit_score >= {}", min),
            Self::ProductNameEquals(name) => write!(f, "name == {}", name),
            Self::Unknown(tag) => write!(f, "unknown({})", tag),
        }
    }
}

/// 动作：对产品的一次修改
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 取消产品资格
    Disqualify,
    /// 调整利率，正数为加息，负数为降息
    AdjustInterest(f64),
    /// 无法识别的标签，保留原文用于诊断
    Unknown(String),
}

impl Action {
    /// 从规则标签和取值解析动作
    ///
    /// `disqualify` 忽略取值；`reduceinterest` 取负。
    pub fn from_tag(tag: &str, value: f64) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            TAG_DISQUALIFY => Self::Disqualify,
            TAG_REDUCE_INTEREST => Self::AdjustInterest(-value),
            TAG_INCREASE_INTEREST => Self::AdjustInterest(value),
            _ => Self::Unknown(tag.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disqualify => write!(f, "disqualify"),
            Self::AdjustInterest(delta) if delta.is_sign_negative() => {
                write!(f, "interest_rate -= {}", -delta)
            }
            Self::AdjustInterest(delta) => write!(f, "interest_rate += {}", delta),
            Self::Unknown(tag) => write!(f, "unknown({})", tag),
        }
    }
}

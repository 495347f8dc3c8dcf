//! 条件评估与动作执行
//!
//! 条件总是读取产品的当前状态，因此同一规则集中前面的动作会影响后面条件的结果。

use crate::models::Product;
use crate::operators::{Action, Condition};

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 评估条件是否对产品成立
    ///
    /// 字符串比较不区分大小写；未知条件恒为 `false`。
    pub fn matches(condition: &Condition, product: &Product) -> bool {
        match condition {
            Condition::StateEquals(state) => product.state.eq_ignore_ascii_case(state),
            Condition::CreditScoreAtLeast(min) => product.credit_score >= *min,
            Condition::ProductNameEquals(name) => product.name.eq_ignore_ascii_case(name),
            Condition::Unknown(_) => false,
        }
    }
}

/// 动作执行器
pub struct ActionApplier;

impl ActionApplier {
    /// 对产品执行动作，返回是否产生了修改
    pub fn apply(action: &Action, product: &mut Product) -> bool {
        match action {
            Action::Disqualify => {
                product.disqualified = true;
                true
            }
            Action::AdjustInterest(delta) => {
                product.interest_rate += delta;
                true
            }
            Action::Unknown(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn florida_product() -> Product {
        Product::new("7-1 ARM", 5.0, "Florida", 750)
    }

    #[test]
    fn test_state_match_ignores_case() {
        let cond = Condition::from_tag("FLORIDA");

        let mut product = florida_product();
        product.state = "florida".to_string();
        assert!(ConditionEvaluator::matches(&cond, &product));

        product.state = "Georgia".to_string();
        assert!(!ConditionEvaluator::matches(&cond, &product));
    }

    #[test]
    fn test_credit_score_boundary() {
        let cond = Condition::CreditScoreAtLeast(720);
        let mut product = florida_product();

        product.credit_score = 720;
        assert!(ConditionEvaluator::matches(&cond, &product));

        product.credit_score = 719;
        assert!(!ConditionEvaluator::matches(&cond, &product));
    }

    #[test]
    fn test_product_name_match() {
        let cond = Condition::from_tag("productname7-1arm");
        let mut product = florida_product();
        assert!(ConditionEvaluator::matches(&cond, &product));

        product.name = "5-1 ARM".to_string();
        assert!(!ConditionEvaluator::matches(&cond, &product));
    }

    #[test]
    fn test_unknown_condition_never_matches() {
        let cond = Condition::Unknown("Texas".to_string());
        assert!(!ConditionEvaluator::matches(&cond, &florida_product()));
    }

    #[test]
    fn test_apply_actions() {
        let mut product = florida_product();

        assert!(ActionApplier::apply(&Action::AdjustInterest(-0.5), &mut product));
        assert_eq!(product.interest_rate, 4.5);

        assert!(ActionApplier::apply(&Action::AdjustInterest(1.0), &mut product));
        assert_eq!(product.interest_rate, 5.5);

        assert!(ActionApplier::apply(&Action::Disqualify, &mut product));
        assert!(product.disqualified);
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let mut product = florida_product();
        let before = product.clone();

        assert!(!ActionApplier::apply(&Action::Unknown("Waive".to_string()), &mut product));
        assert_eq!(product, before);
    }
}

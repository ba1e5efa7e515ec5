//! Condition evaluator

use crate::condition::tag::Condition;

/// Query surface a world/player snapshot must offer so conditions can be
/// checked against it.
///
/// Implementations must be pure: asking twice about the same snapshot gives
/// the same answer.
pub trait ConditionContext {
    fn is_impaired(&self) -> bool;
    fn is_on_expedition(&self) -> bool;
    fn is_clumsy(&self) -> bool;
    fn is_doing_camp_work(&self) -> bool;
    fn is_limping(&self) -> bool;
}

/// Check a single condition against a context
#[inline]
pub fn matches<C: ConditionContext + ?Sized>(condition: Condition, ctx: &C) -> bool {
    match condition {
        Condition::Impaired => ctx.is_impaired(),
        Condition::IsExpedition => ctx.is_on_expedition(),
        Condition::Clumsy => ctx.is_clumsy(),
        Condition::IsCampWork => ctx.is_doing_camp_work(),
        Condition::Limping => ctx.is_limping(),
    }
}

/// Check that every condition holds. An empty set always matches.
#[inline]
pub fn all_match<C: ConditionContext + ?Sized>(conditions: &[Condition], ctx: &C) -> bool {
    conditions.iter().all(|&condition| matches(condition, ctx))
}

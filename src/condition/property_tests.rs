//! Property tests for condition module
//!
//! Property 1: Empty condition sets are universally eligible
//! Property 2: Evaluation is a pure function of the snapshot
//! Property 3: all_match is the conjunction of single matches
//! Property 4: A missing condition fails the whole set

use proptest::prelude::*;

use crate::condition::{all_match, matches, Activity, Condition, ContextSnapshot, StatusFlag};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn activity_strategy() -> impl Strategy<Value = Activity> {
    prop_oneof![
        Just(Activity::Resting),
        Just(Activity::Traveling),
        Just(Activity::Expedition),
        Just(Activity::CampWork),
    ]
}

fn status_strategy() -> impl Strategy<Value = StatusFlag> {
    prop_oneof![
        Just(StatusFlag::Concussed),
        Just(StatusFlag::Intoxicated),
        Just(StatusFlag::Hypothermic),
        Just(StatusFlag::Exhausted),
        Just(StatusFlag::Clumsy),
        Just(StatusFlag::SprainedAnkle),
        Just(StatusFlag::BrokenLeg),
    ]
}

fn condition_strategy() -> impl Strategy<Value = Condition> {
    prop::sample::select(Condition::ALL.to_vec())
}

/// Generate a ContextSnapshot for testing
fn snapshot_strategy() -> impl Strategy<Value = ContextSnapshot> {
    (
        activity_strategy(),
        prop::collection::vec(status_strategy(), 0..=4),
    )
        .prop_map(|(activity, statuses)| {
            statuses
                .into_iter()
                .fold(ContextSnapshot::new(activity), |ctx, s| ctx.with_status(s))
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1: An event with no conditions is eligible everywhere
    #[test]
    fn prop_empty_conditions_match_any_context(ctx in snapshot_strategy()) {
        prop_assert!(all_match(&[], &ctx));
    }

    /// Property 2: Re-evaluating against the same snapshot gives the same answer
    #[test]
    fn prop_evaluation_is_deterministic(
        ctx in snapshot_strategy(),
        conditions in prop::collection::vec(condition_strategy(), 0..=5)
    ) {
        let first = all_match(&conditions, &ctx);
        let second = all_match(&conditions, &ctx);
        prop_assert_eq!(first, second);
    }

    /// Property 3: all_match holds exactly when every single condition holds
    #[test]
    fn prop_all_match_is_conjunction(
        ctx in snapshot_strategy(),
        conditions in prop::collection::vec(condition_strategy(), 0..=5)
    ) {
        let expected = conditions.iter().all(|&c| matches(c, &ctx));
        prop_assert_eq!(all_match(&conditions, &ctx), expected);
    }

    /// Property 4: Missing IsExpedition excludes the set even if Impaired holds
    #[test]
    fn prop_missing_expedition_fails_pair(
        activity in activity_strategy().prop_filter("not expedition", |a| *a != Activity::Expedition)
    ) {
        let ctx = ContextSnapshot::new(activity).with_status(StatusFlag::Concussed);
        prop_assert!(matches(Condition::Impaired, &ctx));
        prop_assert!(!all_match(&[Condition::Impaired, Condition::IsExpedition], &ctx));
    }
}

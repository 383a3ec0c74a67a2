//! Inference over unknown resources.
//!
//! Hidden steals put `unknown` counters into circulation. The routines here
//! narrow those counters back down whenever later events constrain what a
//! hand can actually contain.

use tracing::debug;

use tallytable_foundation::{Resource, ResourceCounts};

/// What deducting a stolen card from a victim's hand resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StealOutcome {
    /// The victim could only have held one resource type; exactly one of it
    /// was removed.
    Deterministic(Resource),
    /// The victim's hand was ambiguous. One of each listed known type was
    /// removed and the surplus was re-credited as unknown.
    Distributed(Vec<Resource>),
    /// The victim held nothing trackable; the hand was left untouched.
    NoEffect,
}

/// Covers a spend out of `holdings`, cashing in unknown counters for
/// whatever part of `cost` the known counters cannot pay.
///
/// The whole shortfall is computed up front, so a batch of simultaneous
/// spends converts `min(shortfall, unknown)` counters in one step rather
/// than failing outright. Returns how many unknown counters were converted.
pub fn deduct_unknown_for_cost(holdings: &mut ResourceCounts, cost: &ResourceCounts) -> u32 {
    let shortfall = holdings.shortfall(cost);
    if shortfall == 0 {
        return 0;
    }
    let deducted = holdings.remove_clamped(Resource::Unknown, shortfall);
    if deducted > 0 {
        debug!(shortfall, deducted, "converted unknown counters to cover a spend");
    }
    deducted
}

/// Removes one stolen card from `holdings` without knowing which card it
/// was.
///
/// A hand holding exactly one known type and no unknown counters gives the
/// theft away. Otherwise one of each known type is removed and the surplus
/// comes back as unknown, keeping the hand total down by exactly one.
pub fn distribute_unknown_steal(holdings: &mut ResourceCounts) -> StealOutcome {
    let known = holdings.known_types();

    if known.len() == 1 && holdings.unknown == 0 {
        let only = known[0];
        holdings.remove_clamped(only, 1);
        return StealOutcome::Deterministic(only);
    }

    if known.is_empty() {
        return StealOutcome::NoEffect;
    }

    for resource in &known {
        holdings.remove_clamped(*resource, 1);
    }
    #[allow(clippy::cast_possible_truncation)]
    let surplus = known.len() as u32 - 1;
    if surplus > 0 {
        holdings.add(Resource::Unknown, surplus);
    }
    StealOutcome::Distributed(known)
}

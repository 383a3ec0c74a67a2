//! Hidden-card inference tests.
//!
//! Tests for unknown-card cash-in against spending shortfalls and the
//! distributed accounting of face-down steals.

use tallytable_engine::infer::{StealOutcome, deduct_unknown_for_cost, distribute_unknown_steal};
use tallytable_foundation::{Resource, ResourceCounts};

/// Helper building a hand from explicit bucket counts.
fn hand(wheat: u32, stone: u32, brick: u32, wood: u32, wool: u32, unknown: u32) -> ResourceCounts {
    ResourceCounts {
        wheat,
        stone,
        brick,
        wood,
        wool,
        unknown,
    }
}

// =============================================================================
// Spending Shortfalls
// =============================================================================

#[test]
fn covered_costs_leave_unknowns_alone() {
    let mut holdings = hand(2, 3, 0, 0, 0, 4);
    let city = hand(2, 3, 0, 0, 0, 0);

    assert_eq!(deduct_unknown_for_cost(&mut holdings, &city), 0);
    assert_eq!(holdings.unknown, 4);
}

#[test]
fn shortfalls_cash_in_unknown_cards() {
    // One wheat short and one stone short of a city: two unknowns must have
    // been those cards.
    let mut holdings = hand(1, 2, 0, 0, 0, 3);
    let city = hand(2, 3, 0, 0, 0, 0);

    assert_eq!(deduct_unknown_for_cost(&mut holdings, &city), 2);
    assert_eq!(holdings.unknown, 1);
    // Identified buckets are untouched here; the caller subtracts the cost.
    assert_eq!(holdings.wheat, 1);
    assert_eq!(holdings.stone, 2);
}

#[test]
fn deduction_is_capped_by_the_unknown_pool() {
    let mut holdings = hand(0, 0, 0, 0, 0, 1);
    let settlement = hand(1, 0, 1, 1, 1, 0);

    assert_eq!(deduct_unknown_for_cost(&mut holdings, &settlement), 1);
    assert_eq!(holdings.unknown, 0);
}

#[test]
fn shortfall_reads_all_holdings_before_deducting() {
    // Multi-resource shortfall computed in one batch, not per resource.
    let mut holdings = hand(0, 1, 1, 0, 0, 5);
    let city = hand(2, 3, 0, 0, 0, 0);

    // Short 2 wheat and 2 stone.
    assert_eq!(deduct_unknown_for_cost(&mut holdings, &city), 4);
    assert_eq!(holdings.unknown, 1);
}

#[test]
fn empty_cost_deducts_nothing() {
    let mut holdings = hand(0, 0, 0, 0, 0, 2);
    assert_eq!(deduct_unknown_for_cost(&mut holdings, &ResourceCounts::new()), 0);
    assert_eq!(holdings.unknown, 2);
}

// =============================================================================
// Face-Down Steals
// =============================================================================

#[test]
fn single_type_hands_resolve_deterministically() {
    let mut victim = hand(0, 0, 0, 3, 0, 0);

    let outcome = distribute_unknown_steal(&mut victim);
    assert_eq!(outcome, StealOutcome::Deterministic(Resource::Wood));
    assert_eq!(victim.wood, 2);
    assert_eq!(victim.unknown, 0);
    assert_eq!(victim.total(), 2);
}

#[test]
fn unknowns_keep_a_single_type_hand_ambiguous() {
    // The stolen card could have been the unknown one.
    let mut victim = hand(0, 0, 0, 3, 0, 1);

    let outcome = distribute_unknown_steal(&mut victim);
    assert_eq!(outcome, StealOutcome::Distributed(vec![Resource::Wood]));
    assert_eq!(victim.wood, 2);
    assert_eq!(victim.unknown, 1);
    assert_eq!(victim.total(), 3);
}

#[test]
fn mixed_hands_spread_the_loss() {
    let mut victim = hand(2, 0, 1, 1, 0, 0);

    let outcome = distribute_unknown_steal(&mut victim);
    assert_eq!(
        outcome,
        StealOutcome::Distributed(vec![Resource::Wheat, Resource::Brick, Resource::Wood])
    );
    // One card left each type, two unknowns cover the survivors.
    assert_eq!(victim.wheat, 1);
    assert_eq!(victim.brick, 0);
    assert_eq!(victim.wood, 0);
    assert_eq!(victim.unknown, 2);
    assert_eq!(victim.total(), 3);
}

#[test]
fn the_hand_loses_exactly_one_card() {
    for counts in [
        hand(1, 0, 0, 0, 0, 0),
        hand(2, 2, 0, 0, 0, 0),
        hand(1, 1, 1, 1, 1, 0),
        hand(0, 0, 3, 0, 0, 2),
    ] {
        let mut victim = counts;
        let before = victim.total();
        distribute_unknown_steal(&mut victim);
        assert_eq!(victim.total(), before - 1, "from {counts:?}");
    }
}

#[test]
fn empty_hands_are_theft_proof() {
    let mut victim = ResourceCounts::new();
    assert_eq!(distribute_unknown_steal(&mut victim), StealOutcome::NoEffect);
    assert!(victim.is_empty());
}

#[test]
fn unknown_only_hands_are_theft_proof() {
    // Nothing identified to redistribute; the unknowns stay put.
    let mut victim = hand(0, 0, 0, 0, 0, 3);
    assert_eq!(distribute_unknown_steal(&mut victim), StealOutcome::NoEffect);
    assert_eq!(victim.unknown, 3);
}

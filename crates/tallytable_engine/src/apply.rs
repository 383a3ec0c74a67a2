//! Event application against the ledger book and bank.
//!
//! One [`apply`] call is the atomic unit of work: it runs to completion on
//! exclusively borrowed state and reports whether anything actually
//! changed. Callers use that report to decide whether downstream consumers
//! need a fresh snapshot.

use tracing::debug;

use tallytable_parser::{Affected, Event, EventKind};

use crate::bank::BankState;
use crate::infer::{StealOutcome, deduct_unknown_for_cost, distribute_unknown_steal};
use crate::ledger::LedgerBook;

/// Applies a classified event to the book and bank.
///
/// Returns `true` when any holding or bank counter changed. Creating the
/// actor's ledger or freezing their color does not count on its own.
pub fn apply(event: &Event, book: &mut LedgerBook, bank: &mut BankState) -> bool {
    if !event.kind.has_ledger_effect() {
        return false;
    }
    let Some(actor) = event.actor.as_deref() else {
        debug!(kind = %event.kind, "effectful event named no actor, skipping");
        return false;
    };

    let mut mutated = false;

    {
        let ledger = book.get_or_create(actor);
        if let Some(color) = event.color.as_deref() {
            ledger.observe_color(color);
        }

        for (resource, amount) in event.gained.iter() {
            if amount > 0 {
                ledger.resources.add(resource, amount);
                mutated = true;
            }
        }

        if !event.lost.is_empty() {
            if deduct_unknown_for_cost(&mut ledger.resources, &event.lost) > 0 {
                mutated = true;
            }
            for (resource, amount) in event.lost.iter() {
                if amount > 0 && ledger.resources.remove_clamped(resource, amount) > 0 {
                    mutated = true;
                }
            }
        }
    }

    if let Some(piece) = event.piece {
        if bank.record_piece_played(piece) {
            debug!(piece = %piece, remaining = bank.remaining, "piece drawn down from the bank");
            mutated = true;
        }
    }

    match event.kind {
        EventKind::CompletedTrade => {
            if apply_trade_counterparty(event, book) {
                mutated = true;
            }
        }
        EventKind::StoleResource => {
            if apply_steal_victim(event, book) {
                mutated = true;
            }
        }
        // Monopoly names everybody else, but the log never says what each
        // of them surrendered, so only the actor's haul is recorded.
        EventKind::Monopoly => {}
        EventKind::StartingResources
        | EventKind::ReceivedResources
        | EventKind::BankTrade
        | EventKind::BuiltRoad
        | EventKind::BuiltSettlement
        | EventKind::BuiltCity
        | EventKind::BoughtDevCard
        | EventKind::DiscardedResources
        | EventKind::PlayedDevCard
        | EventKind::YearOfPlenty => {}
        // Filtered out above.
        EventKind::DiceRoll
        | EventKind::OfferedTrade
        | EventKind::PlacedRoadSetup
        | EventKind::PlacedSettlementSetup
        | EventKind::Separator
        | EventKind::Unknown => {}
    }

    mutated
}

/// Mirrors a completed trade onto the named counterparty.
///
/// The counterparty gains what the actor gave and gives what the actor
/// got, with the usual zero-floor clamp but no unknown deduction. A
/// counterparty with no ledger yet is left alone rather than created.
fn apply_trade_counterparty(event: &Event, book: &mut LedgerBook) -> bool {
    let Some(Affected::Player(name)) = event.others.first() else {
        return false;
    };
    let Some(partner) = book.get_mut(name) else {
        debug!(partner = %name, "trade counterparty has no ledger yet, skipping");
        return false;
    };

    let mut mutated = false;
    for (resource, amount) in event.lost.iter() {
        if amount > 0 {
            partner.resources.add(resource, amount);
            mutated = true;
        }
    }
    for (resource, amount) in event.gained.iter() {
        if amount > 0 && partner.resources.remove_clamped(resource, amount) > 0 {
            mutated = true;
        }
    }
    mutated
}

/// Removes the stolen card from the victim's hand.
///
/// When the log showed the stolen card, the exact resource comes off the
/// victim. Otherwise unknown-steal distribution decides what to remove.
fn apply_steal_victim(event: &Event, book: &mut LedgerBook) -> bool {
    let name = match event.others.first() {
        Some(Affected::Player(name)) => name,
        // The client's own hand is visible to its owner and not tracked.
        Some(Affected::CurrentPlayer) => return false,
        Some(Affected::EverybodyElse | Affected::Bank) | None => return false,
    };
    let Some(victim) = book.get_mut(name) else {
        debug!(victim = %name, "steal victim has no ledger yet, skipping");
        return false;
    };

    if event.gained.total() > 0 && event.gained.unknown == 0 {
        let mut mutated = false;
        for (resource, amount) in event.gained.iter() {
            if amount > 0 && victim.resources.remove_clamped(resource, amount) > 0 {
                mutated = true;
            }
        }
        return mutated;
    }

    match distribute_unknown_steal(&mut victim.resources) {
        StealOutcome::Deterministic(resource) => {
            debug!(victim = %victim.name, resource = %resource, "steal resolved deterministically");
            true
        }
        StealOutcome::Distributed(types) => {
            debug!(victim = %victim.name, types = types.len(), "steal spread across known types");
            true
        }
        StealOutcome::NoEffect => false,
    }
}

//! Tracker admission tests.
//!
//! Tests for the replay gate: indexed admission, redelivery rejection, and
//! whole-game reset.

use tallytable_engine::tracker::{Admission, Tracker};
use tallytable_parser::entry::RawEntry;
use tallytable_parser::event::EventKind;

fn production(name: &str, icon: &str) -> RawEntry {
    RawEntry::new()
        .with_styled(name, None)
        .with_text(" got ")
        .with_icon(icon)
}

#[test]
fn indexed_entries_apply_in_order() {
    let mut tracker = Tracker::new();

    assert!(matches!(
        tracker.admit(0, &production("Amber", "wood")),
        Admission::Processed { .. }
    ));
    assert!(matches!(
        tracker.admit(1, &production("Amber", "wood")),
        Admission::Processed { .. }
    ));

    assert_eq!(tracker.book().get("Amber").unwrap().resources.wood, 2);
    assert_eq!(tracker.cursor().next_index(), 2);
}

#[test]
fn processed_reports_kind_and_mutation() {
    let mut tracker = Tracker::new();

    let roll = RawEntry::new().with_styled("Bram", None).with_text(" rolled");
    assert_eq!(
        tracker.admit(0, &roll),
        Admission::Processed {
            kind: EventKind::DiceRoll,
            mutated: false,
        }
    );
    assert_eq!(
        tracker.admit(1, &production("Bram", "wheat")),
        Admission::Processed {
            kind: EventKind::ReceivedResources,
            mutated: true,
        }
    );
}

#[test]
fn redelivered_entries_are_dropped() {
    let mut tracker = Tracker::new();
    let entry = production("Carol", "wool");

    assert!(matches!(tracker.admit(0, &entry), Admission::Processed { .. }));
    assert_eq!(tracker.admit(0, &entry), Admission::Stale);

    // The duplicate changed nothing.
    assert_eq!(tracker.book().get("Carol").unwrap().resources.wool, 1);
}

#[test]
fn indices_behind_a_gap_stay_dropped() {
    let mut tracker = Tracker::new();

    assert!(matches!(
        tracker.admit(5, &production("Dane", "brick")),
        Admission::Processed { .. }
    ));
    // Entries 0 through 4 were never seen; they are not backfillable.
    assert_eq!(tracker.admit(3, &production("Dane", "brick")), Admission::Stale);
    assert!(matches!(
        tracker.admit(6, &production("Dane", "brick")),
        Admission::Processed { .. }
    ));

    assert_eq!(tracker.book().get("Dane").unwrap().resources.brick, 2);
}

#[test]
fn reset_restarts_the_whole_game() {
    let mut tracker = Tracker::new();
    let knight = RawEntry::new().with_styled("Amber", None).with_text(" used knight");
    tracker.admit(0, &knight);
    assert_eq!(tracker.bank().knights, 13);

    tracker.reset();

    assert!(tracker.book().is_empty());
    assert_eq!(tracker.bank().knights, 14);
    assert_eq!(tracker.cursor().next_index(), 0);
    // Index zero is admissible again after a reset.
    assert!(matches!(
        tracker.admit(0, &production("Amber", "wood")),
        Admission::Processed { .. }
    ));
}

#[test]
fn snapshots_reflect_admitted_entries() {
    let mut tracker = Tracker::new();
    let entry = RawEntry::new()
        .with_styled("Bram", Some("#223697"))
        .with_text(" received starting resources ")
        .with_icon("brick")
        .with_icon("wood");
    tracker.admit(0, &entry);

    let snapshot = tracker.snapshot();
    assert_eq!(snapshot.players.len(), 1);
    assert_eq!(snapshot.players[0].name, "Bram");
    assert_eq!(snapshot.players[0].color, "#223697");
    assert_eq!(snapshot.players[0].resources.brick, 1);
    assert_eq!(snapshot.players[0].resources.wood, 1);
    assert_eq!(snapshot.bank.remaining, 25);
}

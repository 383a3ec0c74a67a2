//! End-to-end transcript scenarios.
//!
//! Each test feeds transcript text through a session and checks the
//! resulting ledgers, bank, and batch counters.

use tallytable_engine::Admission;
use tallytable_foundation::ErrorKind;
use tallytable_runtime::Session;

/// Helper returning the named player's ledger, panicking when missing.
fn resources(session: &Session, name: &str) -> tallytable_foundation::ResourceCounts {
    session
        .tracker()
        .book()
        .get(name)
        .unwrap_or_else(|| panic!("no ledger for {name}"))
        .resources
}

#[test]
fn rolls_alone_track_nothing() {
    let mut session = Session::new();
    session
        .feed_line("[Amber|#e27174] rolled {dice_3} {dice_4}")
        .unwrap();

    assert!(session.tracker().book().is_empty());
    assert_eq!(session.tracker().bank().remaining, 25);
}

#[test]
fn starting_resources_open_a_ledger() {
    let mut session = Session::new();
    session
        .feed_line("[Bram|#223697] received starting resources {wood} {brick}")
        .unwrap();

    let bram = resources(&session, "Bram");
    assert_eq!(bram.wood, 1);
    assert_eq!(bram.brick, 1);
    assert_eq!(bram.total(), 2);
}

#[test]
fn building_consumes_the_starting_hand() {
    let mut session = Session::new();
    session
        .feed_lines(
            "[Bram|#223697] received starting resources {wood} {brick}\n\
             [Bram|#223697] built a road",
        )
        .unwrap();

    assert!(resources(&session, "Bram").is_empty());
}

#[test]
fn hidden_steals_spread_across_the_victims_hand() {
    let mut session = Session::new();
    session
        .feed_lines(
            "[Carol|#62b95d] received starting resources {wheat} {wheat} {wood}\n\
             [Dane|#3e97a8] stole a card from Carol",
        )
        .unwrap();

    let carol = resources(&session, "Carol");
    assert_eq!(carol.wheat, 1);
    assert_eq!(carol.wood, 0);
    assert_eq!(carol.unknown, 1);
    assert_eq!(carol.total(), 2);

    assert_eq!(resources(&session, "Dane").unknown, 1);
}

#[test]
fn redelivered_entries_change_nothing() {
    let mut session = Session::new();
    let line = "0 | [Amber|#e27174] got {wool}";

    assert!(matches!(
        session.feed_line(line).unwrap(),
        Some(Admission::Processed { .. })
    ));
    assert_eq!(session.feed_line(line).unwrap(), Some(Admission::Stale));

    assert_eq!(resources(&session, "Amber").wool, 1);
}

#[test]
fn exhausted_knight_pools_clamp() {
    let mut session = Session::new();
    let transcript = "[Amber|#e27174] used knight\n".repeat(15);

    let stats = session.feed_lines(&transcript).unwrap();
    assert_eq!(stats.entries, 15);
    // The fifteenth knight cannot exist; it counts as an entry but not a
    // mutation.
    assert_eq!(stats.mutations, 14);

    let bank = session.tracker().bank();
    assert_eq!(bank.knights, 0);
    assert_eq!(bank.remaining, 11);
}

#[test]
fn a_short_game_settles_every_ledger() {
    let transcript = "\
# Friday night, table two

[Amber|#e27174] placed a settlement
[Bram|#223697] placed a settlement
[Amber|#e27174] received starting resources {wood} {brick} {wheat}
[Bram|#223697] received starting resources {wool} {wheat} {stone}
---
[Amber|#e27174] rolled {dice_6} {dice_2}
[Amber|#e27174] got {wood}
[Bram|#223697] got {wheat}
[Amber|#e27174] gave {wood} and got {wheat} from Bram
[Amber|#e27174] built a road
[Bram|#223697] bought a development card
[Bram|#223697] used knight
[Bram|#223697] stole a card from Amber
";

    let mut session = Session::new();
    let stats = session.feed_lines(transcript).unwrap();

    // Comments and blanks are skipped; the divider still counts as a row.
    assert_eq!(stats.entries, 13);
    assert_eq!(stats.mutations, 9);
    assert_eq!(stats.stale, 0);

    // Amber traded away her wood, built a road with the rest, and lost one
    // of her two wheat to the robber. Two wheat and nothing else means the
    // steal resolved exactly.
    let amber = resources(&session, "Amber");
    assert_eq!(amber.wheat, 1);
    assert_eq!(amber.total(), 1);

    // Bram spent his dev-card cost and holds the traded wood plus the
    // stolen card, still face down.
    let bram = resources(&session, "Bram");
    assert_eq!(bram.wood, 1);
    assert_eq!(bram.unknown, 1);
    assert_eq!(bram.total(), 2);

    let bank = session.tracker().bank();
    assert_eq!(bank.knights, 13);
    assert_eq!(bank.remaining, 24);

    // Ledgers list in first-seen order.
    let names: Vec<_> = session.tracker().book().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Amber", "Bram"]);
}

#[test]
fn snapshots_serialize_with_stable_names() {
    let mut session = Session::new();
    session
        .feed_lines(
            "[Amber|#e27174] received starting resources {wood}\n\
             [Amber|#e27174] used knight",
        )
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&session.snapshot_json().unwrap()).unwrap();

    assert_eq!(json["players"][0]["name"], "Amber");
    assert_eq!(json["players"][0]["color"], "#e27174");
    assert_eq!(json["players"][0]["colorFrozen"], true);
    assert_eq!(json["players"][0]["resources"]["wood"], 1);
    assert_eq!(json["bank"]["remaining"], 24);
    assert_eq!(json["bank"]["knights"], 13);
    assert_eq!(json["bank"]["victoryPoints"], 5);
}

#[test]
fn parse_errors_name_the_failing_line() {
    let mut session = Session::new();
    let err = session
        .feed_lines(
            "[Amber|#e27174] got {wool}\n\
             [Amber|#e27174] got {wool",
        )
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Transcript(_)));
    let message = err.to_string();
    assert!(message.contains("line 2"), "unexpected message: {message}");
    assert!(message.contains("unclosed icon span"), "unexpected message: {message}");

    // The line before the failure stayed applied.
    assert_eq!(resources(&session, "Amber").wool, 1);
}

#[test]
fn resets_clear_ledgers_bank_and_numbering() {
    let mut session = Session::new();
    session
        .feed_lines(
            "[Amber|#e27174] received starting resources {wood}\n\
             [Amber|#e27174] used knight",
        )
        .unwrap();

    session.reset();

    assert!(session.tracker().book().is_empty());
    assert_eq!(session.tracker().bank().knights, 14);

    // Numbering restarts at zero, so an early index is fresh again.
    assert!(matches!(
        session.feed_line("0 | [Bram|#223697] got {wool}").unwrap(),
        Some(Admission::Processed { .. })
    ));
}

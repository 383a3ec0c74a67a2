//! Raw entry tests.
//!
//! Tests for the span model the classifier consumes: text views, icon
//! positions, actor lookup, and keyword search.

use tallytable_parser::entry::{Pos, RawEntry, Span};

#[test]
fn text_view_skips_icons_and_dividers() {
    let entry = RawEntry::new()
        .with_styled("Amber", Some("#e27174"))
        .with_text(" gave ")
        .with_icon("wood")
        .with_text(" and got ")
        .with_icon("wheat")
        .with_divider();

    assert_eq!(entry.text(), "Amber gave  and got ");
}

#[test]
fn spans_preserve_construction_order() {
    let entry = RawEntry::new()
        .with_text("1 | ")
        .with_styled("Amber", None)
        .with_icon("wool");

    assert_eq!(
        entry.spans(),
        &[
            Span::Text("1 | ".to_string()),
            Span::Styled {
                text: "Amber".to_string(),
                color: None,
            },
            Span::Icon("wool".to_string()),
        ]
    );
}

#[test]
fn icons_carry_their_span_positions() {
    let entry = RawEntry::new()
        .with_styled("Amber", None)
        .with_text(" got ")
        .with_icon("wood")
        .with_icon("wood")
        .with_text(" and ")
        .with_icon("brick");

    let icons: Vec<_> = entry.icons().collect();
    assert_eq!(
        icons,
        vec![
            (Pos { span: 2, offset: 0 }, "wood"),
            (Pos { span: 3, offset: 0 }, "wood"),
            (Pos { span: 5, offset: 0 }, "brick"),
        ]
    );
}

#[test]
fn positions_order_by_span_then_offset() {
    let early = Pos { span: 1, offset: 40 };
    let later_span = Pos { span: 2, offset: 0 };
    let later_offset = Pos { span: 2, offset: 7 };

    assert!(early < later_span);
    assert!(later_span < later_offset);
}

#[test]
fn first_styled_span_wins_over_later_names() {
    let entry = RawEntry::new()
        .with_text("> ")
        .with_styled("Amber", Some("#e27174"))
        .with_text(" stole from ")
        .with_styled("Bram", Some("#223697"));

    assert_eq!(entry.first_styled(), Some(("Amber", Some("#e27174"))));
}

#[test]
fn styled_span_without_color() {
    let entry = RawEntry::new().with_styled("Carol", None).with_text(" rolled");
    assert_eq!(entry.first_styled(), Some(("Carol", None)));
}

#[test]
fn keyword_search_is_case_insensitive() {
    let entry = RawEntry::new()
        .with_styled("Amber", None)
        .with_text(" GAVE wood TO BANK");

    assert!(entry.find_keyword("gave").is_some());
    assert!(entry.find_keyword("to bank").is_some());
}

#[test]
fn keyword_search_spans_styled_runs() {
    // "gave" lives inside the styled run here, not a plain text run.
    let entry = RawEntry::new()
        .with_styled("Amber gave", None)
        .with_text(" wood away");

    assert_eq!(entry.find_keyword("gave"), Some(Pos { span: 0, offset: 6 }));
}

#[test]
fn keyword_search_matches_inside_longer_words() {
    let entry = RawEntry::new().with_text("Amber forgot the rules");
    assert_eq!(entry.find_keyword("got"), Some(Pos { span: 0, offset: 9 }));
}

#[test]
fn keyword_search_reports_the_first_occurrence() {
    let entry = RawEntry::new()
        .with_text("gave once ")
        .with_text("gave twice");

    assert_eq!(entry.find_keyword("gave"), Some(Pos { span: 0, offset: 0 }));
}

#[test]
fn missing_keyword_finds_nothing() {
    let entry = RawEntry::new().with_text("Amber rolled");
    assert_eq!(entry.find_keyword("stole"), None);
}

#[test]
fn divider_markers_are_visible() {
    assert!(RawEntry::new().with_divider().has_divider());
    assert!(RawEntry::new().with_text("---").with_divider().has_divider());
    assert!(!RawEntry::new().with_text("no divider here").has_divider());
}

#[test]
fn empty_entry_has_empty_views() {
    let entry = RawEntry::new();
    assert_eq!(entry.text(), "");
    assert_eq!(entry.first_styled(), None);
    assert_eq!(entry.icons().count(), 0);
    assert!(!entry.has_divider());
}

//! Ordered rule table turning raw entries into events.
//!
//! Classification is first-match-wins over a fixed phrase table evaluated
//! against the lower-cased entry text. Matching is plain substring
//! containment, so a keyword can also match inside a longer word ("got"
//! inside "forgot"); that looseness comes from the log format itself and is
//! kept rather than papered over.

use tallytable_foundation::{PieceKind, Resource, ResourceCounts};
use tracing::debug;

use crate::entry::{Pos, RawEntry};
use crate::event::{Affected, Event, EventKind};

/// Cost of a road: 1 wood, 1 brick.
const ROAD_COST: ResourceCounts = ResourceCounts {
    wheat: 0,
    stone: 0,
    brick: 1,
    wood: 1,
    wool: 0,
    unknown: 0,
};

/// Cost of a settlement: 1 wood, 1 brick, 1 wool, 1 wheat.
const SETTLEMENT_COST: ResourceCounts = ResourceCounts {
    wheat: 1,
    stone: 0,
    brick: 1,
    wood: 1,
    wool: 1,
    unknown: 0,
};

/// Cost of a city: 2 wheat, 3 stone.
const CITY_COST: ResourceCounts = ResourceCounts {
    wheat: 2,
    stone: 3,
    brick: 0,
    wood: 0,
    wool: 0,
    unknown: 0,
};

/// Cost of a development card: 1 wool, 1 wheat, 1 stone.
const DEV_CARD_COST: ResourceCounts = ResourceCounts {
    wheat: 1,
    stone: 1,
    brick: 0,
    wood: 0,
    wool: 1,
    unknown: 0,
};

/// Classifies one raw entry into exactly one event.
///
/// Never fails: unrecognized phrasing classifies as [`EventKind::Unknown`]
/// and empty or divider entries as [`EventKind::Separator`].
#[must_use]
pub fn classify(entry: &RawEntry) -> Event {
    let text = entry.text();

    // Separators short-circuit the whole table, before actor extraction.
    if entry.has_divider() || text.trim().is_empty() {
        return Event::new(EventKind::Separator);
    }

    let lowered = text.to_lowercase();

    let mut event = if lowered.contains("rolled") {
        Event::new(EventKind::DiceRoll)
    } else if lowered.contains("received starting resources") {
        let mut event = Event::new(EventKind::StartingResources);
        event.gained = resolve_icons(entry);
        event
    } else if lowered.contains("got") && !lowered.contains("and got") {
        let mut event = Event::new(EventKind::ReceivedResources);
        event.gained = resolve_icons(entry);
        event
    } else if lowered.contains("gave") && lowered.contains("to bank") && lowered.contains("and got")
    {
        bank_trade(entry)
    } else if lowered.contains("gave") && lowered.contains("and got") && lowered.contains("from") {
        player_trade(entry, &text)
    } else if lowered.contains("wants to give") && lowered.contains("for") {
        Event::new(EventKind::OfferedTrade)
    } else if lowered.contains("placed a road") {
        Event::new(EventKind::PlacedRoadSetup)
    } else if lowered.contains("built a road") {
        with_cost(EventKind::BuiltRoad, ROAD_COST)
    } else if lowered.contains("placed a settlement") {
        Event::new(EventKind::PlacedSettlementSetup)
    } else if lowered.contains("built a settlement") {
        with_cost(EventKind::BuiltSettlement, SETTLEMENT_COST)
    } else if lowered.contains("placed a city")
        || lowered.contains("upgraded to city")
        || lowered.contains("built a city")
    {
        with_cost(EventKind::BuiltCity, CITY_COST)
    } else if lowered.contains("bought") && lowered.contains("development") {
        with_cost(EventKind::BoughtDevCard, DEV_CARD_COST)
    } else if lowered.contains("stole") && lowered.contains("from") {
        steal(entry, &text)
    } else if lowered.contains("stole") && !lowered.contains("from") {
        monopoly(entry)
    } else if lowered.contains("discarded") {
        let mut event = Event::new(EventKind::DiscardedResources);
        event.lost = resolve_icons(entry);
        event
    } else if lowered.contains("played") || lowered.contains("used") {
        let mut event = Event::new(EventKind::PlayedDevCard);
        event.piece = PieceKind::from_text(&lowered);
        event
    } else if lowered.contains("monopoly") {
        monopoly(entry)
    } else if lowered.contains("year of plenty") {
        let mut event = Event::new(EventKind::YearOfPlenty);
        event.gained = resolve_icons(entry);
        event.piece = Some(PieceKind::YearOfPlenty);
        event
    } else {
        Event::new(EventKind::Unknown)
    };

    if let Some((name, color)) = entry.first_styled() {
        event.actor = Some(name.trim().to_string());
        event.color = color.map(str::to_string);
    }
    event
}

/// Resolves every icon in the entry into counts. Unrecognized labels are
/// dropped with a diagnostic.
fn resolve_icons(entry: &RawEntry) -> ResourceCounts {
    let mut counts = ResourceCounts::new();
    for (_, label) in entry.icons() {
        match Resource::from_label(label) {
            Some(resource) => counts.add(resource, 1),
            None => debug!(label, "could not identify resource icon"),
        }
    }
    counts
}

fn with_cost(kind: EventKind, cost: ResourceCounts) -> Event {
    let mut event = Event::new(kind);
    event.lost = cost;
    event
}

/// Splits a bank trade's icons around "gave" / "to bank" / "and got".
///
/// Icons between "gave" and "to bank" were given up, icons after "and got"
/// were received. When a marker cannot be located the deltas stay empty and
/// the event still classifies.
fn bank_trade(entry: &RawEntry) -> Event {
    let mut event = Event::new(EventKind::BankTrade);
    event.others.push(Affected::Bank);

    let (Some(gave), Some(to_bank), Some(and_got)) = (
        entry.find_keyword("gave"),
        entry.find_keyword("to bank"),
        entry.find_keyword("and got"),
    ) else {
        return event;
    };

    split_trade_icons(entry, &mut event, gave, to_bank, and_got);
    event
}

/// Splits a player trade's icons around "gave" / "and got" and names the
/// counterparty after "from".
fn player_trade(entry: &RawEntry, text: &str) -> Event {
    let mut event = Event::new(EventKind::CompletedTrade);

    if let Some(name) = word_after_from(text) {
        event.others.push(Affected::Player(name.to_string()));
    }

    let (Some(gave), Some(and_got)) = (entry.find_keyword("gave"), entry.find_keyword("and got"))
    else {
        return event;
    };

    split_trade_icons(entry, &mut event, gave, and_got, and_got);
    event
}

/// Buckets icons into lost (between `gave` and `lost_end`) and gained
/// (after `gained_start`). Icons before "gave" belong to neither side.
fn split_trade_icons(
    entry: &RawEntry,
    event: &mut Event,
    gave: Pos,
    lost_end: Pos,
    gained_start: Pos,
) {
    for (pos, label) in entry.icons() {
        let Some(resource) = Resource::from_label(label) else {
            debug!(label, "could not identify resource icon");
            continue;
        };
        if pos > gave && pos < lost_end {
            event.lost.add(resource, 1);
        } else if pos > gained_start {
            event.gained.add(resource, 1);
        }
    }
}

/// A robber steal: the thief's gain is the resolved icons, or one unknown
/// card when nothing resolves. The victim follows "from"; a victim rendered
/// as "you" is the player running the client.
fn steal(entry: &RawEntry, text: &str) -> Event {
    let mut event = Event::new(EventKind::StoleResource);
    event.gained = resolve_icons(entry);
    if event.gained.is_empty() {
        event.gained.add(Resource::Unknown, 1);
    }

    if let Some(name) = word_after_from(text) {
        if name.eq_ignore_ascii_case("you") {
            event.others.push(Affected::CurrentPlayer);
        } else {
            event.others.push(Affected::Player(name.to_string()));
        }
    }
    event
}

/// A monopoly haul: everybody else is affected, the icons are the take.
fn monopoly(entry: &RawEntry) -> Event {
    let mut event = Event::new(EventKind::Monopoly);
    event.others.push(Affected::EverybodyElse);
    event.gained = resolve_icons(entry);
    event.piece = Some(PieceKind::Monopoly);
    event
}

/// Finds the word run following the first "from " in the text, preserving
/// its case. Word characters are ASCII alphanumerics and underscore, so
/// "stole wood from Bob." yields "Bob".
fn word_after_from(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + 4 <= bytes.len() {
        if bytes[i..i + 4].eq_ignore_ascii_case(b"from") {
            let mut j = i + 4;
            let whitespace_start = j;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j > whitespace_start {
                let name_start = j;
                while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
                    j += 1;
                }
                if j > name_start {
                    // Both bounds sit on ASCII bytes, so the slice is valid.
                    return Some(&text[name_start..j]);
                }
            }
        }
        i += 1;
    }
    None
}

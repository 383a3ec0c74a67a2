//! Typed events produced by the classifier.

use std::fmt;

use tallytable_foundation::{PieceKind, ResourceCounts};

/// The classification of one log entry.
///
/// Closed set: every entry classifies to exactly one kind, with
/// [`EventKind::Unknown`] as the fallback for unrecognized phrasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A dice roll. No resource effect.
    DiceRoll,
    /// Setup-phase starting resource distribution.
    StartingResources,
    /// Resources produced by a roll or otherwise handed out.
    ReceivedResources,
    /// A trade with the bank.
    BankTrade,
    /// A completed trade with another player.
    CompletedTrade,
    /// A trade offer. No resource effect until completed.
    OfferedTrade,
    /// Setup-phase road placement. Free.
    PlacedRoadSetup,
    /// A paid road build.
    BuiltRoad,
    /// Setup-phase settlement placement. Free.
    PlacedSettlementSetup,
    /// A paid settlement build.
    BuiltSettlement,
    /// A paid city build or upgrade.
    BuiltCity,
    /// A development card purchase.
    BoughtDevCard,
    /// A robber steal from a named victim.
    StoleResource,
    /// A monopoly haul taken from everybody else.
    Monopoly,
    /// Cards discarded to the robber.
    DiscardedResources,
    /// A development card played.
    PlayedDevCard,
    /// A year-of-plenty draw from the bank.
    YearOfPlenty,
    /// A visual separator between log sections.
    Separator,
    /// Unrecognized phrasing.
    Unknown,
}

impl EventKind {
    /// Whether applying this kind can mutate ledgers or the bank.
    ///
    /// The kinds returning `false` here classify but are never applied.
    #[must_use]
    pub fn has_ledger_effect(self) -> bool {
        match self {
            Self::DiceRoll
            | Self::OfferedTrade
            | Self::PlacedRoadSetup
            | Self::PlacedSettlementSetup
            | Self::Separator
            | Self::Unknown => false,
            Self::StartingResources
            | Self::ReceivedResources
            | Self::BankTrade
            | Self::CompletedTrade
            | Self::BuiltRoad
            | Self::BuiltSettlement
            | Self::BuiltCity
            | Self::BoughtDevCard
            | Self::StoleResource
            | Self::Monopoly
            | Self::DiscardedResources
            | Self::PlayedDevCard
            | Self::YearOfPlenty => true,
        }
    }

    /// The snake_case name, as used in diagnostics and the REPL.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DiceRoll => "dice_roll",
            Self::StartingResources => "starting_resources",
            Self::ReceivedResources => "received_resources",
            Self::BankTrade => "bank_trade",
            Self::CompletedTrade => "completed_trade",
            Self::OfferedTrade => "offered_trade",
            Self::PlacedRoadSetup => "placed_road_setup",
            Self::BuiltRoad => "built_road",
            Self::PlacedSettlementSetup => "placed_settlement_setup",
            Self::BuiltSettlement => "built_settlement",
            Self::BuiltCity => "built_city",
            Self::BoughtDevCard => "bought_dev_card",
            Self::StoleResource => "stole_resource",
            Self::Monopoly => "monopoly",
            Self::DiscardedResources => "discarded_resources",
            Self::PlayedDevCard => "played_dev_card",
            Self::YearOfPlenty => "year_of_plenty",
            Self::Separator => "separator",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who, besides the actor, an event touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Affected {
    /// A named player.
    Player(String),
    /// The player running the client ("you" in log text).
    CurrentPlayer,
    /// Every player except the actor.
    EverybodyElse,
    /// The bank.
    Bank,
}

/// A classified log entry.
///
/// Immutable once constructed; the ledger engine consumes it exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// The acting player, when one was named.
    pub actor: Option<String>,
    /// Color observed on the actor's styled name, when present.
    pub color: Option<String>,
    /// Other parties the event touches.
    pub others: Vec<Affected>,
    /// Resources the actor gained.
    pub gained: ResourceCounts,
    /// Resources the actor lost.
    pub lost: ResourceCounts,
    /// Development piece named by the entry, when any.
    pub piece: Option<PieceKind>,
}

impl Event {
    /// Creates an event of the given kind with no actor and no effects.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            actor: None,
            color: None,
            others: Vec::new(),
            gained: ResourceCounts::new(),
            lost: ResourceCounts::new(),
            piece: None,
        }
    }
}

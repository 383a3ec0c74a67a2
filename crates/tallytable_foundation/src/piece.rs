//! Development piece kinds recognized in played-card text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A playable development piece drawn from the bank's sub-pools.
///
/// Victory-point cards exist only as a bank counter; they are never played,
/// so they have no kind here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Knight card.
    Knight,
    /// Road building card.
    RoadBuilding,
    /// Year of plenty card.
    YearOfPlenty,
    /// Monopoly card.
    Monopoly,
}

/// Keyword table in lookup order.
const KEYWORDS: &[(&str, PieceKind)] = &[
    ("knight", PieceKind::Knight),
    ("road building", PieceKind::RoadBuilding),
    ("monopoly", PieceKind::Monopoly),
    ("year of plenty", PieceKind::YearOfPlenty),
];

impl PieceKind {
    /// Identifies the piece named in a played-card message.
    ///
    /// Case-insensitive substring search, first keyword wins. Returns `None`
    /// when the text names no recognizable piece.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|&(_, kind)| kind)
    }

    /// The snake_case name, as used in snapshots and diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Knight => "knight",
            Self::RoadBuilding => "road_building",
            Self::YearOfPlenty => "year_of_plenty",
            Self::Monopoly => "monopoly",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

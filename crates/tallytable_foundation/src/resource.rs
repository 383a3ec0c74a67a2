//! Canonical resource kinds and the synonym vocabulary mapping icon labels
//! onto them.
//!
//! Game clients label resource icons inconsistently ("grain" vs "wheat",
//! "ore" vs "rock"). The vocabulary collapses every observed label onto one
//! of five canonical kinds; holdings whose identity was never observed are
//! tracked under [`Resource::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five tradeable resource kinds, or the catch-all placeholder
/// for cards whose identity was never observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Wheat (also labeled "grain").
    Wheat,
    /// Stone (also labeled "ore" or "rock").
    Stone,
    /// Brick (also labeled "clay").
    Brick,
    /// Wood (also labeled "lumber" or "tree").
    Wood,
    /// Wool (also labeled "sheep").
    Wool,
    /// A card known to exist but never identified.
    Unknown,
}

/// Synonym table in lookup order. Earlier entries win when a label happens
/// to contain more than one synonym.
const SYNONYMS: &[(&str, Resource)] = &[
    ("wheat", Resource::Wheat),
    ("grain", Resource::Wheat),
    ("stone", Resource::Stone),
    ("ore", Resource::Stone),
    ("rock", Resource::Stone),
    ("brick", Resource::Brick),
    ("clay", Resource::Brick),
    ("wood", Resource::Wood),
    ("lumber", Resource::Wood),
    ("tree", Resource::Wood),
    ("wool", Resource::Wool),
    ("sheep", Resource::Wool),
];

impl Resource {
    /// The five concrete kinds, in canonical order. Excludes
    /// [`Resource::Unknown`].
    pub const KNOWN: [Resource; 5] = [
        Resource::Wheat,
        Resource::Stone,
        Resource::Brick,
        Resource::Wood,
        Resource::Wool,
    ];

    /// All six kinds, in canonical order.
    pub const ALL: [Resource; 6] = [
        Resource::Wheat,
        Resource::Stone,
        Resource::Brick,
        Resource::Wood,
        Resource::Wool,
        Resource::Unknown,
    ];

    /// Resolves an icon label to a canonical resource.
    ///
    /// Matching is case-insensitive substring containment against the
    /// synonym table, first matching entry wins. Returns `None` for labels
    /// that name no known resource (the caller drops these silently).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let lowered = label.to_lowercase();
        SYNONYMS
            .iter()
            .find(|(synonym, _)| lowered.contains(synonym))
            .map(|&(_, resource)| resource)
    }

    /// The lowercase canonical name, as used in snapshots.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Wheat => "wheat",
            Self::Stone => "stone",
            Self::Brick => "brick",
            Self::Wood => "wood",
            Self::Wool => "wool",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this is a concrete kind rather than the placeholder.
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

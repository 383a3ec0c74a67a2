//! Player ledgers and the insertion-ordered ledger book.

use serde::{Deserialize, Serialize};

use tallytable_foundation::ResourceCounts;

/// Display color before the log reveals one.
const DEFAULT_COLOR: &str = "#ffffff";

/// One player's tracked inventory.
///
/// Serialized field names are part of the persisted format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLedger {
    /// Player name, unique within a book.
    pub name: String,
    /// Display color observed on the player's styled name.
    pub color: String,
    /// Set once a color has been observed; later observations are ignored.
    pub color_frozen: bool,
    /// Tracked holdings.
    pub resources: ResourceCounts,
}

impl PlayerLedger {
    /// Creates a ledger with zeroed holdings and the default color.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: DEFAULT_COLOR.to_string(),
            color_frozen: false,
            resources: ResourceCounts::new(),
        }
    }

    /// Records the player's color the first time a non-empty one appears.
    ///
    /// The first observed color wins for the life of the ledger.
    pub fn observe_color(&mut self, color: &str) {
        if !self.color_frozen && !color.is_empty() {
            self.color = color.to_string();
            self.color_frozen = true;
        }
    }
}

/// The mutable collection of all player ledgers.
///
/// Preserves first-seen order so snapshots list players stably.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerBook {
    players: Vec<PlayerLedger>,
}

impl LedgerBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a player by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlayerLedger> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Looks up a player by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlayerLedger> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Looks up a player, creating a zeroed ledger on first mention.
    pub fn get_or_create(&mut self, name: &str) -> &mut PlayerLedger {
        let index = match self.players.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                self.players.push(PlayerLedger::new(name));
                self.players.len() - 1
            }
        };
        &mut self.players[index]
    }

    /// Number of tracked players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no players are tracked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterates ledgers in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerLedger> {
        self.players.iter()
    }

    /// Removes every ledger. Used on game reset.
    pub fn clear(&mut self) {
        self.players.clear();
    }
}

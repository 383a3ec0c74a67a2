//! The shared development piece bank.

use serde::{Deserialize, Serialize};

use tallytable_foundation::PieceKind;

/// Shared pool of limited-count development pieces.
///
/// Each sub-pool and the overall remaining count are decremented
/// independently and each floors at zero; a sub-pool reaching zero does not
/// force `remaining` down. Serialized field names are part of the persisted
/// format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankState {
    /// Cards left in the deck overall.
    pub remaining: u32,
    /// Knight sub-pool.
    pub knights: u32,
    /// Victory point sub-pool. Bought but never played.
    pub victory_points: u32,
    /// Road building sub-pool.
    pub road_building: u32,
    /// Year of plenty sub-pool.
    pub year_of_plenty: u32,
    /// Monopoly sub-pool.
    pub monopoly: u32,
}

impl Default for BankState {
    fn default() -> Self {
        Self::new()
    }
}

impl BankState {
    /// A full bank: 25 cards, of which 14 knights, 5 victory points, and 2
    /// each of road building, year of plenty, and monopoly.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: 25,
            knights: 14,
            victory_points: 5,
            road_building: 2,
            year_of_plenty: 2,
            monopoly: 2,
        }
    }

    /// The sub-pool count for a piece kind.
    #[must_use]
    pub fn pool(&self, piece: PieceKind) -> u32 {
        match piece {
            PieceKind::Knight => self.knights,
            PieceKind::RoadBuilding => self.road_building,
            PieceKind::YearOfPlenty => self.year_of_plenty,
            PieceKind::Monopoly => self.monopoly,
        }
    }

    fn pool_mut(&mut self, piece: PieceKind) -> &mut u32 {
        match piece {
            PieceKind::Knight => &mut self.knights,
            PieceKind::RoadBuilding => &mut self.road_building,
            PieceKind::YearOfPlenty => &mut self.year_of_plenty,
            PieceKind::Monopoly => &mut self.monopoly,
        }
    }

    /// Records a played piece.
    ///
    /// When the sub-pool still has cards, it and `remaining` each go down by
    /// one and the call returns `true`. An exhausted sub-pool changes
    /// nothing and returns `false`.
    pub fn record_piece_played(&mut self, piece: PieceKind) -> bool {
        let pool = self.pool_mut(piece);
        if *pool == 0 {
            return false;
        }
        *pool -= 1;
        self.remaining = self.remaining.saturating_sub(1);
        true
    }

    /// Restores starting quantities.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

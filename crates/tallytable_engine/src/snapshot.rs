//! Read snapshots for external renderers and persisters.

use serde::{Deserialize, Serialize};

use crate::bank::BankState;
use crate::ledger::{LedgerBook, PlayerLedger};

/// A point-in-time copy of every ledger and the bank.
///
/// The serialized field names are the persisted contract; [`PlayerLedger`]
/// and [`BankState`] pin the nested shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every tracked player, in first-seen order.
    pub players: Vec<PlayerLedger>,
    /// The development piece bank.
    pub bank: BankState,
}

impl Snapshot {
    /// Copies the current state out of the book and bank.
    #[must_use]
    pub fn capture(book: &LedgerBook, bank: &BankState) -> Self {
        Self {
            players: book.iter().cloned().collect(),
            bank: *bank,
        }
    }
}

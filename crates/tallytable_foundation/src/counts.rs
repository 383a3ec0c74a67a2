//! Per-resource count records with clamped arithmetic.
//!
//! The ledger is an approximation of hidden state, so subtraction floors at
//! zero instead of failing: when the log implies a loss the player provably
//! cannot cover, the recorded state absorbs the difference rather than
//! erroring out.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// A count per canonical resource plus the unknown bucket.
///
/// Used both for player holdings and for gain/loss deltas. Serializes as an
/// object with all six lowercase resource names as keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounts {
    /// Wheat count.
    pub wheat: u32,
    /// Stone count.
    pub stone: u32,
    /// Brick count.
    pub brick: u32,
    /// Wood count.
    pub wood: u32,
    /// Wool count.
    pub wool: u32,
    /// Cards known to exist but never identified.
    pub unknown: u32,
}

impl ResourceCounts {
    /// Creates a zeroed record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The count for one resource.
    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Wheat => self.wheat,
            Resource::Stone => self.stone,
            Resource::Brick => self.brick,
            Resource::Wood => self.wood,
            Resource::Wool => self.wool,
            Resource::Unknown => self.unknown,
        }
    }

    fn bucket_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Wheat => &mut self.wheat,
            Resource::Stone => &mut self.stone,
            Resource::Brick => &mut self.brick,
            Resource::Wood => &mut self.wood,
            Resource::Wool => &mut self.wool,
            Resource::Unknown => &mut self.unknown,
        }
    }

    /// Adds `amount` to one resource.
    pub fn add(&mut self, resource: Resource, amount: u32) {
        let bucket = self.bucket_mut(resource);
        *bucket = bucket.saturating_add(amount);
    }

    /// Removes up to `amount` from one resource, flooring at zero.
    ///
    /// Returns the amount actually removed.
    pub fn remove_clamped(&mut self, resource: Resource, amount: u32) -> u32 {
        let bucket = self.bucket_mut(resource);
        let removed = amount.min(*bucket);
        *bucket -= removed;
        removed
    }

    /// Total cards across all six buckets.
    #[must_use]
    pub fn total(&self) -> u32 {
        Resource::ALL.iter().map(|&r| self.get(r)).sum()
    }

    /// Whether every bucket is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Concrete resource kinds currently held (count > 0, excluding the
    /// unknown bucket).
    #[must_use]
    pub fn known_types(&self) -> Vec<Resource> {
        Resource::KNOWN
            .iter()
            .copied()
            .filter(|&r| self.get(r) > 0)
            .collect()
    }

    /// How far these holdings fall short of covering `cost`.
    ///
    /// Sums `max(0, cost - held)` per resource, reading every holding before
    /// any subtraction happens. A zero result means the cost is fully
    /// covered by identified cards.
    #[must_use]
    pub fn shortfall(&self, cost: &ResourceCounts) -> u32 {
        Resource::ALL
            .iter()
            .map(|&r| cost.get(r).saturating_sub(self.get(r)))
            .sum()
    }

    /// Iterates `(resource, count)` pairs in canonical order.
    pub fn iter(self) -> impl Iterator<Item = (Resource, u32)> {
        Resource::ALL.map(|r| (r, self.get(r))).into_iter()
    }
}

//! Mana pool mutation.
//!
//! The engine owns the player's mana pool. The agent only gets a narrow
//! mutator to add mana before announcing a cast; the engine re-validates
//! every payment on its own.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cards::ManaSymbol;

/// Failure reported by a pool mutator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManaPoolError {
    #[error("mana pool cannot hold {requested} more mana (capacity {capacity})")]
    CapacityExceeded { requested: u32, capacity: u32 },

    #[error("mana pool rejected {symbol}: {reason}")]
    Rejected { symbol: ManaSymbol, reason: String },
}

/// Engine-exposed mana pool mutator.
pub trait ManaPool {
    /// Add `amount` mana of a single symbol.
    fn add_mana(&mut self, symbol: ManaSymbol, amount: u32) -> Result<(), ManaPoolError>;
}

/// In-memory mana pool for harnesses and tests.
#[derive(Clone, Debug, Default)]
pub struct SimpleManaPool {
    mana: FxHashMap<ManaSymbol, u32>,
    capacity: Option<u32>,
}

impl SimpleManaPool {
    /// Create an unbounded pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool that refuses to hold more than `capacity` mana in total.
    #[must_use]
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            mana: FxHashMap::default(),
            capacity: Some(capacity),
        }
    }

    /// Mana of one symbol currently in the pool.
    #[must_use]
    pub fn amount(&self, symbol: ManaSymbol) -> u32 {
        self.mana.get(&symbol).copied().unwrap_or(0)
    }

    /// Total mana in the pool.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.mana.values().sum()
    }

    /// Empty the pool.
    pub fn clear(&mut self) {
        self.mana.clear();
    }
}

impl ManaPool for SimpleManaPool {
    fn add_mana(&mut self, symbol: ManaSymbol, amount: u32) -> Result<(), ManaPoolError> {
        if let Some(capacity) = self.capacity {
            if self.total().saturating_add(amount) > capacity {
                return Err(ManaPoolError::CapacityExceeded {
                    requested: amount,
                    capacity,
                });
            }
        }
        *self.mana.entry(symbol).or_insert(0) += amount;
        Ok(())
    }
}

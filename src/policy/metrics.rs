//! Per-game decision counters.

use serde::{Deserialize, Serialize};

/// Counters updated by main-phase decisions.
///
/// Always present on an agent; callers that don't care simply never read it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Lands played.
    pub land_plays: u32,

    /// Creatures cast.
    pub creature_casts: u32,

    /// Role-classified spells cast.
    pub spell_casts: u32,

    /// Sum of approximate costs of everything cast.
    pub approx_mana_spent: u64,

    /// Main-phase decisions made with a non-empty hand.
    pub main_phase_actions: u32,

    /// Main-phase decisions that found nothing to play.
    pub main_phase_passes: u32,
}

impl Metrics {
    /// Create new empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total casts, creatures and spells.
    #[must_use]
    pub fn casts(&self) -> u32 {
        self.creature_casts + self.spell_casts
    }

    /// Fraction of main-phase decisions that passed.
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.main_phase_actions == 0 {
            0.0
        } else {
            f64::from(self.main_phase_passes) / f64::from(self.main_phase_actions)
        }
    }

    /// Average approximate mana per cast.
    #[must_use]
    pub fn avg_mana_per_cast(&self) -> f64 {
        let casts = self.casts();
        if casts == 0 {
            0.0
        } else {
            self.approx_mana_spent as f64 / f64::from(casts)
        }
    }
}

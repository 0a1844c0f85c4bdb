//! Board evaluation: what can we afford, and which creature is best to deploy.
//!
//! Candidates are ranked lexicographically by (cost, power, toughness):
//! spending more mana wins first, then the bigger threat, then the sturdier
//! body. `score_candidate` folds the same ranking into one number,
//! `100 * cost + 10 * power + toughness`, which agrees with the ordering
//! whenever power and toughness stay in 0..=9.

use std::cmp::Ordering;

use im::Vector;
use tracing::trace;

use crate::cards::{approx_cost, CardView};
use crate::core::PlayerView;

/// Approximate mana available: lands controlled.
///
/// Ignores tapped state and colors.
#[must_use]
pub fn available_resources(player: &PlayerView) -> u32 {
    player.lands
}

/// Lexicographic deploy ranking for a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateScore {
    pub cost: u32,
    pub power: i64,
    pub toughness: i64,
}

impl CandidateScore {
    /// Score a card.
    #[must_use]
    pub fn of(card: &CardView) -> Self {
        Self {
            cost: approx_cost(card),
            power: card.power,
            toughness: card.toughness,
        }
    }

    /// Weighted single-number form: `100 * cost + 10 * power + toughness`.
    #[must_use]
    pub fn weighted(&self) -> i64 {
        100 * i64::from(self.cost) + 10 * self.power + self.toughness
    }
}

/// Weighted deploy score of a card.
#[must_use]
pub fn score_candidate(card: &CardView) -> i64 {
    CandidateScore::of(card).weighted()
}

/// An affordable creature in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Hand index.
    pub index: usize,
    pub score: CandidateScore,
}

/// Creatures in hand whose approximate cost fits the available mana.
///
/// Unaffordable creatures are left out rather than penalized.
#[must_use]
pub fn affordable_creatures(hand: &Vector<CardView>, available: u32) -> Vec<Candidate> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| card.is_creature)
        .filter_map(|(index, card)| {
            let score = CandidateScore::of(card);
            if score.cost > available {
                trace!(index, card = %card.name, cost = score.cost, available, "unaffordable");
                return None;
            }
            trace!(index, card = %card.name, score = score.weighted(), "candidate");
            Some(Candidate { index, score })
        })
        .collect()
}

/// Hand index of the highest-ranked candidate, or `None` if there are none.
///
/// Candidates with identical rankings resolve to the later hand index.
#[must_use]
pub fn select_best(candidates: &[Candidate]) -> Option<usize> {
    candidates
        .iter()
        .max_by(|a, b| match a.score.cmp(&b.score) {
            Ordering::Equal => a.index.cmp(&b.index),
            other => other,
        })
        .map(|c| c.index)
}

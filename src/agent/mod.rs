//! Agents: the surface the game engine calls into.
//!
//! The engine drives an agent through two calls:
//!
//! - `decide_action` once per main phase, answered with a [`Command`]
//! - `decide_response` for every free-text prompt, answered with a [`Response`]
//!
//! [`HeuristicAgent`] is the rule-based player. [`RandomAgent`] is the seeded
//! baseline it is measured against.

mod heuristic;
mod random;

pub use heuristic::{HeuristicAgent, TargetState};
pub use random::RandomAgent;

use crate::core::{Command, GameView, ManaPool, Response};

/// A player the engine can ask for decisions.
pub trait Agent {
    /// Choose a main-phase action.
    ///
    /// Mana needed for the chosen card is synthesized into `pool` before the
    /// command is returned.
    fn decide_action(&mut self, game: &GameView, pool: &mut dyn ManaPool) -> Command;

    /// Answer a free-text engine prompt.
    fn decide_response(&mut self, game: &GameView, prompt: &str) -> Response;
}

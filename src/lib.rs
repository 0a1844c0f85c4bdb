//! # rust-ccg-agent
//!
//! Heuristic decision policies for a two-player trading card game agent.
//!
//! The game engine owns the rules. At each decision point it hands the agent
//! a read-only snapshot and gets back a short text command or prompt answer.
//!
//! ## Design Principles
//!
//! 1. **Pure Policies**: Every decision is a function of a `GameView`
//!    snapshot. Side effects are explicit: mana added to a `ManaPool` and
//!    counters on `Metrics`.
//!
//! 2. **Never Fail the Engine**: Missing data falls back to defaults and
//!    pool errors are logged and swallowed. The worst outcome is a pass.
//!
//! 3. **Deterministic**: The heuristic agent has no randomness. The random
//!    baseline is seeded.
//!
//! ## Modules
//!
//! - `core`: Players, phases, configuration, commands, mana pools, snapshots
//! - `cards`: Card views, cost estimation, spell roles
//! - `policy`: Main-phase, combat, and targeting heuristics
//! - `agent`: The `Agent` trait, `HeuristicAgent`, and `RandomAgent`

pub mod agent;
pub mod cards;
pub mod core;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    AgentConfig, AgentRng, Command, GameView, IndexList, ManaPool, ManaPoolError, Phase, PlayerId,
    PlayerView, Response, SimpleManaPool, TargetRef,
};

pub use crate::cards::{CardView, Color, ManaCost, ManaSymbol, RoleTable, SpellRole};

pub use crate::policy::{MainPhaseDecision, Metrics, PromptKind};

pub use crate::agent::{Agent, HeuristicAgent, RandomAgent, TargetState};

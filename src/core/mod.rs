//! Core agent types: players, snapshots, commands, mana, RNG, configuration.
//!
//! This module holds the engine-facing data model. Policies only read
//! `GameView` snapshots and produce `Command`/`Response` values.

pub mod player;
pub mod config;
pub mod action;
pub mod mana;
pub mod rng;
pub mod state;

pub use player::PlayerId;
pub use config::{AgentConfig, Phase};
pub use action::{Command, CommandParseError, IndexList, Response, TargetRef};
pub use mana::{ManaPool, ManaPoolError, SimpleManaPool};
pub use rng::{AgentRng, AgentRngState};
pub use state::{GameView, PlayerView, SnapshotError};

//! Heuristic decision policies.
//!
//! Every policy is a pure function of a `GameView` snapshot. The only
//! side effects are explicit: mana synthesized into a `ManaPool` and
//! counters bumped on `Metrics`.
//!
//! - `evaluator`: Affordability and creature ranking
//! - `main_phase`: Land / creature / spell / pass decision
//! - `combat`: Attacker and blocker declarations
//! - `targeting`: Targets for role spells
//! - `prompt`: Prompt text classification
//! - `metrics`: Per-game counters

pub mod combat;
pub mod evaluator;
pub mod main_phase;
pub mod metrics;
pub mod prompt;
pub mod targeting;

pub use combat::{incoming_damage, select_attackers, select_blockers, WorstCaseBlocker};
pub use evaluator::{
    affordable_creatures, available_resources, score_candidate, select_best, Candidate,
    CandidateScore,
};
pub use main_phase::{decide_main_phase, role_is_castable, MainPhaseDecision};
pub use metrics::Metrics;
pub use prompt::PromptKind;
pub use targeting::select_target;

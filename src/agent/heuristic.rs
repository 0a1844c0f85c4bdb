//! Rule-based agent built from the heuristic policies.

use tracing::{debug, warn};

use super::Agent;
use crate::cards::{RoleTable, SpellRole};
use crate::core::{AgentConfig, Command, GameView, ManaPool, Response};
use crate::policy::{
    decide_main_phase, select_attackers, select_blockers, select_target, Metrics, PromptKind,
};

/// Link between a cast role spell and its upcoming target prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetState {
    /// No spell waiting for a target.
    #[default]
    Idle,
    /// A spell of this role was just cast.
    AwaitingTarget(SpellRole),
}

impl TargetState {
    /// Take the pending role, leaving `Idle` behind.
    pub fn take(&mut self) -> Option<SpellRole> {
        match std::mem::take(self) {
            TargetState::Idle => None,
            TargetState::AwaitingTarget(role) => Some(role),
        }
    }

    /// Check if no role is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, TargetState::Idle)
    }
}

/// Heuristic agent: land, best creature, useful spells, safe attacks,
/// tiered blocks.
///
/// ## Example
///
/// ```
/// use rust_ccg_agent::agent::{Agent, HeuristicAgent};
/// use rust_ccg_agent::cards::CardView;
/// use rust_ccg_agent::core::{GameView, PlayerId, PlayerView, SimpleManaPool};
///
/// let me = PlayerView::new(PlayerId::new(0)).with_hand([CardView::land("Forest")]);
/// let game = GameView::new(me, PlayerView::new(PlayerId::new(1)));
///
/// let mut agent = HeuristicAgent::new();
/// let command = agent.decide_action(&game, &mut SimpleManaPool::new());
///
/// assert_eq!(command.to_string(), "p 0");
/// assert_eq!(agent.metrics().land_plays, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeuristicAgent {
    config: AgentConfig,
    roles: RoleTable,
    target_state: TargetState,
    metrics: Metrics,
}

impl HeuristicAgent {
    /// Create an agent with the default configuration and role table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom role table (builder pattern).
    #[must_use]
    pub fn with_roles(mut self, roles: RoleTable) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub fn target_state(&self) -> TargetState {
        self.target_state
    }

    /// Counters for the current game.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Return the counters for the finished game and start fresh.
    pub fn take_metrics(&mut self) -> Metrics {
        std::mem::take(&mut self.metrics)
    }

    fn respond_to_target(&mut self, game: &GameView) -> Response {
        let Some(role) = self.target_state.take() else {
            debug!("target prompt with no pending spell");
            return Response::Empty;
        };
        select_target(role, game, &self.config).map_or(Response::Empty, Response::from)
    }
}

impl Agent for HeuristicAgent {
    fn decide_action(&mut self, game: &GameView, pool: &mut dyn ManaPool) -> Command {
        if let Some(role) = self.target_state.take() {
            warn!(%role, "target prompt never arrived, dropping pending spell");
        }

        let decision = decide_main_phase(game, &self.config, &self.roles, pool, &mut self.metrics);
        if let Some(role) = decision.pending_role() {
            self.target_state = TargetState::AwaitingTarget(role);
        }
        decision.command()
    }

    fn decide_response(&mut self, game: &GameView, prompt: &str) -> Response {
        let kind = PromptKind::classify(prompt);
        debug!(?kind, prompt, "answering prompt");

        match kind {
            PromptKind::Attackers => Response::from_indices(select_attackers(
                &game.me.creatures,
                &game.opponent.creatures,
            )),
            PromptKind::Blockers => {
                Response::from_indices(select_blockers(&game.me, &game.opponent, &self.config))
            }
            PromptKind::Target => self.respond_to_target(game),
            PromptKind::Discard if game.me.hand.is_empty() => Response::Empty,
            PromptKind::Discard | PromptKind::WhichCreature => Response::Index(0),
            PromptKind::Other => Response::Empty,
        }
    }
}

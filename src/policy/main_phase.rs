//! Main-phase decision: land drop, creature, role spell, or pass.
//!
//! Priority order on our own main phase with a non-empty hand:
//!
//! 1. The first land in hand, if a land drop is left this turn.
//! 2. The best affordable creature (see `evaluator`).
//! 3. The first role spell in hand whose condition holds:
//!    - pacifism needs an opposing creature
//!    - burn needs a killable opposing creature, or lethal damage
//!    - pump needs a creature of our own
//! 4. Pass.
//!
//! Spells whose condition fails are held, never cast on speculation.

use tracing::{debug, trace};

use super::evaluator::{affordable_creatures, available_resources, select_best};
use super::metrics::Metrics;
use crate::cards::{approx_cost, ensure_payable, CardView, RoleTable, SpellRole};
use crate::core::{AgentConfig, Command, GameView, ManaPool};

/// Outcome of a main-phase decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainPhaseDecision {
    /// Nothing to do.
    Pass,
    /// Play the land at this hand index.
    PlayLand(usize),
    /// Cast the creature at this hand index.
    CastCreature(usize),
    /// Cast a role spell; its target prompt follows.
    CastSpell { index: usize, role: SpellRole },
}

impl MainPhaseDecision {
    /// Command to send to the engine.
    #[must_use]
    pub fn command(&self) -> Command {
        match self {
            MainPhaseDecision::Pass => Command::Pass,
            MainPhaseDecision::PlayLand(i)
            | MainPhaseDecision::CastCreature(i)
            | MainPhaseDecision::CastSpell { index: i, .. } => Command::Play(*i),
        }
    }

    /// Role awaiting a target prompt after this decision.
    #[must_use]
    pub fn pending_role(&self) -> Option<SpellRole> {
        match self {
            MainPhaseDecision::CastSpell { role, .. } => Some(*role),
            _ => None,
        }
    }
}

/// Check whether a role spell has something useful to do right now.
#[must_use]
pub fn role_is_castable(role: SpellRole, game: &GameView, config: &AgentConfig) -> bool {
    match role {
        SpellRole::Pacifism => !game.opponent.creatures.is_empty(),
        SpellRole::Burn => {
            let kills_creature = game
                .opponent
                .creatures
                .iter()
                .any(|c| c.toughness <= config.burn_damage);
            kills_creature
                || (config.burn_face_when_lethal && game.opponent.life <= config.burn_damage)
        }
        SpellRole::Pump => !game.me.creatures.is_empty(),
    }
}

fn record_cast(metrics: &mut Metrics, card: &CardView) {
    metrics.approx_mana_spent += u64::from(approx_cost(card));
}

/// Decide what to do on a main phase.
///
/// Outside our own main phases, or with an empty hand, this passes without
/// touching `metrics`. Mana for a chosen cast is synthesized into `pool`.
pub fn decide_main_phase(
    game: &GameView,
    config: &AgentConfig,
    roles: &RoleTable,
    pool: &mut dyn ManaPool,
    metrics: &mut Metrics,
) -> MainPhaseDecision {
    if !game.is_my_turn() || !game.is_main_phase() {
        return MainPhaseDecision::Pass;
    }

    let me = &game.me;
    if me.hand.is_empty() {
        return MainPhaseDecision::Pass;
    }

    metrics.main_phase_actions += 1;

    if me.can_play_land() {
        if let Some(index) = me.hand.iter().position(|c| c.is_land) {
            metrics.land_plays += 1;
            debug!(index, card = %me.hand[index].name, "playing land");
            return MainPhaseDecision::PlayLand(index);
        }
    }

    let candidates = affordable_creatures(&me.hand, available_resources(me));
    if let Some(index) = select_best(&candidates) {
        let card = &me.hand[index];
        ensure_payable(pool, card);
        metrics.creature_casts += 1;
        record_cast(metrics, card);
        debug!(index, card = %card.name, "casting creature");
        return MainPhaseDecision::CastCreature(index);
    }

    for (index, card) in me.hand.iter().enumerate() {
        let Some(role) = roles.classify(card) else {
            continue;
        };
        if !role_is_castable(role, game, config) {
            trace!(index, card = %card.name, %role, "holding spell");
            continue;
        }

        ensure_payable(pool, card);
        metrics.spell_casts += 1;
        record_cast(metrics, card);
        debug!(index, card = %card.name, %role, "casting spell");
        return MainPhaseDecision::CastSpell { index, role };
    }

    metrics.main_phase_passes += 1;
    debug!(hand = me.hand.len(), "nothing playable, passing");
    MainPhaseDecision::Pass
}

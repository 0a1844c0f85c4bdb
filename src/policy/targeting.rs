//! Target selection for role-classified spells.
//!
//! - Burn: the strongest opposing creature the burn can kill
//! - Pump: our own strongest creature
//! - Pacifism: the opponent's strongest creature
//!
//! "Strongest" means highest power; ties go to the lowest battlefield index.

use std::cmp::Reverse;

use tracing::debug;

use crate::cards::{CardView, SpellRole};
use crate::core::{AgentConfig, GameView, TargetRef};

/// Index of the highest-power creature, first one on ties.
fn strongest<'a>(creatures: impl Iterator<Item = (usize, &'a CardView)>) -> Option<usize> {
    creatures
        .min_by_key(|(i, c)| (Reverse(c.power), *i))
        .map(|(i, _)| i)
}

/// Choose a target for a spell of the given role.
///
/// `None` means answer the prompt with no target.
#[must_use]
pub fn select_target(role: SpellRole, game: &GameView, config: &AgentConfig) -> Option<TargetRef> {
    let target = match role {
        SpellRole::Burn => {
            let killable = game
                .opponent
                .creatures
                .iter()
                .enumerate()
                .filter(|(_, c)| c.toughness <= config.burn_damage);
            match strongest(killable) {
                Some(i) => Some(TargetRef::Opposing(i)),
                None if config.burn_face_when_lethal
                    && game.opponent.life <= config.burn_damage =>
                {
                    Some(TargetRef::OpponentPlayer)
                }
                None => None,
            }
        }
        SpellRole::Pump => strongest(game.me.creatures.iter().enumerate()).map(TargetRef::Own),
        SpellRole::Pacifism => {
            strongest(game.opponent.creatures.iter().enumerate()).map(TargetRef::Opposing)
        }
    };

    debug!(%role, ?target, "selected target");
    target
}

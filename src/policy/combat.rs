//! Combat declarations: which creatures attack, which creatures block.
//!
//! ## Attacking
//!
//! The opponent's board is collapsed into one hypothetical worst-case
//! blocker with the highest power and the highest toughness found among
//! their creatures. An attacker stays home only if that blocker would kill
//! it without dying. Real blocker assignment is not modelled.
//!
//! ## Blocking
//!
//! Three tiers, evaluated over untapped creatures:
//!
//! 1. **Must block**: incoming damage is lethal, so everything blocks.
//! 2. **Favorable trade**: a blocker that kills some attacker and survives it.
//! 3. **Chump block**: when more than half our life is coming in, small
//!    creatures (power at most `chump_max_power`) are thrown in as well.
//!
//! Output indices are always ascending.

use im::Vector;
use tracing::debug;

use crate::cards::CardView;
use crate::core::{AgentConfig, IndexList, PlayerView};

/// Worst-case stats an opposing blocker could have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorstCaseBlocker {
    pub power: i64,
    pub toughness: i64,
}

impl WorstCaseBlocker {
    /// Collapse a board into its worst-case blocker, `None` for an empty board.
    #[must_use]
    pub fn of(creatures: &Vector<CardView>) -> Option<Self> {
        let power = creatures.iter().map(|c| c.power).max()?;
        let toughness = creatures.iter().map(|c| c.toughness).max()?;
        Some(Self { power, toughness })
    }

    /// An attack is unsafe when this blocker kills the attacker and survives.
    #[must_use]
    pub fn punishes(&self, attacker: &CardView) -> bool {
        let (power, toughness) = attacker.stats();
        self.power >= toughness && power < self.toughness
    }
}

/// Indices of our creatures that should attack.
///
/// Everything attacks into an empty board.
#[must_use]
pub fn select_attackers(mine: &Vector<CardView>, theirs: &Vector<CardView>) -> IndexList {
    let Some(blocker) = WorstCaseBlocker::of(theirs) else {
        debug!(count = mine.len(), "opponent has no creatures, attacking with everything");
        return (0..mine.len()).collect();
    };

    let attackers: IndexList = mine
        .iter()
        .enumerate()
        .filter(|(_, creature)| !blocker.punishes(creature))
        .map(|(i, _)| i)
        .collect();

    debug!(
        ?blocker,
        attackers = ?attackers.as_slice(),
        "selected attackers"
    );
    attackers
}

/// Total damage the opponent's attacking creatures would deal unblocked.
///
/// Creatures with negative power deal no damage.
#[must_use]
pub fn incoming_damage(attacking_player: &PlayerView) -> i64 {
    attacking_player
        .attacking_creatures()
        .map(|c| c.power.max(0))
        .sum()
}

fn is_favorable_block(blocker: &CardView, attacker: &CardView) -> bool {
    blocker.power >= attacker.toughness && blocker.toughness > attacker.power
}

/// Indices of `defender`'s creatures that should block `attacking_player`'s
/// attackers.
#[must_use]
pub fn select_blockers(
    defender: &PlayerView,
    attacking_player: &PlayerView,
    config: &AgentConfig,
) -> IndexList {
    let attackers: Vec<&CardView> = attacking_player.attacking_creatures().collect();
    if attackers.is_empty() {
        return IndexList::new();
    }

    let incoming = incoming_damage(attacking_player);

    if incoming >= defender.life {
        let all: IndexList = defender.untapped_creatures().map(|(i, _)| i).collect();
        debug!(incoming, life = defender.life, blockers = ?all.as_slice(), "lethal incoming, blocking with everything");
        return all;
    }

    let chump_allowed = incoming.saturating_mul(2) > defender.life;

    let blockers: IndexList = defender
        .untapped_creatures()
        .filter(|(_, blocker)| {
            let trades_up = attackers.iter().any(|a| is_favorable_block(blocker, a));
            let chumps = chump_allowed && blocker.power <= config.chump_max_power;
            trades_up || chumps
        })
        .map(|(i, _)| i)
        .collect();

    debug!(
        incoming,
        life = defender.life,
        chump_allowed,
        blockers = ?blockers.as_slice(),
        "selected blockers"
    );
    blockers
}

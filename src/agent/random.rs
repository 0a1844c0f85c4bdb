//! Seeded random baseline agent.

use tracing::{debug, warn};

use super::Agent;
use crate::cards::{approx_cost, ManaSymbol};
use crate::core::{AgentRng, Command, GameView, IndexList, ManaPool, Response, TargetRef};
use crate::policy::PromptKind;

/// Chance of passing a main phase with cards in hand.
const PASS_PROBABILITY: f64 = 0.5;

/// Chance each untapped creature is declared as an attacker.
const ATTACK_PROBABILITY: f64 = 0.5;

/// Chance of forcing a single attacker when the random subset came up empty.
const FORCE_ATTACK_PROBABILITY: f64 = 0.3;

/// Chance of targeting an opposing creature rather than the opponent.
const CREATURE_TARGET_PROBABILITY: f64 = 0.5;

/// Baseline agent that plays random legal-looking commands.
///
/// It never blocks and ignores colors when paying: every cast is funded
/// with generic mana.
///
/// ```
/// use rust_ccg_agent::agent::{Agent, RandomAgent};
/// use rust_ccg_agent::core::{GameView, PlayerId, PlayerView, SimpleManaPool};
///
/// let game = GameView::new(PlayerView::new(PlayerId::new(0)), PlayerView::new(PlayerId::new(1)));
/// let mut agent = RandomAgent::new(42);
///
/// // Nothing in hand: always passes.
/// assert!(agent.decide_action(&game, &mut SimpleManaPool::new()).is_pass());
/// ```
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: AgentRng,
}

impl RandomAgent {
    /// Create an agent with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: AgentRng::new(seed),
        }
    }

    /// Create an agent that continues from an existing RNG.
    #[must_use]
    pub fn from_rng(rng: AgentRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn rng(&self) -> &AgentRng {
        &self.rng
    }

    fn random_attackers(&mut self, count: usize) -> IndexList {
        let mut chosen: IndexList = (0..count)
            .filter(|_| self.rng.gen_bool(ATTACK_PROBABILITY))
            .collect();

        if chosen.is_empty() && count > 0 && self.rng.gen_bool(FORCE_ATTACK_PROBABILITY) {
            chosen.extend(self.rng.choose_index(count));
        }
        chosen
    }

    fn random_index(&mut self, len: usize) -> Response {
        self.rng
            .choose_index(len)
            .map_or(Response::Empty, Response::Index)
    }
}

impl Agent for RandomAgent {
    fn decide_action(&mut self, game: &GameView, pool: &mut dyn ManaPool) -> Command {
        let hand = &game.me.hand;
        if hand.is_empty() || self.rng.gen_bool(PASS_PROBABILITY) {
            return Command::Pass;
        }

        let Some(index) = self.rng.choose_index(hand.len()) else {
            return Command::Pass;
        };

        let cost = approx_cost(&hand[index]);
        if cost > 0 {
            if let Err(err) = pool.add_mana(ManaSymbol::Generic, cost) {
                warn!(error = %err, cost, "mana pool rejected generic mana");
            }
        }

        debug!(index, card = %hand[index].name, "random play");
        Command::Play(index)
    }

    fn decide_response(&mut self, game: &GameView, prompt: &str) -> Response {
        match PromptKind::classify(prompt) {
            PromptKind::Attackers => {
                let count = game.me.creatures.len();
                Response::from_indices(self.random_attackers(count))
            }
            PromptKind::Blockers | PromptKind::Other => Response::Empty,
            PromptKind::Target => {
                let creatures = game.opponent.creatures.len();
                let target = if creatures > 0 && self.rng.gen_bool(CREATURE_TARGET_PROBABILITY) {
                    self.rng
                        .choose_index(creatures)
                        .map_or(TargetRef::OpponentPlayer, TargetRef::Opposing)
                } else {
                    TargetRef::OpponentPlayer
                };
                Response::Target(target)
            }
            PromptKind::Discard => self.random_index(game.me.hand.len()),
            PromptKind::WhichCreature => self.random_index(game.me.creatures.len()),
        }
    }
}

//! Game snapshots handed to the agent at each decision point.
//!
//! ## PlayerView
//!
//! What the agent can see of one player: hand, creatures on the
//! battlefield, land count, life, and land drops this turn.
//!
//! ## GameView
//!
//! One snapshot of the whole game from the agent's seat: both players plus
//! turn and phase. Zones use `im` persistent vectors, so a harness can keep
//! a history of snapshots with O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::Phase;
use super::player::PlayerId;
use crate::cards::CardView;

/// Snapshot codec failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Read-only view of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerView {
    /// Seat of this player.
    pub id: PlayerId,

    /// Cards in hand, index-addressable in engine order.
    pub hand: Vector<CardView>,

    /// Creatures on the battlefield, index-addressable in engine order.
    pub creatures: Vector<CardView>,

    /// Lands on the battlefield.
    pub lands: u32,

    /// Life total.
    pub life: i64,

    /// Lands played this turn.
    pub land_plays: u32,

    /// Lands allowed per turn.
    pub land_plays_allowed: u32,
}

impl PlayerView {
    /// Create a player with 20 life, one land drop per turn and empty zones.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            life: 20,
            land_plays_allowed: 1,
            ..Self::default()
        }
    }

    /// Set the hand (builder pattern).
    #[must_use]
    pub fn with_hand(mut self, cards: impl IntoIterator<Item = CardView>) -> Self {
        self.hand = cards.into_iter().collect();
        self
    }

    /// Set the battlefield creatures (builder pattern).
    #[must_use]
    pub fn with_creatures(mut self, cards: impl IntoIterator<Item = CardView>) -> Self {
        self.creatures = cards.into_iter().collect();
        self
    }

    /// Set the land count (builder pattern).
    #[must_use]
    pub fn with_lands(mut self, lands: u32) -> Self {
        self.lands = lands;
        self
    }

    /// Set the life total (builder pattern).
    #[must_use]
    pub fn with_life(mut self, life: i64) -> Self {
        self.life = life;
        self
    }

    /// Set land drops used this turn (builder pattern).
    #[must_use]
    pub fn with_land_plays(mut self, played: u32) -> Self {
        self.land_plays = played;
        self
    }

    /// Check if a land drop is still available this turn.
    #[must_use]
    pub fn can_play_land(&self) -> bool {
        self.land_plays < self.land_plays_allowed
    }

    /// Iterate over (index, creature) pairs for untapped creatures.
    pub fn untapped_creatures(&self) -> impl Iterator<Item = (usize, &CardView)> {
        self.creatures.iter().enumerate().filter(|(_, c)| !c.tapped)
    }

    /// Iterate over creatures declared as attackers.
    pub fn attacking_creatures(&self) -> impl Iterator<Item = &CardView> {
        self.creatures.iter().filter(|c| c.attacking)
    }
}

/// Snapshot of the game from the agent's seat.
///
/// ## Example
///
/// ```
/// use rust_ccg_agent::core::{GameView, Phase, PlayerId, PlayerView};
///
/// let me = PlayerView::new(PlayerId::new(0));
/// let opponent = PlayerView::new(PlayerId::new(1));
///
/// let game = GameView::new(me, opponent).with_phase(Phase::Combat);
/// assert!(game.is_my_turn());
/// assert!(!game.is_main_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Current phase.
    pub phase: Phase,

    /// The agent's own player.
    pub me: PlayerView,

    /// The opposing player.
    pub opponent: PlayerView,
}

impl GameView {
    /// Create a snapshot on the agent's own precombat main phase.
    #[must_use]
    pub fn new(me: PlayerView, opponent: PlayerView) -> Self {
        Self {
            active_player: me.id,
            phase: Phase::PrecombatMain,
            me,
            opponent,
        }
    }

    /// Set the phase (builder pattern).
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Set the active player (builder pattern).
    #[must_use]
    pub fn with_active_player(mut self, player: PlayerId) -> Self {
        self.active_player = player;
        self
    }

    /// Check if it is the agent's turn.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.active_player == self.me.id
    }

    /// Check if the current phase is a main phase.
    #[must_use]
    pub fn is_main_phase(&self) -> bool {
        self.phase.is_main()
    }

    /// Encode the snapshot in bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a snapshot from bincode format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

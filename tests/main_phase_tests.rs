//! Main-phase integration tests through the agent surface.

use rust_ccg_agent::agent::{Agent, HeuristicAgent};
use rust_ccg_agent::cards::{CardView, Color, ManaCost, ManaSymbol, RoleTable, SpellRole};
use rust_ccg_agent::core::{
    Command, GameView, ManaPool, ManaPoolError, Phase, PlayerId, PlayerView, SimpleManaPool,
};

fn me() -> PlayerView {
    PlayerView::new(PlayerId::new(0))
}

fn them() -> PlayerView {
    PlayerView::new(PlayerId::new(1))
}

fn elf(cost: i64, power: i64, toughness: i64) -> CardView {
    CardView::creature("Elf", power, toughness)
        .with_cost(ManaCost::generic(cost - 1).with(Color::Green, 1))
        .with_colors([Color::Green])
}

/// Pool that refuses every addition.
struct RejectingPool;

impl ManaPool for RejectingPool {
    fn add_mana(&mut self, symbol: ManaSymbol, _amount: u32) -> Result<(), ManaPoolError> {
        Err(ManaPoolError::Rejected {
            symbol,
            reason: "pool is locked".to_string(),
        })
    }
}

// =============================================================================
// Turn and Phase Gating
// =============================================================================

#[test]
fn test_both_main_phases_act() {
    for phase in [Phase::PrecombatMain, Phase::PostcombatMain] {
        let game = GameView::new(me().with_hand([CardView::land("Forest")]), them()).with_phase(phase);
        let mut agent = HeuristicAgent::new();
        assert_eq!(agent.decide_action(&game, &mut SimpleManaPool::new()), Command::Play(0));
    }
}

#[test]
fn test_other_phases_pass_silently() {
    for phase in [Phase::Beginning, Phase::Combat, Phase::Ending] {
        let game = GameView::new(me().with_hand([CardView::land("Forest")]), them()).with_phase(phase);
        let mut agent = HeuristicAgent::new();
        assert!(agent.decide_action(&game, &mut SimpleManaPool::new()).is_pass());
        assert_eq!(agent.metrics().main_phase_actions, 0);
    }
}

// =============================================================================
// A Short Game
// =============================================================================

#[test]
fn test_land_then_creature_then_pass() {
    let mut agent = HeuristicAgent::new();
    let mut pool = SimpleManaPool::new();

    // Turn one: land first even though the creature is affordable.
    let turn_one = GameView::new(
        me().with_hand([elf(1, 1, 1), CardView::land("Forest")]).with_lands(1),
        them(),
    );
    assert_eq!(agent.decide_action(&turn_one, &mut pool), Command::Play(1));
    assert_eq!(pool.total(), 0);

    // Same turn, land drop used: cast the creature.
    let after_land = GameView::new(
        me().with_hand([elf(1, 1, 1)]).with_lands(2).with_land_plays(1),
        them(),
    );
    assert_eq!(agent.decide_action(&after_land, &mut pool), Command::Play(0));
    assert_eq!(pool.amount(ManaSymbol::Green), 1);

    // Nothing left but an expensive creature.
    let stuck = GameView::new(
        me().with_hand([elf(5, 5, 5)]).with_lands(2).with_land_plays(1),
        them(),
    );
    assert!(agent.decide_action(&stuck, &mut pool).is_pass());

    let metrics = agent.metrics();
    assert_eq!(metrics.land_plays, 1);
    assert_eq!(metrics.creature_casts, 1);
    assert_eq!(metrics.approx_mana_spent, 1);
    assert_eq!(metrics.main_phase_actions, 3);
    assert_eq!(metrics.main_phase_passes, 1);
}

#[test]
fn test_creature_preferred_over_spell() {
    let hand = [
        CardView::spell("Giant Growth").with_cost(ManaCost::new().with(Color::Green, 1)),
        elf(2, 2, 2),
    ];
    let game = GameView::new(
        me().with_hand(hand)
            .with_lands(2)
            .with_land_plays(1)
            .with_creatures([CardView::creature("Bear", 2, 2)]),
        them(),
    );
    let mut agent = HeuristicAgent::new();
    assert_eq!(agent.decide_action(&game, &mut SimpleManaPool::new()), Command::Play(1));
}

#[test]
fn test_pool_failure_does_not_block_decision() {
    let game = GameView::new(
        me().with_hand([elf(2, 2, 2)]).with_lands(2).with_land_plays(1),
        them(),
    );
    let mut agent = HeuristicAgent::new();
    assert_eq!(agent.decide_action(&game, &mut RejectingPool), Command::Play(0));
    assert_eq!(agent.metrics().creature_casts, 1);
}

#[test]
fn test_capacity_limited_pool_swallows_overflow() {
    let game = GameView::new(
        me().with_hand([elf(4, 4, 4)]).with_lands(4).with_land_plays(1),
        them(),
    );
    let mut pool = SimpleManaPool::with_capacity(2);
    let mut agent = HeuristicAgent::new();
    assert_eq!(agent.decide_action(&game, &mut pool), Command::Play(0));
    assert_eq!(pool.total(), 0);
}

#[test]
fn test_unknown_spells_never_cast() {
    let game = GameView::new(
        me().with_hand([CardView::spell("Divination").with_cost(ManaCost::generic(3))])
            .with_lands(5)
            .with_land_plays(1),
        them().with_creatures([CardView::creature("Elf", 1, 1)]),
    );
    let mut agent = HeuristicAgent::new();
    assert!(agent.decide_action(&game, &mut SimpleManaPool::new()).is_pass());
}

#[test]
fn test_custom_role_table() {
    let roles = RoleTable::empty().with_entry("Shock", SpellRole::Burn);
    let shock = CardView::spell("Shock").with_cost(ManaCost::new().with(Color::Red, 1));
    let bolt = CardView::spell("Lightning Bolt").with_cost(ManaCost::new().with(Color::Red, 1));
    let game = GameView::new(
        me().with_hand([bolt, shock]).with_lands(1).with_land_plays(1),
        them().with_creatures([CardView::creature("Elf", 1, 1)]),
    );

    let mut agent = HeuristicAgent::new().with_roles(roles);
    assert_eq!(agent.decide_action(&game, &mut SimpleManaPool::new()), Command::Play(1));
}

#[test]
fn test_missing_cost_is_free() {
    let game = GameView::new(
        me().with_hand([CardView::creature("Token Maker", 1, 1)])
            .with_land_plays(1),
        them(),
    );
    let mut pool = SimpleManaPool::new();
    let mut agent = HeuristicAgent::new();
    assert_eq!(agent.decide_action(&game, &mut pool), Command::Play(0));
    assert_eq!(pool.total(), 0);
}

#[test]
fn test_snapshot_roundtrip_gives_same_decision() {
    let game = GameView::new(
        me().with_hand([elf(1, 1, 1), elf(3, 3, 2), elf(3, 2, 4)])
            .with_lands(3)
            .with_land_plays(1),
        them(),
    );
    let restored = GameView::from_bytes(&game.to_bytes().unwrap()).unwrap();

    let mut a = HeuristicAgent::new();
    let mut b = HeuristicAgent::new();
    assert_eq!(
        a.decide_action(&game, &mut SimpleManaPool::new()),
        b.decide_action(&restored, &mut SimpleManaPool::new())
    );
}

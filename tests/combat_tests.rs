//! Attack and block declarations through the agent's prompt surface.

use rust_ccg_agent::agent::{Agent, HeuristicAgent};
use rust_ccg_agent::cards::CardView;
use rust_ccg_agent::core::{AgentConfig, GameView, PlayerId, PlayerView, Response};

fn creatures(stats: &[(i64, i64)]) -> Vec<CardView> {
    stats
        .iter()
        .map(|(p, t)| CardView::creature("Creature", *p, *t))
        .collect()
}

fn attacking(stats: &[(i64, i64)]) -> Vec<CardView> {
    stats
        .iter()
        .map(|(p, t)| CardView::creature("Attacker", *p, *t).attacking())
        .collect()
}

fn blocks(game: &GameView) -> String {
    HeuristicAgent::new()
        .decide_response(game, "Declare blockers")
        .to_string()
}

fn attacks(game: &GameView) -> String {
    HeuristicAgent::new()
        .decide_response(game, "Declare attackers")
        .to_string()
}

// =============================================================================
// Attackers
// =============================================================================

#[test]
fn test_attack_with_everything_into_empty_board() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0)).with_creatures(creatures(&[(1, 1), (0, 4), (2, 2)])),
        PlayerView::new(PlayerId::new(1)),
    );
    assert_eq!(attacks(&game), "0 1 2");
}

#[test]
fn test_safe_attacker_exclusion() {
    // 1/1 dies to a 3/1 without killing it; 3/1 trades.
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0)).with_creatures(creatures(&[(1, 1), (3, 1)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(creatures(&[(3, 1)])),
    );
    assert_eq!(attacks(&game), "1");
}

#[test]
fn test_worst_case_blocker_combines_creatures() {
    // A 4/1 and a 1/4 combine into a 4/4: the 3/3 stays home.
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0)).with_creatures(creatures(&[(3, 3), (4, 5)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(creatures(&[(4, 1), (1, 4)])),
    );
    assert_eq!(attacks(&game), "1");
}

#[test]
fn test_all_unsafe_means_no_attack() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0)).with_creatures(creatures(&[(1, 1), (2, 2)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(creatures(&[(5, 5)])),
    );
    assert_eq!(attacks(&game), "");
}

#[test]
fn test_attack_prompt_variants() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0)).with_creatures(creatures(&[(2, 2)])),
        PlayerView::new(PlayerId::new(1)),
    );
    let mut agent = HeuristicAgent::new();
    for prompt in ["Declare attackers:", "Which creature do you want to attack with?"] {
        assert_eq!(agent.decide_response(&game, prompt).to_string(), "0");
    }
}

// =============================================================================
// Blockers
// =============================================================================

#[test]
fn test_must_block_on_lethal() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0))
            .with_life(5)
            .with_creatures(creatures(&[(0, 1), (1, 1), (0, 8)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(attacking(&[(6, 6)])),
    );
    assert_eq!(blocks(&game), "0 1 2");
}

#[test]
fn test_must_block_skips_tapped() {
    let mut defender = PlayerView::new(PlayerId::new(0))
        .with_life(3)
        .with_creatures(creatures(&[(1, 1)]));
    defender.creatures.push_back(CardView::creature("Tired", 2, 2).tapped());
    defender.creatures.push_back(CardView::creature("Fresh", 2, 2));

    let game = GameView::new(
        defender,
        PlayerView::new(PlayerId::new(1)).with_creatures(attacking(&[(2, 2), (2, 2)])),
    );
    assert_eq!(blocks(&game), "0 2");
}

#[test]
fn test_favorable_trade_block() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0))
            .with_life(20)
            .with_creatures(creatures(&[(3, 3)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(attacking(&[(2, 2)])),
    );
    assert_eq!(blocks(&game), "0");
}

#[test]
fn test_even_trade_is_not_favorable() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0))
            .with_life(20)
            .with_creatures(creatures(&[(2, 2)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(attacking(&[(2, 2)])),
    );
    assert_eq!(blocks(&game), "");
}

#[test]
fn test_chump_blocks_join_trades_in_index_order() {
    // 7 incoming against 12 life: chumping allowed, not lethal.
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0))
            .with_life(12)
            .with_creatures(creatures(&[(4, 4), (1, 1), (3, 3), (2, 5)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(attacking(&[(3, 3), (4, 4)])),
    );
    // 0 beats the 3/3, 1 and 3 chump, 2 only trades evenly.
    assert_eq!(blocks(&game), "0 1 3");
}

#[test]
fn test_configured_chump_power() {
    let game = GameView::new(
        PlayerView::new(PlayerId::new(0))
            .with_life(10)
            .with_creatures(creatures(&[(3, 1)])),
        PlayerView::new(PlayerId::new(1)).with_creatures(attacking(&[(6, 6)])),
    );
    assert_eq!(blocks(&game), "");

    let mut agent = HeuristicAgent::new().with_config(AgentConfig::default().with_chump_max_power(3));
    let response = agent.decide_response(&game, "Declare blockers");
    assert_eq!(response, Response::from_indices([0].into_iter().collect()));
}

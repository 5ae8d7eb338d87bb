//! Computer-only series run end to end from configuration.

use perfect_play::{GameConfig, PlayConfig, PlayerConfig, StrategyKind, run};
use perfect_nim::NimRule;
use perfect_tictactoe::Scoring;

fn computers(game: GameConfig, first: StrategyKind, second: StrategyKind) -> PlayConfig {
    PlayConfig::new(
        game,
        PlayerConfig::new("First", first),
        PlayerConfig::new("Second", second),
    )
    .with_seed(Some(3))
}

#[test]
fn test_optimal_tictactoe_series_is_all_ties() {
    let config = computers(
        GameConfig::TicTacToe {
            scoring: Scoring::Weighted,
        },
        StrategyKind::Optimal,
        StrategyKind::Optimal,
    )
    .with_games(3);

    let scoreboard = run(&config, false).unwrap();
    assert_eq!(*scoreboard.games(), 3);
    assert_eq!(*scoreboard.ties(), 3);
    assert_eq!(scoreboard.wins_for("First"), 0);
}

#[test]
fn test_optimal_nim_first_player_wins_from_winning_pot() {
    // 13 is not a multiple of four, so the first mover wins under the normal rule.
    let config = computers(
        GameConfig::Nim {
            pot: 13,
            rule: NimRule::Normal,
        },
        StrategyKind::Optimal,
        StrategyKind::Random,
    )
    .with_games(5);

    let scoreboard = run(&config, false).unwrap();
    assert_eq!(scoreboard.wins_for("First"), 5);
    assert_eq!(*scoreboard.ties(), 0);
}

#[test]
fn test_misere_nim_second_player_wins_from_losing_pot() {
    // Under misère the mover loses from pots of the form 4k + 1.
    let config = computers(
        GameConfig::Nim {
            pot: 9,
            rule: NimRule::Misere,
        },
        StrategyKind::Random,
        StrategyKind::Optimal,
    )
    .with_games(4);

    let scoreboard = run(&config, false).unwrap();
    assert_eq!(scoreboard.wins_for("Second"), 4);
}

#[test]
fn test_seeded_series_are_reproducible() {
    let config = computers(
        GameConfig::TicTacToe {
            scoring: Scoring::Unit,
        },
        StrategyKind::Random,
        StrategyKind::Random,
    )
    .with_games(6);

    let first = run(&config, false).unwrap();
    let second = run(&config, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_pot_is_immediately_over() {
    let config = computers(
        GameConfig::Nim {
            pot: 0,
            rule: NimRule::Normal,
        },
        StrategyKind::Optimal,
        StrategyKind::Optimal,
    );

    // Under the normal rule an empty pot credits the last mover, the second seat.
    let scoreboard = run(&config, false).unwrap();
    assert_eq!(scoreboard.wins_for("Second"), 1);
}

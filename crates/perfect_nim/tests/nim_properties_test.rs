//! Whole-state-space properties of Nim under the search engine.

use perfect_core::{
    GameState, InvalidMove, LegalMoves, OptimalStrategy, Orchestrator, Player, Roster, Search,
    SearchOptions, Seat, Strategy,
};
use perfect_nim::{NimRule, Pot, Take};

const RULES: [NimRule; 2] = [NimRule::Normal, NimRule::Misere];

/// Every pot reachable from `0..=24` tokens, with either seat to move.
fn all_pots(rule: NimRule) -> Vec<Pot> {
    let mut pots = Vec::new();
    for count in 0..=24 {
        let pot = Pot::new(count, rule);
        pots.push(pot);
        if let Some((_, next)) = Pot::new(count + 1, rule)
            .legal_moves()
            .into_iter()
            .find(|(take, _)| *take == Take(1))
        {
            pots.push(next);
        }
    }
    pots
}

#[test]
fn test_pot_of_four_loses_for_player_to_move() {
    let pot = Pot::new(4, NimRule::Normal);
    assert_eq!(Search::new(Seat::First).value(&pot), -1);

    // Every take leaves 1-3 tokens, and the opponent takes them all.
    for (_, next) in pot.legal_moves() {
        assert!((1..=3).contains(&next.count()));
        assert_eq!(Search::new(Seat::Second).value(&next), 1);
    }
}

#[test]
fn test_pot_of_five_is_won_by_taking_one() {
    let pot = Pot::new(5, NimRule::Normal);
    assert_eq!(Search::new(Seat::First).value(&pot), 1);
    assert_eq!(Search::new(Seat::First).best_moves(&pot), vec![Take(1)]);
}

#[test]
fn test_normal_losing_pots_are_multiples_of_four() {
    for count in 1..=24 {
        let pot = Pot::new(count, NimRule::Normal);
        let expected = if count % 4 == 0 { -1 } else { 1 };
        assert_eq!(Search::new(Seat::First).value(&pot), expected, "pot {count}");
    }
}

#[test]
fn test_misere_losing_pots_are_one_more_than_multiples_of_four() {
    for count in 1..=24 {
        let pot = Pot::new(count, NimRule::Misere);
        let expected = if count % 4 == 1 { -1 } else { 1 };
        assert_eq!(Search::new(Seat::First).value(&pot), expected, "pot {count}");
    }
    assert_eq!(
        Search::new(Seat::First).best_moves(&Pot::new(4, NimRule::Misere)),
        vec![Take(3)]
    );
}

#[test]
fn test_alpha_beta_matches_exhaustive_minimax() {
    for rule in RULES {
        for pot in all_pots(rule).into_iter().filter(|p| p.count() <= 16) {
            for perspective in [Seat::First, Seat::Second] {
                let reference =
                    Search::with_options(perspective, SearchOptions::exhaustive()).value(&pot);
                let pruned = Search::new(perspective).value(&pot);
                assert_eq!(pruned, reference, "{rule} {pot:?} from {perspective}");
            }
        }
    }
}

#[test]
fn test_cold_and_warm_cache_agree() {
    for rule in RULES {
        let mut warm = Search::new(Seat::First);
        for pot in all_pots(rule) {
            let cold = Search::new(Seat::First).value(&pot);
            assert_eq!(warm.value(&pot), cold, "{pot:?}");
        }
    }
}

#[test]
fn test_terminal_scores_are_zero_sum() {
    for rule in RULES {
        for pot in all_pots(rule).into_iter().filter(|p| p.is_terminal()) {
            assert_eq!(pot.score(Seat::First), -pot.score(Seat::Second));
            assert_ne!(pot.score(Seat::First), 0, "Nim never ties");
        }
    }
}

#[test]
fn test_legality_gate_agrees_with_apply() {
    for rule in RULES {
        for pot in all_pots(rule) {
            let legal: Vec<_> = pot.legal_moves().into_iter().map(|(t, _)| t).collect();
            for take in pot.potential_moves() {
                assert_eq!(legal.contains(&take), pot.apply(&take).is_ok(), "{pot:?} {take}");
            }
        }
    }
}

#[test]
fn test_nim_never_ties() {
    for rule in RULES {
        for pot in all_pots(rule) {
            assert!(!pot.is_tie());
            assert_eq!(pot.is_terminal(), pot.count() == 0);
        }
    }
}

/// Proposes an oversized take once, then a legal one.
struct Fumbler {
    fumbled: bool,
}

impl Strategy<Pot> for Fumbler {
    fn choose_move(&mut self, _pot: &Pot) -> Result<Take, InvalidMove> {
        if self.fumbled {
            Ok(Take(1))
        } else {
            self.fumbled = true;
            Ok(Take(3))
        }
    }
}

#[test]
fn test_illegal_take_is_retried_once() {
    let roster = Roster::new(
        Player::new("You", Fumbler { fumbled: false }),
        Player::new("I", OptimalStrategy::seeded(7)),
    );
    let mut orchestrator = Orchestrator::new(roster);

    let report = orchestrator.play(Pot::new(2, NimRule::Normal)).unwrap();

    // You take 1 after the rejected 3; I take the last token.
    assert_eq!(*report.rejected(), 1);
    assert_eq!(*report.turns(), 2);
    assert_eq!(report.outcome().winner_name(), Some("I"));
}

#[test]
fn test_optimal_first_player_wins_from_thirteen() {
    for seed in 0..5 {
        let roster = Roster::new(
            Player::new("A", OptimalStrategy::seeded(seed)),
            Player::new("B", OptimalStrategy::seeded(seed + 100)),
        );
        let mut orchestrator = Orchestrator::new(roster);
        let report = orchestrator.play(Pot::new(13, NimRule::Normal)).unwrap();
        assert_eq!(report.outcome().winner_name(), Some("A"));
    }
}

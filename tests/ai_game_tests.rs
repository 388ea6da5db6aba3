use sea_battle::{AiPlayer, Match, MatchStatus, Player, Side, FLEET_SIZE};
use std::collections::HashSet;

fn play(seed: u64) -> Match<AiPlayer, AiPlayer> {
    let mut p1 = AiPlayer::seeded("p1", seed);
    let mut p2 = AiPlayer::seeded("p2", seed.wrapping_add(1));
    p1.create_fleet().unwrap();
    p2.create_fleet().unwrap();
    assert_eq!(p1.fleet().afloat_count(), FLEET_SIZE);
    assert_eq!(p2.fleet().afloat_count(), FLEET_SIZE);

    let mut game = Match::new(p1, p2);
    game.run().unwrap();
    game
}

#[test]
fn test_ai_vs_ai_game() {
    let game = play(123);
    let winner = game.winner().expect("match finished");
    assert!(matches!(game.status(), MatchStatus::Finished { .. }));
    let (won, lost) = match winner {
        Side::First => (game.first(), game.second()),
        Side::Second => (game.second(), game.first()),
    };
    assert!(lost.is_fleet_destroyed());
    assert_eq!(lost.fleet().afloat_count(), 0);
    assert!(won.fleet().afloat_count() > 0);
    assert!(game.turns() <= 200);
}

#[test]
fn test_ai_never_fires_twice_at_a_cell() {
    for seed in 0..10u64 {
        let game = play(seed);
        for player in [game.first(), game.second()] {
            let mut seen = HashSet::new();
            for record in player.history().iter() {
                assert!(seen.insert(record.coord), "seed {}: {} fired twice", seed, record.coord);
                assert!(record.outcome.is_some(), "unresolved shot at {}", record.coord);
            }
        }
    }
}

#[test]
fn test_ai_game_is_reproducible() {
    let a = play(42).report();
    let b = play(42).report();
    assert_eq!(a, b);
    let shots = |g: &Match<AiPlayer, AiPlayer>| -> Vec<_> {
        g.first().history().iter().map(|r| r.coord).collect()
    };
    assert_eq!(shots(&play(7)), shots(&play(7)));
}

#[test]
fn test_report_counts_hits() {
    let game = play(99);
    let report = game.report();
    let loser = match game.winner().unwrap() {
        Side::First => &report.second,
        Side::Second => &report.first,
    };
    assert_eq!(loser.afloat, 0);
    let winner = match game.winner().unwrap() {
        Side::First => &report.first,
        Side::Second => &report.second,
    };
    // every vessel cell of the loser was struck exactly once
    assert_eq!(winner.hits, 20);
    assert_eq!(report.turns, report.first.shots + report.second.shots);
    assert_eq!(report.winner.as_deref(), Some(winner.name.as_str()));
}

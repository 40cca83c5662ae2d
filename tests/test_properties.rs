//! Property tests for the rating, probability and series invariants.

use postseason_core::{
    compute_rating, game_win_probability, home_game_template, simulate_series, RoundKind, Team,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn round_strategy() -> impl Strategy<Value = RoundKind> {
    prop_oneof![
        Just(RoundKind::Divisional),
        Just(RoundKind::Championship),
        Just(RoundKind::Final),
    ]
}

proptest! {
    #[test]
    fn rating_is_pure(
        wins in 0u32..200,
        losses in 0u32..200,
        rs in 0u32..1200,
        ra in 0u32..1200,
        obp in 0.0f64..1.0,
        slg in 0.0f64..1.0,
    ) {
        let a = compute_rating(wins, losses, rs, ra, obp, slg);
        let b = compute_rating(wins, losses, rs, ra, obp, slg);
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert!(a.is_finite());
    }

    #[test]
    fn no_games_means_zero_rating(rs in 0u32..1200, ra in 0u32..1200, obp in 0.0f64..1.0, slg in 0.0f64..1.0) {
        prop_assert_eq!(compute_rating(0, 0, rs, ra, obp, slg), 0.0);
    }

    #[test]
    fn win_probability_in_unit_interval(a in 0.0f64..2.0, b in 0.0f64..2.0, home in any::<bool>()) {
        let hfa = if home { 0.05 } else { 0.0 };
        let p = game_win_probability(a, b, hfa);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn template_double_inversion(round in round_strategy(), home_first in any::<bool>()) {
        let template = home_game_template(round, home_first);
        let twice: Vec<bool> = template.iter().map(|h| !h).map(|h| !h).collect();
        prop_assert_eq!(&twice, &template);
        prop_assert_eq!(template.len(), round.max_games());
    }

    #[test]
    fn series_length_bounded(
        seed in any::<u64>(),
        round in round_strategy(),
        wins_a in 40u32..90,
        wins_b in 40u32..90,
    ) {
        let a = Team::new("A", wins_a, 162 - wins_a, 700, 650, 0.33, 0.42, 1);
        let b = Team::new("B", wins_b, 162 - wins_b, 680, 660, 0.32, 0.41, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = simulate_series(&a, &b, round, &mut rng);

        let needed = round.wins_needed();
        prop_assert_eq!(result.winner_wins(), needed);
        prop_assert!(result.loser_wins() < needed);
        prop_assert!(result.games_played() >= needed as usize);
        prop_assert!(result.games_played() <= round.max_games());
    }
}

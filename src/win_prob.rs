use rand::Rng;
use statrs::distribution::{Binomial, DiscreteCDF};

use crate::constants::GAME_TRIALS;

/// Calculate the probability of a team beating its opponent in one trial.
///
/// # Arguments
/// * `team_rating` - Rating of the team of interest
/// * `opp_rating` - Rating of the opponent
/// * `home_advantage` - Bonus added to the team's rating (0.0 when away)
///
/// # Returns
/// Probability of the team winning, or exactly 0.5 when neither side
/// carries any strength
pub fn game_win_probability(team_rating: f64, opp_rating: f64, home_advantage: f64) -> f64 {
    let total = team_rating + home_advantage + opp_rating;
    if total == 0.0 {
        return 0.5;
    }
    (team_rating + home_advantage) / total
}

/// Decide one game by majority vote over repeated sampled trials.
///
/// Each trial draws a uniform value in [0, 1) against the single-trial win
/// probability. The first team wins the game only if it takes strictly more
/// trials than the second, so an even split goes to the second team.
///
/// # Arguments
/// * `team_rating` - Rating of the first team
/// * `opp_rating` - Rating of the second team
/// * `is_home` - Whether the first team is at home for this game
/// * `home_advantage` - Bonus applied when `is_home` is true
/// * `rng` - Random source
///
/// # Returns
/// true if the first team wins
pub fn decide_game<R: Rng + ?Sized>(
    team_rating: f64,
    opp_rating: f64,
    is_home: bool,
    home_advantage: f64,
    rng: &mut R,
) -> bool {
    let hfa = if is_home { home_advantage } else { 0.0 };
    let mut team_wins = 0u64;
    let mut opp_wins = 0u64;

    for _ in 0..GAME_TRIALS {
        let prob = game_win_probability(team_rating, opp_rating, hfa);
        if rng.gen::<f64>() < prob {
            team_wins += 1;
        } else {
            opp_wins += 1;
        }
    }

    team_wins > opp_wins
}

/// Exact probability that [`decide_game`] returns true.
///
/// The trial count won by the first team is Binomial(100, p), and the first
/// team needs a strict majority.
pub fn decide_game_prob(team_rating: f64, opp_rating: f64, is_home: bool, home_advantage: f64) -> f64 {
    let hfa = if is_home { home_advantage } else { 0.0 };
    let p = game_win_probability(team_rating, opp_rating, hfa);
    if p.is_nan() {
        return 0.0;
    }

    // Sampling compares against p directly, so anything outside [0, 1]
    // behaves like the nearest bound
    match Binomial::new(p.clamp(0.0, 1.0), GAME_TRIALS) {
        Ok(dist) => 1.0 - dist.cdf(GAME_TRIALS / 2),
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ratingless_is_coin_flip() {
        assert_eq!(game_win_probability(0.0, 0.0, 0.0), 0.5);
    }

    #[test]
    fn test_equal_ratings_50_50() {
        for r in [0.1, 0.45, 0.55, 1.0, 3.7] {
            assert_eq!(game_win_probability(r, r, 0.0), 0.5);
        }
    }

    #[test]
    fn test_home_advantage_helps() {
        let away = game_win_probability(0.5, 0.5, 0.0);
        let home = game_win_probability(0.5, 0.5, 0.05);
        assert!(home > away);
        assert!((home - 0.55 / 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let p1 = game_win_probability(0.55, 0.45, 0.0);
        let p2 = game_win_probability(0.45, 0.55, 0.0);
        assert!((p1 + p2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decide_game_certain_outcomes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(decide_game(1.0, 0.0, false, 0.05, &mut rng));
            assert!(!decide_game(0.0, 1.0, false, 0.05, &mut rng));
        }
    }

    #[test]
    fn test_decide_game_deterministic_under_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let run1: Vec<bool> = (0..50).map(|_| decide_game(0.5, 0.5, true, 0.05, &mut rng1)).collect();
        let run2: Vec<bool> = (0..50).map(|_| decide_game(0.5, 0.5, true, 0.05, &mut rng2)).collect();
        assert_eq!(run1, run2);
    }

    #[test]
    fn test_decide_game_even_split_goes_to_second_team() {
        // Draws alternate 0.0 and 0.5 against p = 0.5: exactly 50 trials each
        let mut rng = StepRng::new(0, 1 << 63);
        assert!(!decide_game(0.5, 0.5, false, 0.0, &mut rng));

        // All-zero draws hand every trial to the first team
        let mut rng = StepRng::new(0, 0);
        assert!(decide_game(0.5, 0.5, false, 0.0, &mut rng));
    }

    #[test]
    fn test_decide_game_prob_bounds() {
        assert!((decide_game_prob(1.0, 0.0, false, 0.05) - 1.0).abs() < 1e-12);
        assert!(decide_game_prob(0.0, 1.0, false, 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_even_split_favors_second_team() {
        // P(X > 50) for X ~ Binomial(100, 0.5) is just under one half
        let prob = decide_game_prob(0.5, 0.5, false, 0.05);
        assert!(prob < 0.5 && prob > 0.45, "got {}", prob);
    }

    #[test]
    fn test_decide_game_prob_matches_sampling() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 4000;
        let wins = (0..n)
            .filter(|_| decide_game(0.52, 0.48, false, 0.05, &mut rng))
            .count();
        let observed = wins as f64 / n as f64;
        let expected = decide_game_prob(0.52, 0.48, false, 0.05);
        assert!((observed - expected).abs() < 0.04, "observed {} expected {}", observed, expected);
    }
}

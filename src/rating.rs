use crate::constants::{
    ON_BASE_WEIGHT, PYTHAG_EXPONENT, PYTHAG_WEIGHT, RUN_DIFF_OFFSET, RUN_DIFF_SPAN,
    RUN_DIFF_WEIGHT, SLUGGING_WEIGHT, WIN_PCT_WEIGHT,
};

/// Compute a team's strength rating from its season statistics.
///
/// Blends Pythagorean run expectation, win percentage, normalized run
/// differential per game, on-base rate and slugging rate with fixed weights.
/// The result is typically in [0, 1] but is not clamped.
///
/// # Arguments
/// * `wins` / `losses` - Regular-season record
/// * `runs_scored` / `runs_allowed` - Season run totals
/// * `on_base` - On-base rate
/// * `slugging` - Slugging rate
///
/// # Returns
/// The rating, or 0.0 for a team that has played no games
pub fn compute_rating(
    wins: u32,
    losses: u32,
    runs_scored: u32,
    runs_allowed: u32,
    on_base: f64,
    slugging: f64,
) -> f64 {
    let games = u64::from(wins) + u64::from(losses);
    if games == 0 {
        return 0.0;
    }
    let games = games as f64;

    let win_pct = f64::from(wins) / games;
    let run_diff_per_game = (f64::from(runs_scored) - f64::from(runs_allowed)) / games;
    let run_diff_norm = (run_diff_per_game + RUN_DIFF_OFFSET) / RUN_DIFF_SPAN;
    let pythag = pythagorean_expectation(runs_scored, runs_allowed);

    PYTHAG_WEIGHT * pythag
        + WIN_PCT_WEIGHT * win_pct
        + RUN_DIFF_WEIGHT * run_diff_norm
        + ON_BASE_WEIGHT * on_base
        + SLUGGING_WEIGHT * slugging
}

/// Expected winning fraction from runs scored and allowed.
///
/// A team that neither scored nor allowed a run is treated as exactly average.
pub fn pythagorean_expectation(runs_scored: u32, runs_allowed: u32) -> f64 {
    if runs_scored == 0 && runs_allowed == 0 {
        return 0.5;
    }
    let scored = f64::from(runs_scored).powf(PYTHAG_EXPONENT);
    let allowed = f64::from(runs_allowed).powf(PYTHAG_EXPONENT);
    scored / (scored + allowed)
}

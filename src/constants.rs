/// Exponent of the Pythagorean run expectation
pub const PYTHAG_EXPONENT: f64 = 1.83;

/// Rating blend weights (sum to 1.0)
pub const PYTHAG_WEIGHT: f64 = 0.35;
pub const WIN_PCT_WEIGHT: f64 = 0.10;
pub const RUN_DIFF_WEIGHT: f64 = 0.30;
pub const ON_BASE_WEIGHT: f64 = 0.10;
pub const SLUGGING_WEIGHT: f64 = 0.15;

/// Run differential per game is shifted by this offset and divided by the span,
/// mapping roughly [-3, 3] runs per game onto [0, 1]
pub const RUN_DIFF_OFFSET: f64 = 3.0;
pub const RUN_DIFF_SPAN: f64 = 6.0;

/// Additive bonus applied to the home team's rating for one game
pub const HOME_FIELD_ADVANTAGE: f64 = 0.05;

/// Number of sampled trials behind every single game decision
pub const GAME_TRIALS: u64 = 100;

/// Teams per league bracket (seeds 1 through 4)
pub const SEEDS_PER_LEAGUE: usize = 4;

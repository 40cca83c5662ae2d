//! Postseason Core - best-of-N playoff bracket simulation.
//!
//! Teams are rated from season statistics, games are decided by a sampled
//! win-probability model with home-field advantage, and series feed a fixed
//! three-round bracket. Optional Python bindings are available behind the
//! `python` feature.

pub mod advance;
pub mod bracket;
pub mod constants;
pub mod error;
pub mod narration;
#[cfg(feature = "python")]
mod python;
pub mod rating;
pub mod roster;
pub mod round;
pub mod series;
pub mod team;
pub mod win_prob;

pub use advance::series_transform_prob;
pub use bracket::{simulate_postseason, League, Postseason, PostseasonResult};
pub use constants::{GAME_TRIALS, HOME_FIELD_ADVANTAGE, SEEDS_PER_LEAGUE};
pub use error::{PostseasonError, Result};
pub use rating::compute_rating;
pub use roster::{RosterConfig, TeamRecord};
pub use round::{home_game_template, RoundKind};
pub use series::{series_win_prob, simulate_series, GameEvent, SeriesResult, SeriesSimulation, Side};
pub use team::Team;
pub use win_prob::{decide_game, decide_game_prob, game_win_probability};

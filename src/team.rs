#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::rating::compute_rating;

/// A postseason team with its season statistics and seed.
///
/// The rating is derived from the statistics once, at construction, and the
/// record is read-only afterward.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    name: String,
    wins: u32,
    losses: u32,
    runs_scored: u32,
    runs_allowed: u32,
    on_base: f64,
    slugging: f64,
    /// Rank within the league bracket, 1 is best
    seed: u32,
    rating: f64,
}

impl Team {
    /// Create a new Team and compute its rating.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        wins: u32,
        losses: u32,
        runs_scored: u32,
        runs_allowed: u32,
        on_base: f64,
        slugging: f64,
        seed: u32,
    ) -> Self {
        Team {
            name: name.into(),
            wins,
            losses,
            runs_scored,
            runs_allowed,
            on_base,
            slugging,
            seed,
            rating: compute_rating(wins, losses, runs_scored, runs_allowed, on_base, slugging),
        }
    }

    /// Team name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Regular-season wins
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Regular-season losses
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Season runs scored
    pub fn runs_scored(&self) -> u32 {
        self.runs_scored
    }

    /// Season runs allowed
    pub fn runs_allowed(&self) -> u32 {
        self.runs_allowed
    }

    /// On-base rate
    pub fn on_base(&self) -> f64 {
        self.on_base
    }

    /// Slugging rate
    pub fn slugging(&self) -> f64 {
        self.slugging
    }

    /// Seed within the league bracket (1 is best)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Strength rating derived from the season statistics
    pub fn rating(&self) -> f64 {
        self.rating
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Seed {})", self.name, self.seed)
    }
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use tracing::info;

use crate::advance::{certain, series_transform_prob};
use crate::constants::SEEDS_PER_LEAGUE;
use crate::error::{PostseasonError, Result};
use crate::round::RoundKind;
use crate::series::{simulate_series, SeriesResult};
use crate::team::Team;

/// Four seeded teams from one league, indexed by seed.
#[derive(Clone, Debug, PartialEq)]
pub struct League {
    name: String,
    teams: [Team; SEEDS_PER_LEAGUE],
}

impl League {
    /// Build a league from exactly four teams carrying seeds 1 through 4, in
    /// any order.
    pub fn from_teams(name: impl Into<String>, teams: Vec<Team>) -> Result<Self> {
        let name = name.into();
        let mut slots: [Option<Team>; SEEDS_PER_LEAGUE + 1] = Default::default();

        if teams.len() != SEEDS_PER_LEAGUE {
            return Err(PostseasonError::InvalidConfiguration(format!(
                "{} needs {} teams, got {}",
                name,
                SEEDS_PER_LEAGUE,
                teams.len()
            )));
        }
        for team in teams {
            let seed = team.seed() as usize;
            if seed == 0 || seed > SEEDS_PER_LEAGUE {
                return Err(PostseasonError::InvalidConfiguration(format!(
                    "{} has seed {} outside 1..={}",
                    team.name(),
                    seed,
                    SEEDS_PER_LEAGUE
                )));
            }
            if slots[seed].is_some() {
                return Err(PostseasonError::InvalidConfiguration(format!(
                    "{} has duplicate seed {}",
                    name, seed
                )));
            }
            slots[seed] = Some(team);
        }

        Self::from_slots(name, slots)
    }

    /// Build a league from a seed-indexed array. Slot 0 is unused and must be
    /// empty; slot `n` holds the team seeded `n`.
    pub fn from_slots(name: impl Into<String>, slots: [Option<Team>; SEEDS_PER_LEAGUE + 1]) -> Result<Self> {
        let name = name.into();
        let [unused, s1, s2, s3, s4] = slots;
        if unused.is_some() {
            return Err(PostseasonError::InvalidConfiguration(format!(
                "{}: slot 0 is reserved and must be empty",
                name
            )));
        }

        let mut teams = Vec::with_capacity(SEEDS_PER_LEAGUE);
        for (index, slot) in [s1, s2, s3, s4].into_iter().enumerate() {
            let seed = index as u32 + 1;
            let team = slot.ok_or_else(|| {
                PostseasonError::InvalidConfiguration(format!("{}: no team for seed {}", name, seed))
            })?;
            if team.seed() != seed {
                return Err(PostseasonError::InvalidConfiguration(format!(
                    "{}: {} in slot {} has seed {}",
                    name,
                    team.name(),
                    seed,
                    team.seed()
                )));
            }
            teams.push(team);
        }

        let teams: [Team; SEEDS_PER_LEAGUE] = teams
            .try_into()
            .map_err(|_| PostseasonError::InvalidConfiguration(format!("{}: incomplete bracket", name)))?;
        Ok(League { name, teams })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Team holding the given seed (1-based)
    pub fn seed(&self, seed: usize) -> Option<&Team> {
        seed.checked_sub(1).and_then(|i| self.teams.get(i))
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Seed 1 vs 4 and seed 2 vs 3, better seed listed first
    fn divisional_pairs(&self) -> [(&Team, &Team); 2] {
        [(&self.teams[0], &self.teams[3]), (&self.teams[1], &self.teams[2])]
    }
}

/// Every series of one bracket run, in play order.
#[derive(Clone, Debug, PartialEq)]
pub struct PostseasonResult {
    /// First league's two series, then the second league's
    pub divisional: Vec<SeriesResult>,
    /// First league, then second league
    pub championship: Vec<SeriesResult>,
    pub final_series: SeriesResult,
}

impl PostseasonResult {
    pub fn champion(&self) -> &Team {
        self.final_series.winner()
    }

    pub fn series(&self) -> impl Iterator<Item = &SeriesResult> {
        self.divisional
            .iter()
            .chain(self.championship.iter())
            .chain(std::iter::once(&self.final_series))
    }
}

/// Two league brackets feeding a single final.
#[derive(Clone, Debug, PartialEq)]
pub struct Postseason {
    first: League,
    second: League,
}

impl Postseason {
    pub fn new(first: League, second: League) -> Self {
        Postseason { first, second }
    }

    pub fn leagues(&self) -> [&League; 2] {
        [&self.first, &self.second]
    }

    /// All eight teams in the field
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.first.teams().iter().chain(self.second.teams())
    }

    /// Play the full bracket with the given random source.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> PostseasonResult {
        let mut divisional = Vec::with_capacity(4);
        for league in [&self.first, &self.second] {
            for (higher, lower) in league.divisional_pairs() {
                divisional.push(simulate_series(higher, lower, RoundKind::Divisional, &mut *rng));
            }
        }

        let championship: Vec<SeriesResult> = divisional
            .chunks(2)
            .map(|pair| simulate_series(pair[0].winner(), pair[1].winner(), RoundKind::Championship, &mut *rng))
            .collect();

        let final_series = simulate_series(
            championship[0].winner(),
            championship[1].winner(),
            RoundKind::Final,
            rng,
        );
        info!(champion = final_series.winner().name(), "postseason complete");

        PostseasonResult {
            divisional,
            championship,
            final_series,
        }
    }

    /// Play the bracket once from a seed, or from entropy when none is given.
    pub fn simulate(&self, seed: Option<u64>) -> PostseasonResult {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        self.run(&mut rng)
    }

    /// Run multiple Monte Carlo brackets.
    ///
    /// Returns how many titles each team won. Every team in the field is
    /// present, including those that never won. Results are keyed by name, so
    /// the field must not repeat a name.
    pub fn run_simulations(&self, n_simulations: usize, seed: Option<u64>) -> Result<HashMap<String, usize>> {
        self.require_unique_names()?;
        let mut titles: HashMap<String, usize> = self.teams().map(|t| (t.name().to_string(), 0)).collect();
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        for _ in 0..n_simulations {
            let mut sim_rng = ChaCha8Rng::seed_from_u64(rng.gen::<u64>());
            let result = self.run(&mut sim_rng);
            *titles.entry(result.champion().name().to_string()).or_insert(0) += 1;
        }

        Ok(titles)
    }

    /// Exact probability of each team winning the title, keyed by name.
    pub fn championship_odds(&self) -> Result<HashMap<String, f64>> {
        self.require_unique_names()?;
        let teams: HashMap<String, Team> = self.teams().map(|t| (t.name().to_string(), t.clone())).collect();

        let mut pennants = Vec::with_capacity(2);
        for league in [&self.first, &self.second] {
            let [(a1, b1), (a2, b2)] = league.divisional_pairs();
            let ds1 = series_transform_prob(&certain(a1), &certain(b1), &teams, RoundKind::Divisional)?;
            let ds2 = series_transform_prob(&certain(a2), &certain(b2), &teams, RoundKind::Divisional)?;
            pennants.push(series_transform_prob(&ds1, &ds2, &teams, RoundKind::Championship)?);
        }

        series_transform_prob(&pennants[0], &pennants[1], &teams, RoundKind::Final)
    }

    fn require_unique_names(&self) -> Result<()> {
        let mut names = HashSet::new();
        for team in self.teams() {
            if !names.insert(team.name()) {
                return Err(PostseasonError::InvalidConfiguration(format!(
                    "team name {:?} appears more than once",
                    team.name()
                )));
            }
        }
        Ok(())
    }
}

/// Simulate a full postseason and return the champion.
///
/// Divisional series pair seeds 1-4 and 2-3 within each league, the
/// divisional winners meet in each league's championship series, and the two
/// league champions meet in the final.
pub fn simulate_postseason<R: Rng + ?Sized>(first: &League, second: &League, rng: &mut R) -> Team {
    let postseason = Postseason::new(first.clone(), second.clone());
    postseason.run(rng).final_series.into_winner()
}

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::bracket::{League, Postseason};
use crate::error::PostseasonError;
use crate::team::Team;

impl From<PostseasonError> for PyErr {
    fn from(err: PostseasonError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymethods]
impl Team {
    #[new]
    #[pyo3(signature = (name, wins, losses, runs_scored, runs_allowed, on_base, slugging, seed))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        name: String,
        wins: u32,
        losses: u32,
        runs_scored: u32,
        runs_allowed: u32,
        on_base: f64,
        slugging: f64,
        seed: u32,
    ) -> Self {
        Team::new(name, wins, losses, runs_scored, runs_allowed, on_base, slugging, seed)
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Team({:?}, seed={}, rating={:.4})", self.name(), self.seed(), self.rating())
    }
}

fn make_postseason(american: Vec<Team>, national: Vec<Team>) -> PyResult<Postseason> {
    let american = League::from_teams("American League", american)?;
    let national = League::from_teams("National League", national)?;
    Ok(Postseason::new(american, national))
}

#[pyfunction]
fn compute_rating(
    wins: u32,
    losses: u32,
    runs_scored: u32,
    runs_allowed: u32,
    on_base: f64,
    slugging: f64,
) -> f64 {
    crate::rating::compute_rating(wins, losses, runs_scored, runs_allowed, on_base, slugging)
}

#[pyfunction]
#[pyo3(signature = (team_rating, opp_rating, home_advantage = 0.0))]
fn game_win_probability(team_rating: f64, opp_rating: f64, home_advantage: f64) -> f64 {
    crate::win_prob::game_win_probability(team_rating, opp_rating, home_advantage)
}

/// Simulate one bracket and return the champion.
#[pyfunction]
#[pyo3(signature = (american, national, seed = None))]
fn simulate_postseason(american: Vec<Team>, national: Vec<Team>, seed: Option<u64>) -> PyResult<Team> {
    let postseason = make_postseason(american, national)?;
    Ok(postseason.simulate(seed).final_series.into_winner())
}

/// Exact title probability for every team.
#[pyfunction]
fn championship_odds(american: Vec<Team>, national: Vec<Team>) -> PyResult<HashMap<String, f64>> {
    Ok(make_postseason(american, national)?.championship_odds()?)
}

#[pymodule]
fn postseason_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Team>()?;

    m.add_function(wrap_pyfunction!(compute_rating, m)?)?;
    m.add_function(wrap_pyfunction!(game_win_probability, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_postseason, m)?)?;
    m.add_function(wrap_pyfunction!(championship_odds, m)?)?;

    m.add("HOME_FIELD_ADVANTAGE", crate::constants::HOME_FIELD_ADVANTAGE)?;

    Ok(())
}

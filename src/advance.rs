use std::collections::HashMap;

use crate::error::{PostseasonError, Result};
use crate::round::RoundKind;
use crate::series::series_win_prob;
use crate::team::Team;

/// Probabilistic series transformation.
///
/// Given two "child" outcome distributions (maps of team names to the
/// probability of arriving at this series), computes the "parent"
/// distribution of who wins it.
///
/// # Arguments
/// * `child1` - Distribution over the first-listed side
/// * `child2` - Distribution over the second-listed side
/// * `teams` - Map of team names to Team records
/// * `round` - Round the series belongs to
///
/// # Returns
/// Map of team names to their probability of advancing
pub fn series_transform_prob(
    child1: &HashMap<String, f64>,
    child2: &HashMap<String, f64>,
    teams: &HashMap<String, Team>,
    round: RoundKind,
) -> Result<HashMap<String, f64>> {
    let mut parent: HashMap<String, f64> = HashMap::new();

    for (name1, &reach1) in child1.iter() {
        let team1 = lookup(teams, name1)?;
        for (name2, &reach2) in child2.iter() {
            let team2 = lookup(teams, name2)?;
            let matchup_prob = reach1 * reach2;
            let p1 = series_win_prob(team1, team2, round);

            *parent.entry(name1.clone()).or_insert(0.0) += matchup_prob * p1;
            *parent.entry(name2.clone()).or_insert(0.0) += matchup_prob * (1.0 - p1);
        }
    }

    Ok(parent)
}

/// Distribution with a single team certain to be present
pub fn certain(team: &Team) -> HashMap<String, f64> {
    let mut dist = HashMap::new();
    dist.insert(team.name().to_string(), 1.0);
    dist
}

fn lookup<'a>(teams: &'a HashMap<String, Team>, name: &str) -> Result<&'a Team> {
    teams
        .get(name)
        .ok_or_else(|| PostseasonError::InvalidConfiguration(format!("unknown team: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_teams() -> HashMap<String, Team> {
        [
            Team::new("A", 70, 43, 670, 534, 0.374, 0.462, 1),
            Team::new("B", 67, 46, 633, 498, 0.366, 0.444, 2),
            Team::new("C", 52, 62, 613, 697, 0.353, 0.436, 3),
            Team::new("D", 66, 47, 679, 562, 0.351, 0.484, 4),
        ]
        .into_iter()
        .map(|t| (t.name().to_string(), t))
        .collect()
    }

    #[test]
    fn test_series_transform_prob_basic() {
        let teams = make_teams();
        let parent =
            series_transform_prob(&certain(&teams["A"]), &certain(&teams["D"]), &teams, RoundKind::Divisional)
                .unwrap();

        assert!(parent.contains_key("A"));
        assert!(parent.contains_key("D"));
        let sum: f64 = parent.values().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_series_transform_prob_uncertain() {
        let teams = make_teams();

        // Child1: A (60%) or C (40%)
        let mut child1 = HashMap::new();
        child1.insert("A".to_string(), 0.6);
        child1.insert("C".to_string(), 0.4);

        let parent = series_transform_prob(&child1, &certain(&teams["B"]), &teams, RoundKind::Championship).unwrap();

        assert_eq!(parent.len(), 3);
        let sum: f64 = parent.values().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_team_rejected() {
        let teams = make_teams();
        let mut ghost = HashMap::new();
        ghost.insert("Ghost".to_string(), 1.0);
        let err = series_transform_prob(&ghost, &certain(&teams["A"]), &teams, RoundKind::Final).unwrap_err();
        assert!(matches!(err, PostseasonError::InvalidConfiguration(_)));
    }
}

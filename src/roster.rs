//! Roster configuration.
//!
//! Team statistics are supplied as JSON and turned into the two league
//! brackets the simulation runs on. A built-in roster reproduces the 1994
//! playoff field.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::bracket::{League, Postseason};
use crate::error::{PostseasonError, Result};
use crate::team::Team;

/// Season statistics for one team, as read from a roster file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub on_base: f64,
    pub slugging: f64,
    pub seed: u32,
}

impl TeamRecord {
    /// Validate the record and build a rated Team.
    pub fn into_team(self) -> Result<Team> {
        if self.name.trim().is_empty() {
            return Err(PostseasonError::InvalidConfiguration("team name is empty".to_string()));
        }
        for (label, value) in [("on_base", self.on_base), ("slugging", self.slugging)] {
            if !value.is_finite() || value < 0.0 {
                return Err(PostseasonError::InvalidConfiguration(format!(
                    "{}: {} must be a non-negative number, got {}",
                    self.name, label, value
                )));
            }
        }

        Ok(Team::new(
            self.name,
            self.wins,
            self.losses,
            self.runs_scored,
            self.runs_allowed,
            self.on_base,
            self.slugging,
            self.seed,
        ))
    }
}

/// Both league brackets for one postseason.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub american: Vec<TeamRecord>,
    pub national: Vec<TeamRecord>,
}

impl RosterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build both leagues, placing every record by its seed.
    pub fn into_leagues(self) -> Result<(League, League)> {
        let american = League::from_teams("American League", into_teams(self.american)?)?;
        let national = League::from_teams("National League", into_teams(self.national)?)?;
        Ok((american, national))
    }

    pub fn into_postseason(self) -> Result<Postseason> {
        let (american, national) = self.into_leagues()?;
        Ok(Postseason::new(american, national))
    }

    /// The 1994 division leaders and wild cards.
    pub fn mlb_1994() -> Self {
        RosterConfig {
            american: vec![
                record("New York Yankees", 70, 43, 670, 534, 0.374, 0.462, 1),
                record("Chicago White Sox", 67, 46, 633, 498, 0.366, 0.444, 2),
                record("Texas Rangers", 52, 62, 613, 697, 0.353, 0.436, 3),
                record("Cleveland Indians", 66, 47, 679, 562, 0.351, 0.484, 4),
            ],
            national: vec![
                record("Montreal Expos", 74, 40, 585, 454, 0.343, 0.435, 1),
                record("Cincinnati Reds", 66, 48, 609, 490, 0.350, 0.449, 2),
                record("Los Angeles Dodgers", 58, 56, 532, 509, 0.333, 0.414, 3),
                record("Atlanta Braves", 68, 46, 542, 448, 0.333, 0.434, 4),
            ],
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::mlb_1994()
    }
}

fn into_teams(records: Vec<TeamRecord>) -> Result<Vec<Team>> {
    records.into_iter().map(TeamRecord::into_team).collect()
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    wins: u32,
    losses: u32,
    runs_scored: u32,
    runs_allowed: u32,
    on_base: f64,
    slugging: f64,
    seed: u32,
) -> TeamRecord {
    TeamRecord {
        name: name.to_string(),
        wins,
        losses,
        runs_scored,
        runs_allowed,
        on_base,
        slugging,
        seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_builds() {
        let postseason = RosterConfig::mlb_1994().into_postseason().unwrap();
        let [al, nl] = postseason.leagues();
        assert_eq!(al.seed(1).unwrap().name(), "New York Yankees");
        assert_eq!(nl.seed(4).unwrap().name(), "Atlanta Braves");
    }

    #[test]
    fn test_json_round_trip() {
        let roster = RosterConfig::mlb_1994();
        let json = roster.to_json_pretty().unwrap();
        assert_eq!(RosterConfig::from_json_str(&json).unwrap(), roster);
    }

    #[test]
    fn test_parse_unordered_roster() {
        let json = r#"{
            "american": [
                {"name": "A4", "wins": 60, "losses": 50, "runs_scored": 500, "runs_allowed": 480, "on_base": 0.33, "slugging": 0.42, "seed": 4},
                {"name": "A1", "wins": 70, "losses": 40, "runs_scored": 600, "runs_allowed": 450, "on_base": 0.35, "slugging": 0.45, "seed": 1},
                {"name": "A3", "wins": 62, "losses": 48, "runs_scored": 520, "runs_allowed": 490, "on_base": 0.33, "slugging": 0.42, "seed": 3},
                {"name": "A2", "wins": 65, "losses": 45, "runs_scored": 550, "runs_allowed": 470, "on_base": 0.34, "slugging": 0.43, "seed": 2}
            ],
            "national": [
                {"name": "N1", "wins": 70, "losses": 40, "runs_scored": 600, "runs_allowed": 450, "on_base": 0.35, "slugging": 0.45, "seed": 1},
                {"name": "N2", "wins": 65, "losses": 45, "runs_scored": 550, "runs_allowed": 470, "on_base": 0.34, "slugging": 0.43, "seed": 2},
                {"name": "N3", "wins": 62, "losses": 48, "runs_scored": 520, "runs_allowed": 490, "on_base": 0.33, "slugging": 0.42, "seed": 3},
                {"name": "N4", "wins": 60, "losses": 50, "runs_scored": 500, "runs_allowed": 480, "on_base": 0.33, "slugging": 0.42, "seed": 4}
            ]
        }"#;
        let (al, nl) = RosterConfig::from_json_str(json).unwrap().into_leagues().unwrap();
        assert_eq!(al.seed(1).unwrap().name(), "A1");
        assert_eq!(al.seed(4).unwrap().name(), "A4");
        assert_eq!(nl.seed(2).unwrap().name(), "N2");
    }

    #[test]
    fn test_malformed_json() {
        let err = RosterConfig::from_json_str("{\"american\": []").unwrap_err();
        assert!(matches!(err, PostseasonError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RosterConfig::from_path("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, PostseasonError::Io(_)));
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let mut roster = RosterConfig::mlb_1994();
        roster.national[0].slugging = f64::NAN;
        assert!(matches!(
            roster.into_leagues(),
            Err(PostseasonError::InvalidConfiguration(_))
        ));
    }
}

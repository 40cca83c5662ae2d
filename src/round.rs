use std::fmt;
use std::str::FromStr;

use crate::error::PostseasonError;

/// 2-2-1 home pattern for a best-of-5 (true = first-listed team at home)
const DIVISIONAL_TEMPLATE: [bool; 5] = [true, true, false, false, true];

/// 2-3-2 home pattern for a best-of-7
const SEVEN_GAME_TEMPLATE: [bool; 7] = [true, true, false, false, false, true, true];

/// One of the three fixed postseason rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundKind {
    Divisional,
    Championship,
    Final,
}

impl RoundKind {
    /// Rounds in the order they are played
    pub const ALL: [RoundKind; 3] = [RoundKind::Divisional, RoundKind::Championship, RoundKind::Final];

    /// Series wins required to advance
    pub fn wins_needed(self) -> u32 {
        match self {
            RoundKind::Divisional => 3,
            RoundKind::Championship | RoundKind::Final => 4,
        }
    }

    /// Longest possible series length
    pub fn max_games(self) -> usize {
        self.template().len()
    }

    /// Home pattern from the point of view of the team holding home field
    pub fn template(self) -> &'static [bool] {
        match self {
            RoundKind::Divisional => &DIVISIONAL_TEMPLATE,
            RoundKind::Championship | RoundKind::Final => &SEVEN_GAME_TEMPLATE,
        }
    }

    /// Human-readable series title
    pub fn label(self) -> &'static str {
        match self {
            RoundKind::Divisional => "Division Series",
            RoundKind::Championship => "League Championship Series",
            RoundKind::Final => "World Series",
        }
    }
}

/// Home assignment for every game of a round.
///
/// Element `i` is true when the first-listed team hosts game `i + 1`. When
/// the second team holds home field the template is inverted.
pub fn home_game_template(round: RoundKind, home_is_first_team: bool) -> Vec<bool> {
    round
        .template()
        .iter()
        .map(|&home| if home_is_first_team { home } else { !home })
        .collect()
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundKind::Divisional => "divisional",
            RoundKind::Championship => "championship",
            RoundKind::Final => "final",
        };
        f.write_str(name)
    }
}

impl FromStr for RoundKind {
    type Err = PostseasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "divisional" | "division" | "ds" => Ok(RoundKind::Divisional),
            "championship" | "lcs" => Ok(RoundKind::Championship),
            "final" | "world_series" | "ws" => Ok(RoundKind::Final),
            other => Err(PostseasonError::InvalidConfiguration(format!(
                "unknown round kind: {:?}",
                other
            ))),
        }
    }
}

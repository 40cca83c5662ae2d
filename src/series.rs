use rand::Rng;
use tracing::{debug, info};

use crate::constants::HOME_FIELD_ADVANTAGE;
use crate::round::{home_game_template, RoundKind};
use crate::team::Team;
use crate::win_prob::{decide_game, decide_game_prob};

/// One of the two teams in a series, by listing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Outcome of a single series game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameEvent {
    /// 1-based game number within the series
    pub game_number: usize,
    pub home: Side,
    pub winner: Side,
    /// Running series tallies after this game
    pub first_wins: u32,
    pub second_wins: u32,
}

/// Which team holds home field for a series.
///
/// In the final the better regular-season record hosts, with the better seed
/// breaking a tie. Earlier rounds always go to the better seed.
pub fn home_field_holder(first: &Team, second: &Team, round: RoundKind) -> Side {
    let first_hosts = match round {
        RoundKind::Final if first.wins() != second.wins() => first.wins() > second.wins(),
        _ => first.seed() < second.seed(),
    };
    if first_hosts {
        Side::First
    } else {
        Side::Second
    }
}

/// A best-of-N series played lazily, one game per iteration.
///
/// Yields a [`GameEvent`] for each game until one side reaches the round's
/// win threshold. The sequence is finite and cannot be restarted.
pub struct SeriesSimulation<'a, R: Rng + ?Sized> {
    first: &'a Team,
    second: &'a Team,
    round: RoundKind,
    home_field: Side,
    home_games: Vec<bool>,
    next_game: usize,
    first_wins: u32,
    second_wins: u32,
    games: Vec<GameEvent>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> SeriesSimulation<'a, R> {
    pub fn new(first: &'a Team, second: &'a Team, round: RoundKind, rng: &'a mut R) -> Self {
        let home_field = home_field_holder(first, second, round);
        SeriesSimulation {
            first,
            second,
            round,
            home_field,
            home_games: home_game_template(round, home_field == Side::First),
            next_game: 0,
            first_wins: 0,
            second_wins: 0,
            games: Vec::with_capacity(round.max_games()),
            rng,
        }
    }

    pub fn team(&self, side: Side) -> &'a Team {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    pub fn home_field(&self) -> Side {
        self.home_field
    }

    pub fn round(&self) -> RoundKind {
        self.round
    }

    /// Whether either side has reached the win threshold
    pub fn is_decided(&self) -> bool {
        let needed = self.round.wins_needed();
        self.first_wins >= needed || self.second_wins >= needed
    }

    /// Play out any remaining games and return the completed series.
    pub fn finish(mut self) -> SeriesResult {
        while self.next().is_some() {}

        let result = SeriesResult {
            round: self.round,
            first: self.first.clone(),
            second: self.second.clone(),
            home_field: self.home_field,
            first_wins: self.first_wins,
            second_wins: self.second_wins,
            games: self.games,
        };
        info!(
            round = %result.round,
            winner = result.winner().name(),
            loser = result.loser().name(),
            score = %format!("{}-{}", result.winner_wins(), result.loser_wins()),
            "series decided"
        );
        result
    }
}

impl<R: Rng + ?Sized> Iterator for SeriesSimulation<'_, R> {
    type Item = GameEvent;

    fn next(&mut self) -> Option<GameEvent> {
        if self.is_decided() {
            return None;
        }
        let first_is_home = *self.home_games.get(self.next_game)?;

        let first_won = decide_game(
            self.first.rating(),
            self.second.rating(),
            first_is_home,
            HOME_FIELD_ADVANTAGE,
            &mut *self.rng,
        );
        let winner = if first_won {
            self.first_wins += 1;
            Side::First
        } else {
            self.second_wins += 1;
            Side::Second
        };
        self.next_game += 1;

        let event = GameEvent {
            game_number: self.next_game,
            home: if first_is_home { Side::First } else { Side::Second },
            winner,
            first_wins: self.first_wins,
            second_wins: self.second_wins,
        };
        debug!(
            round = %self.round,
            game = event.game_number,
            home = self.team(event.home).name(),
            winner = self.team(winner).name(),
            "game decided"
        );
        self.games.push(event);
        Some(event)
    }
}

/// A completed series with its per-game history.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesResult {
    pub round: RoundKind,
    pub first: Team,
    pub second: Team,
    pub home_field: Side,
    pub first_wins: u32,
    pub second_wins: u32,
    pub games: Vec<GameEvent>,
}

impl SeriesResult {
    /// Side that took more games; with fixed templates this is always the
    /// side that reached the win threshold
    pub fn winner_side(&self) -> Side {
        if self.first_wins > self.second_wins {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn winner(&self) -> &Team {
        self.team(self.winner_side())
    }

    pub fn loser(&self) -> &Team {
        self.team(self.winner_side().opposite())
    }

    pub fn winner_wins(&self) -> u32 {
        self.first_wins.max(self.second_wins)
    }

    pub fn loser_wins(&self) -> u32 {
        self.first_wins.min(self.second_wins)
    }

    pub fn games_played(&self) -> usize {
        self.games.len()
    }

    pub fn into_winner(self) -> Team {
        match self.winner_side() {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

/// Simulate a full series and return its result.
///
/// # Arguments
/// * `first` - First-listed team
/// * `second` - Second-listed team
/// * `round` - Round being played, which fixes length and home pattern
/// * `rng` - Random source
pub fn simulate_series<R: Rng + ?Sized>(first: &Team, second: &Team, round: RoundKind, rng: &mut R) -> SeriesResult {
    SeriesSimulation::new(first, second, round, rng).finish()
}

/// Exact probability that `first` wins the series.
///
/// Walks the home template game by game, carrying the probability mass of
/// every undecided (first_wins, second_wins) state.
pub fn series_win_prob(first: &Team, second: &Team, round: RoundKind) -> f64 {
    let needed = round.wins_needed() as usize;
    let home_field = home_field_holder(first, second, round);
    let home_games = home_game_template(round, home_field == Side::First);

    // states[a][b] = probability the series stands a-b and is still live
    let mut states = vec![vec![0.0; needed]; needed];
    states[0][0] = 1.0;
    let mut first_takes = 0.0;

    for (game, &first_is_home) in home_games.iter().enumerate() {
        let p = decide_game_prob(first.rating(), second.rating(), first_is_home, HOME_FIELD_ADVANTAGE);
        let mut next = vec![vec![0.0; needed]; needed];

        for a in 0..needed {
            for b in 0..needed {
                let mass = states[a][b];
                if mass == 0.0 || a + b != game {
                    continue;
                }
                if a + 1 == needed {
                    first_takes += mass * p;
                } else {
                    next[a + 1][b] += mass * p;
                }
                if b + 1 < needed {
                    next[a][b + 1] += mass * (1.0 - p);
                }
            }
        }
        states = next;
    }

    first_takes
}

//! Human-readable play-by-play for completed series.
//!
//! Narration only reads finished results, so a failing writer cannot affect
//! the simulation.

use std::io::{self, Write};

use crate::bracket::PostseasonResult;
use crate::series::SeriesResult;

/// Write the header, per-game lines and summary for one series.
pub fn write_series<W: Write>(out: &mut W, series: &SeriesResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "🎯 {}: {} vs {}",
        series.round.label().to_uppercase(),
        series.first,
        series.second
    )?;
    writeln!(out, "🏟 Home field advantage: {}", series.team(series.home_field).name())?;

    for game in &series.games {
        writeln!(
            out,
            "Game {} (Home: {}): {} win.",
            game.game_number,
            series.team(game.home).name(),
            series.team(game.winner).name()
        )?;
    }

    writeln!(
        out,
        "🏆 {} win the {} {}-{}",
        series.winner().name(),
        series.round.label(),
        series.winner_wins(),
        series.loser_wins()
    )
}

/// Write the whole bracket in play order, ending with the champion.
pub fn write_postseason<W: Write>(out: &mut W, result: &PostseasonResult) -> io::Result<()> {
    writeln!(out, "⚾ SIMULATING POSTSEASON BRACKET")?;
    for series in result.series() {
        write_series(out, series)?;
    }
    writeln!(out)?;
    writeln!(out, "🏁 CHAMPION: {} 🏆", result.champion().name())
}

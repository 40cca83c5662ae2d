//! Postseason simulation CLI
//!
//! Plays narrated brackets, Monte Carlo batches, or prints exact title odds
//! for a roster (the built-in 1994 field unless a JSON file is given).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use postseason_core::narration::write_postseason;
use postseason_core::{Postseason, RosterConfig};

#[derive(Parser)]
#[command(name = "postseason")]
#[command(about = "Simulate a seeded best-of-N postseason bracket", long_about = None)]
struct Cli {
    /// Roster JSON file (defaults to the built-in 1994 field)
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one bracket with game-by-game narration
    Simulate {
        /// Random seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play many brackets and report title frequencies
    Batch {
        /// Number of brackets to play
        #[arg(long, default_value = "10000")]
        runs: usize,
        /// Master random seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print exact title probabilities
    Odds,
    /// Print the roster as JSON, usable as a template for --roster
    Roster,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .init();

    let roster = match &cli.roster {
        Some(path) => RosterConfig::from_path(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => RosterConfig::mlb_1994(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Simulate { seed } => {
            let postseason = roster.into_postseason()?;
            let result = postseason.simulate(seed);
            write_postseason(&mut out, &result)?;
        }
        Commands::Batch { runs, seed } => {
            let postseason = roster.into_postseason()?;
            let titles = postseason.run_simulations(runs, seed)?;
            let mut rows: Vec<(String, usize)> = titles.into_iter().collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

            writeln!(out, "Titles over {} simulated postseasons:", runs)?;
            for (team, count) in rows {
                let share = if runs == 0 { 0.0 } else { count as f64 / runs as f64 };
                writeln!(out, "  {:<24} {:>8}  {:>6.2}%", team, count, share * 100.0)?;
            }
        }
        Commands::Odds => {
            let postseason = roster.into_postseason()?;
            print_odds(&mut out, &postseason)?;
        }
        Commands::Roster => {
            writeln!(out, "{}", roster.to_json_pretty()?)?;
        }
    }

    Ok(())
}

fn print_odds<W: Write>(out: &mut W, postseason: &Postseason) -> Result<()> {
    let odds = postseason.championship_odds()?;

    for league in postseason.leagues() {
        writeln!(out, "{}", league.name())?;
        for team in league.teams() {
            let p = odds.get(team.name()).copied().unwrap_or(0.0);
            writeln!(
                out,
                "  {}. {:<24} rating {:.4}  title {:>6.2}%",
                team.seed(),
                team.name(),
                team.rating(),
                p * 100.0
            )?;
        }
    }

    Ok(())
}

//! Lineup generator CLI
//!
//! Roster JSON → per-period lineups, printed as a summary or written as
//! the full response JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lineup_core::{create_generator, supported_sports, GameInfo, Player, RotationSnapshot};

#[derive(Parser)]
#[command(name = "lineup_gen")]
#[command(about = "Generate per-period lineups for a team roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate lineups from a roster JSON file
    Generate {
        /// Roster file: a JSON array of players
        #[arg(long)]
        roster: PathBuf,

        /// Sport id (baseball, soccer, volleyball)
        #[arg(long)]
        sport: String,

        /// PRNG seed; the same seed reproduces the same lineups
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Override the sport's default period count
        #[arg(long)]
        periods: Option<u32>,

        /// Prior-game history snapshot JSON for cross-game fairness
        #[arg(long)]
        history: Option<PathBuf>,

        /// Write the lineups as JSON here instead of printing a summary
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List supported sports
    Sports,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            roster,
            sport,
            seed,
            periods,
            history,
            out,
        } => {
            let raw = std::fs::read_to_string(&roster)
                .with_context(|| format!("reading roster {}", roster.display()))?;
            let players: Vec<Player> =
                serde_json::from_str(&raw).context("roster is not a JSON array of players")?;

            let prior_history = match history {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading history {}", path.display()))?;
                    Some(
                        serde_json::from_str::<RotationSnapshot>(&raw)
                            .context("history is not a rotation snapshot")?,
                    )
                }
                None => None,
            };

            let generator = create_generator(&sport)?;
            let game = GameInfo {
                seed,
                num_periods: periods,
                prior_history,
            };
            let lineups = generator.generate(&players, &game)?;

            match out {
                Some(path) => {
                    let json = serde_json::to_string_pretty(&lineups)?;
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {} lineups to {}", lineups.len(), path.display());
                }
                None => {
                    for lineup in &lineups {
                        println!("{}", lineup.period_name);
                        for assignment in &lineup.assignments {
                            println!(
                                "  {:>4}  {}",
                                assignment.position_id, assignment.player_name
                            );
                        }
                        if !lineup.bench.is_empty() {
                            println!("  Bench: {}", lineup.bench.join(", "));
                        }
                        println!();
                    }
                }
            }
        }
        Commands::Sports => {
            for sport in supported_sports() {
                println!("{sport}");
            }
        }
    }

    Ok(())
}

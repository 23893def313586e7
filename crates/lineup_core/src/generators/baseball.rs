//! Baseball lineup generation with pitcher rotation rules.
//!
//! Periods are 2-inning blocks (3 for a 6-inning game). The pitcher cap
//! is a hard exclusion: a player at the consecutive-period limit is
//! vetoed from "P" for that period. Catcher variety needs no rule of its
//! own; the engine's fewest-periods-at-position tie-break covers it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{bench_ids, resolve_periods, tracker_for, validate_roster};
use crate::engine::{AssignmentEngine, PeriodRequest};
use crate::error::Result;
use crate::models::{GameInfo, Lineup, Player, SportConfig};

pub const PITCHER_POSITION: &str = "P";
const DEFAULT_PITCHER_CAP: u32 = 2;

#[derive(Debug, Clone)]
pub struct BaseballGenerator {
    config: SportConfig,
    pitcher_cap: u32,
}

impl BaseballGenerator {
    pub fn new(config: SportConfig) -> Self {
        let pitcher_cap = config
            .rules
            .pitcher_max_consecutive_periods
            .unwrap_or(DEFAULT_PITCHER_CAP);
        BaseballGenerator {
            config,
            pitcher_cap,
        }
    }

    pub fn config(&self) -> &SportConfig {
        &self.config
    }

    pub fn generate(&self, players: &[Player], game: &GameInfo) -> Result<Vec<Lineup>> {
        let roster = validate_roster(&self.config, players)?;
        let mut tracker = tracker_for(game);
        let mut rng = ChaCha8Rng::seed_from_u64(game.seed);
        let slots = self.config.lineup_slots();
        let periods = resolve_periods(&self.config, game)?;

        let mut lineups = Vec::with_capacity(periods as usize);
        for period in 1..=periods {
            let request = PeriodRequest {
                period,
                players: &roster,
                slots: &slots,
            };
            let assignments = AssignmentEngine::new(&tracker)
                .with_must_play_threshold(self.config.rules.must_play_bench_threshold)
                .assign_period(
                    &request,
                    |player, position_id| {
                        position_id == PITCHER_POSITION
                            && tracker.consecutive_streak(&player.id, PITCHER_POSITION, period)
                                >= self.pitcher_cap as usize
                    },
                    &mut rng,
                )?;
            tracker.record(period, &assignments, &roster);
            let bench = bench_ids(&roster, &assignments);
            lineups.push(Lineup {
                period,
                period_name: self.config.game_structure.period_name(period),
                assignments,
                bench,
                substitutions_used: 0,
            });
        }
        Ok(lineups)
    }
}

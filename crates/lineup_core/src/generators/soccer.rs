//! Soccer lineup generation: one lineup per half.
//!
//! The goalkeeper must be coverable before any half is generated; the
//! shared roster validation raises `MissingRequiredPosition("GK")`
//! otherwise. Substitutions are counted between halves as an exposed
//! metric only, never enforced as a cap.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{bench_ids, resolve_periods, substitutions_since, tracker_for, validate_roster};
use crate::engine::{AssignmentEngine, PeriodRequest};
use crate::error::Result;
use crate::models::{GameInfo, Lineup, Player, SportConfig};

#[derive(Debug, Clone)]
pub struct SoccerGenerator {
    config: SportConfig,
}

impl SoccerGenerator {
    pub fn new(config: SportConfig) -> Self {
        SoccerGenerator { config }
    }

    pub fn config(&self) -> &SportConfig {
        &self.config
    }

    pub fn generate(&self, players: &[Player], game: &GameInfo) -> Result<Vec<Lineup>> {
        let roster = validate_roster(&self.config, players)?;
        let mut tracker = tracker_for(game);
        let mut rng = ChaCha8Rng::seed_from_u64(game.seed);
        let slots = self.config.lineup_slots();
        let halves = resolve_periods(&self.config, game)?;

        let mut lineups: Vec<Lineup> = Vec::with_capacity(halves as usize);
        for period in 1..=halves {
            let request = PeriodRequest {
                period,
                players: &roster,
                slots: &slots,
            };
            let assignments = AssignmentEngine::new(&tracker)
                .with_must_play_threshold(self.config.rules.must_play_bench_threshold)
                .assign_period(&request, |_, _| false, &mut rng)?;
            tracker.record(period, &assignments, &roster);
            let substitutions_used = substitutions_since(lineups.last(), &assignments);
            let bench = bench_ids(&roster, &assignments);
            lineups.push(Lineup {
                period,
                period_name: self.config.game_structure.period_name(period),
                assignments,
                bench,
                substitutions_used,
            });
        }
        Ok(lineups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_sport_config;
    use crate::error::LineupError;

    fn generator() -> SoccerGenerator {
        SoccerGenerator::new(load_sport_config("soccer").unwrap())
    }

    fn game(seed: u64) -> GameInfo {
        GameInfo {
            seed,
            num_periods: None,
            prior_history: None,
        }
    }

    fn outfielders(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| {
                Player::new(format!("p{i}"), format!("Player {i}"))
                    .with_preferences(&["LB", "CB", "RB", "CM", "LW", "RW", "ST"])
            })
            .collect()
    }

    #[test]
    fn lone_goalkeeper_keeps_goal_in_both_halves() {
        let mut players = outfielders(10);
        players.push(Player::new("gk", "Keeper").with_preferences(&["GK"]));

        let lineups = generator().generate(&players, &game(42)).unwrap();
        assert_eq!(lineups.len(), 2);
        for lineup in &lineups {
            assert_eq!(lineup.assignment_for("GK").unwrap().player_id, "gk");
            assert_eq!(lineup.assignments.len(), 11);
            assert_eq!(lineup.assigned_player_ids().len(), 11);
            assert!(lineup.bench.is_empty());
        }
        assert_eq!(lineups[0].period_name, "Half 1");
        assert_eq!(lineups[1].period_name, "Half 2");
    }

    #[test]
    fn no_goalkeeper_fails_before_any_half() {
        let err = generator().generate(&outfielders(10), &game(0)).unwrap_err();
        assert!(matches!(
            err,
            LineupError::MissingRequiredPosition { position_id } if position_id == "GK"
        ));
    }

    #[test]
    fn bench_rotation_is_reported_as_substitutions() {
        // 14 flexible players: 3 sit each half, and the half-1 bench is
        // preferred into half 2 by the bench-streak tie-break.
        let players: Vec<Player> = (0..14)
            .map(|i| Player::new(format!("p{i}"), format!("Player {i}")))
            .collect();
        let lineups = generator().generate(&players, &game(9)).unwrap();

        assert_eq!(lineups[0].substitutions_used, 0);
        let first_half = lineups[0].assigned_player_ids();
        let entrants = lineups[1]
            .assignments
            .iter()
            .filter(|a| !first_half.contains(a.player_id.as_str()))
            .count() as u32;
        assert_eq!(lineups[1].substitutions_used, entrants);
        assert_eq!(entrants, 3);
        for lineup in &lineups {
            assert_eq!(lineup.bench.len(), 3);
        }
    }

    #[test]
    fn exactly_eleven_players_means_no_substitutions() {
        let players: Vec<Player> = (0..11)
            .map(|i| Player::new(format!("p{i}"), format!("Player {i}")))
            .collect();
        let lineups = generator().generate(&players, &game(3)).unwrap();
        assert_eq!(lineups[1].substitutions_used, 0);
        assert!(lineups.iter().all(|l| l.bench.is_empty()));
    }
}

//! Volleyball lineup generation: one lineup per set, six on court.
//!
//! A setter must be coverable before generation starts. The bench-streak
//! must-play rule is the only hard fairness rule; libero front-row and
//! serve restrictions are intentionally not modeled.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{bench_ids, resolve_periods, tracker_for, validate_roster};
use crate::engine::{AssignmentEngine, PeriodRequest};
use crate::error::Result;
use crate::models::{GameInfo, Lineup, Player, SportConfig};

#[derive(Debug, Clone)]
pub struct VolleyballGenerator {
    config: SportConfig,
}

impl VolleyballGenerator {
    pub fn new(config: SportConfig) -> Self {
        VolleyballGenerator { config }
    }

    pub fn config(&self) -> &SportConfig {
        &self.config
    }

    pub fn generate(&self, players: &[Player], game: &GameInfo) -> Result<Vec<Lineup>> {
        let roster = validate_roster(&self.config, players)?;
        let mut tracker = tracker_for(game);
        let mut rng = ChaCha8Rng::seed_from_u64(game.seed);
        let slots = self.config.lineup_slots();
        let sets = resolve_periods(&self.config, game)?;

        let mut lineups = Vec::with_capacity(sets as usize);
        for period in 1..=sets {
            let request = PeriodRequest {
                period,
                players: &roster,
                slots: &slots,
            };
            let assignments = AssignmentEngine::new(&tracker)
                .with_must_play_threshold(self.config.rules.must_play_bench_threshold)
                .assign_period(&request, |_, _| false, &mut rng)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_sport_config;
    use crate::error::LineupError;

    fn generator() -> VolleyballGenerator {
        VolleyballGenerator::new(load_sport_config("volleyball").unwrap())
    }

    fn flexible(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| Player::new(format!("p{i}"), format!("Player {i}")))
            .collect()
    }

    #[test]
    fn six_players_cover_five_sets_with_empty_benches() {
        let game = GameInfo {
            seed: 42,
            num_periods: Some(5),
            prior_history: None,
        };
        let lineups = generator().generate(&flexible(6), &game).unwrap();
        assert_eq!(lineups.len(), 5);
        for lineup in &lineups {
            assert_eq!(lineup.assignments.len(), 6);
            assert_eq!(lineup.assigned_player_ids().len(), 6);
            assert!(lineup.bench.is_empty());
            assert!(lineup.has_position_filled("S"));
        }
        assert_eq!(lineups[4].period_name, "Set 5");
    }

    #[test]
    fn defaults_to_three_sets() {
        let game = GameInfo::default();
        let lineups = generator().generate(&flexible(8), &game).unwrap();
        assert_eq!(lineups.len(), 3);
    }

    #[test]
    fn setter_slot_counts_match_config() {
        let game = GameInfo::default();
        let lineups = generator().generate(&flexible(6), &game).unwrap();
        for lineup in &lineups {
            let setters = lineup
                .assignments
                .iter()
                .filter(|a| a.position_id == "S")
                .count();
            let hitters = lineup
                .assignments
                .iter()
                .filter(|a| a.position_id == "OH")
                .count();
            assert_eq!(setters, 1);
            assert_eq!(hitters, 2);
        }
    }

    #[test]
    fn no_setter_fails_before_any_set() {
        let players: Vec<Player> = (0..6)
            .map(|i| {
                Player::new(format!("p{i}"), format!("Player {i}"))
                    .with_preferences(&["OH", "MB", "OPP"])
            })
            .collect();
        let err = generator().generate(&players, &GameInfo::default()).unwrap_err();
        assert!(matches!(
            err,
            LineupError::MissingRequiredPosition { position_id } if position_id == "S"
        ));
    }

    #[test]
    fn eight_players_rotate_through_the_bench() {
        let roster = flexible(8);
        let game = GameInfo {
            seed: 11,
            num_periods: Some(4),
            prior_history: None,
        };
        let lineups = generator().generate(&roster, &game).unwrap();
        for lineup in &lineups {
            assert_eq!(lineup.bench.len(), 2);
        }
        // Nobody sits three sets in a row: the must-play rule catches a
        // streak of two before set 3 and 4.
        for player in &roster {
            for window in lineups.windows(3) {
                let benched_all = window
                    .iter()
                    .all(|l| l.bench.iter().any(|id| id == &player.id));
                assert!(!benched_all, "{} sat three straight sets", player.id);
            }
        }
    }
}

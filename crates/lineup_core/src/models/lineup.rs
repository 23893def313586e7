use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::player::PositionAssignment;
use crate::rotation::RotationSnapshot;

/// Complete lineup for one period of play.
///
/// `assignments` and `bench` together partition the available roster for
/// the period: every available player appears exactly once in one of the
/// two lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lineup {
    /// 1-based period index.
    pub period: u32,
    /// Human-readable label, e.g. "Innings 1-2", "Half 1", "Set 3".
    pub period_name: String,
    pub assignments: Vec<PositionAssignment>,
    /// Ids of available players without an assignment this period.
    pub bench: Vec<String>,
    /// Players entering relative to the previous period. Informational
    /// only; never enforced as a substitution cap.
    #[serde(default)]
    pub substitutions_used: u32,
}

impl Lineup {
    pub fn assigned_player_ids(&self) -> BTreeSet<&str> {
        self.assignments.iter().map(|a| a.player_id.as_str()).collect()
    }

    pub fn assignment_for(&self, position_id: &str) -> Option<&PositionAssignment> {
        self.assignments.iter().find(|a| a.position_id == position_id)
    }

    pub fn has_position_filled(&self, position_id: &str) -> bool {
        self.assignment_for(position_id).is_some()
    }
}

/// Caller-supplied game metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameInfo {
    /// PRNG seed; identical seed and roster reproduce identical lineups.
    pub seed: u64,
    /// Overrides the sport's default period count when present.
    #[serde(default)]
    pub num_periods: Option<u32>,
    /// Cross-game history snapshot from a prior run.
    #[serde(default)]
    pub prior_history: Option<RotationSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup() -> Lineup {
        Lineup {
            period: 1,
            period_name: "Set 1".to_string(),
            assignments: vec![
                PositionAssignment {
                    player_id: "1".to_string(),
                    player_name: "Alex".to_string(),
                    position_id: "S".to_string(),
                },
                PositionAssignment {
                    player_id: "2".to_string(),
                    player_name: "Brook".to_string(),
                    position_id: "OH".to_string(),
                },
            ],
            bench: vec!["3".to_string()],
            substitutions_used: 0,
        }
    }

    #[test]
    fn position_queries() {
        let l = lineup();
        assert!(l.has_position_filled("S"));
        assert!(!l.has_position_filled("MB"));
        assert_eq!(l.assignment_for("OH").unwrap().player_id, "2");
        assert_eq!(l.assigned_player_ids().len(), 2);
    }

    #[test]
    fn serde_round_trip_preserves_assignment_and_bench_sets() {
        let l = lineup();
        let json = serde_json::to_string(&l).unwrap();
        let back: Lineup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }
}

//! Cross-period rotation memory for fairness decisions.
//!
//! The tracker is created fresh for each generation run (optionally
//! seeded with a prior-game snapshot), grows append-only while periods
//! are generated, and is discarded when the run returns. It is never
//! shared across concurrent calls.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Player, PositionAssignment};

/// Serializable cross-game history: cumulative position ids per player.
///
/// Only cumulative counts survive between games; bench streaks and
/// consecutive-position streaks are per-run state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSnapshot {
    #[serde(default)]
    pub positions_played: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
struct PeriodRecord {
    period: u32,
    assigned: BTreeMap<String, String>,
    benched: BTreeSet<String>,
}

/// Append-only record of who played what in which period, plus who sat.
///
/// All queries return 0 for unknown players or positions.
#[derive(Debug, Clone, Default)]
pub struct RotationTracker {
    history: BTreeMap<String, Vec<String>>,
    periods: Vec<PeriodRecord>,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed cumulative history from a prior run.
    pub fn with_history(snapshot: RotationSnapshot) -> Self {
        RotationTracker {
            history: snapshot.positions_played,
            periods: Vec::new(),
        }
    }

    /// Append one period's assignments; available players without an
    /// assignment are recorded as benched.
    pub fn record(&mut self, period: u32, assignments: &[PositionAssignment], available: &[Player]) {
        let mut assigned = BTreeMap::new();
        for assignment in assignments {
            assigned.insert(assignment.player_id.clone(), assignment.position_id.clone());
            self.history
                .entry(assignment.player_id.clone())
                .or_default()
                .push(assignment.position_id.clone());
        }
        let benched = available
            .iter()
            .filter(|p| !assigned.contains_key(&p.id))
            .map(|p| p.id.clone())
            .collect();
        self.periods.push(PeriodRecord {
            period,
            assigned,
            benched,
        });
    }

    /// Cumulative periods played at a position, including seeded history.
    pub fn periods_at_position(&self, player_id: &str, position_id: &str) -> usize {
        self.history
            .get(player_id)
            .map_or(0, |positions| positions.iter().filter(|p| *p == position_id).count())
    }

    /// Trailing consecutive periods (ending at `as_of - 1`) holding the
    /// exact position, stopping at the first gap.
    pub fn consecutive_streak(&self, player_id: &str, position_id: &str, as_of: u32) -> usize {
        self.trailing(as_of, |record| {
            record.assigned.get(player_id).map(String::as_str) == Some(position_id)
        })
    }

    /// Trailing consecutive periods with no assignment.
    pub fn bench_streak(&self, player_id: &str, as_of: u32) -> usize {
        self.trailing(as_of, |record| record.benched.contains(player_id))
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        RotationSnapshot {
            positions_played: self.history.clone(),
        }
    }

    fn trailing<F>(&self, as_of: u32, held: F) -> usize
    where
        F: Fn(&PeriodRecord) -> bool,
    {
        let mut streak = 0;
        let mut period = as_of.saturating_sub(1);
        while period >= 1 {
            let Some(record) = self.periods.iter().rev().find(|r| r.period == period) else {
                break;
            };
            if !held(record) {
                break;
            }
            streak += 1;
            period -= 1;
        }
        streak
    }
}

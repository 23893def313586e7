use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{LineupError, Result};

/// Scheduling unit of the sport: 2-inning blocks, halves, or sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    Innings,
    Halves,
    Sets,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStructure {
    pub kind: PeriodKind,
    /// Default number of periods; callers may override per game.
    pub periods: u32,
    /// Innings covered by one period (1 for halves and sets).
    #[serde(default = "default_units_per_period")]
    pub units_per_period: u32,
}

fn default_units_per_period() -> u32 {
    1
}

impl GameStructure {
    /// Human-readable label for a 1-based period, e.g. "Innings 1-2",
    /// "Half 1", "Set 3".
    pub fn period_name(&self, period: u32) -> String {
        match self.kind {
            PeriodKind::Innings if self.units_per_period > 1 => {
                let start = (period - 1) * self.units_per_period + 1;
                let end = period * self.units_per_period;
                format!("Innings {start}-{end}")
            }
            PeriodKind::Innings => format!("Inning {period}"),
            PeriodKind::Halves => format!("Half {period}"),
            PeriodKind::Sets => format!("Set {period}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub id: String,
    pub name: String,
    /// Must be filled every period (goalkeeper, setter).
    #[serde(default)]
    pub required: bool,
    /// Lineup slots this position contributes; absent means 1.
    #[serde(default)]
    pub max_per_lineup: Option<u8>,
}

impl Position {
    pub fn slots(&self) -> u8 {
        self.max_per_lineup.unwrap_or(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SportRules {
    /// On-field lineup size; also the minimum roster size.
    pub total_positions: usize,
    #[serde(default)]
    pub required_positions: Vec<String>,
    /// Max consecutive periods a player may pitch (baseball only).
    #[serde(default)]
    pub pitcher_max_consecutive_periods: Option<u32>,
    /// Informational only; never enforced as a hard cap.
    #[serde(default)]
    pub substitution_limit: Option<u32>,
    /// Bench streak at which a player must be assigned.
    #[serde(default = "default_must_play_threshold")]
    pub must_play_bench_threshold: u32,
}

fn default_must_play_threshold() -> u32 {
    2
}

/// Static description of a sport. Loaded from embedded JSON by the
/// config module; the engine only consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SportConfig {
    pub sport_id: String,
    pub display_name: String,
    pub positions: Vec<Position>,
    pub game_structure: GameStructure,
    pub rules: SportRules,
}

/// One concrete lineup slot for the assignment engine. Positions with
/// `max_per_lineup > 1` expand into several slots of the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSlot {
    pub position_id: String,
    pub required: bool,
}

impl SportConfig {
    pub fn position(&self, position_id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == position_id)
    }

    fn is_required(&self, position: &Position) -> bool {
        position.required || self.rules.required_positions.iter().any(|r| r == &position.id)
    }

    /// Expand positions into the per-period slot list, in config order.
    pub fn lineup_slots(&self) -> Vec<PositionSlot> {
        let mut slots = Vec::with_capacity(self.rules.total_positions);
        for position in &self.positions {
            let required = self.is_required(position);
            for _ in 0..position.slots() {
                slots.push(PositionSlot {
                    position_id: position.id.clone(),
                    required,
                });
            }
        }
        slots
    }

    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() {
            return Err(LineupError::InvalidConfig(format!(
                "{}: no positions defined",
                self.sport_id
            )));
        }
        let mut seen = BTreeSet::new();
        for position in &self.positions {
            if !seen.insert(position.id.as_str()) {
                return Err(LineupError::InvalidConfig(format!(
                    "{}: duplicate position id {}",
                    self.sport_id, position.id
                )));
            }
        }
        for required in &self.rules.required_positions {
            if self.position(required).is_none() {
                return Err(LineupError::InvalidConfig(format!(
                    "{}: required position {} not in positions list",
                    self.sport_id, required
                )));
            }
        }
        let slot_count = self.lineup_slots().len();
        if slot_count != self.rules.total_positions {
            return Err(LineupError::InvalidConfig(format!(
                "{}: positions expand to {} slots, rules say {}",
                self.sport_id, slot_count, self.rules.total_positions
            )));
        }
        if self.game_structure.periods == 0 {
            return Err(LineupError::InvalidConfig(format!(
                "{}: game structure must have at least one period",
                self.sport_id
            )));
        }
        Ok(())
    }
}

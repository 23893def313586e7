//! Sport-specific lineup generators.
//!
//! Each sport is a closed variant of [`SportGenerator`]: the rule layers
//! are independent, so dispatch is a plain enum rather than a trait
//! hierarchy. Generators are request-scoped; they hold only their sport
//! config and build a fresh tracker and RNG per generation call.

pub mod baseball;
pub mod factory;
pub mod soccer;
pub mod volleyball;

pub use baseball::BaseballGenerator;
pub use factory::{create_generator, supported_sports};
pub use soccer::SoccerGenerator;
pub use volleyball::VolleyballGenerator;

use crate::error::{LineupError, Result};
use crate::models::{GameInfo, Lineup, Player, SportConfig};
use crate::rotation::RotationTracker;

#[derive(Debug, Clone)]
pub enum SportGenerator {
    Baseball(BaseballGenerator),
    Soccer(SoccerGenerator),
    Volleyball(VolleyballGenerator),
}

impl SportGenerator {
    /// Generate the full ordered lineup list for a game, one lineup per
    /// period. Fails atomically: any error means no lineups at all.
    pub fn generate(&self, players: &[Player], game: &GameInfo) -> Result<Vec<Lineup>> {
        match self {
            SportGenerator::Baseball(g) => g.generate(players, game),
            SportGenerator::Soccer(g) => g.generate(players, game),
            SportGenerator::Volleyball(g) => g.generate(players, game),
        }
    }

    pub fn config(&self) -> &SportConfig {
        match self {
            SportGenerator::Baseball(g) => g.config(),
            SportGenerator::Soccer(g) => g.config(),
            SportGenerator::Volleyball(g) => g.config(),
        }
    }
}

/// Shared pre-generation validation: player record completeness, required
/// position coverage, then roster size. Returns the available roster.
pub(crate) fn validate_roster(config: &SportConfig, players: &[Player]) -> Result<Vec<Player>> {
    let mut seen_ids = std::collections::BTreeSet::new();
    for (index, player) in players.iter().enumerate() {
        if player.id.is_empty() {
            return Err(LineupError::InvalidInput(format!(
                "player at index {index} missing id"
            )));
        }
        if player.name.is_empty() {
            return Err(LineupError::InvalidInput(format!(
                "player at index {index} missing name"
            )));
        }
        if !seen_ids.insert(player.id.as_str()) {
            return Err(LineupError::InvalidInput(format!(
                "duplicate player id {}",
                player.id
            )));
        }
    }

    let available: Vec<Player> = players.iter().filter(|p| p.available).cloned().collect();

    for required in &config.rules.required_positions {
        if !available.iter().any(|p| p.can_play_position(required)) {
            return Err(LineupError::MissingRequiredPosition {
                position_id: required.clone(),
            });
        }
    }

    if available.len() < config.rules.total_positions {
        return Err(LineupError::InsufficientPlayers {
            needed: config.rules.total_positions,
            available: available.len(),
        });
    }

    Ok(available)
}

/// Period count for the game: the caller's override when present, else
/// the sport default. A zero override is rejected rather than producing
/// an empty lineup list.
pub(crate) fn resolve_periods(config: &SportConfig, game: &GameInfo) -> Result<u32> {
    match game.num_periods {
        Some(0) => Err(LineupError::InvalidInput(
            "num_periods must be at least 1".to_string(),
        )),
        Some(n) => Ok(n),
        None => Ok(config.game_structure.periods),
    }
}

/// Seed the tracker from prior-game history when the caller supplied one.
pub(crate) fn tracker_for(game: &GameInfo) -> RotationTracker {
    match &game.prior_history {
        Some(snapshot) => RotationTracker::with_history(snapshot.clone()),
        None => RotationTracker::new(),
    }
}

pub(crate) fn bench_ids(roster: &[Player], assignments: &[crate::models::PositionAssignment]) -> Vec<String> {
    roster
        .iter()
        .filter(|p| !assignments.iter().any(|a| a.player_id == p.id))
        .map(|p| p.id.clone())
        .collect()
}

/// Players entering relative to the previous period's lineup. Period 1
/// always reports zero.
pub(crate) fn substitutions_since(
    previous: Option<&Lineup>,
    assignments: &[crate::models::PositionAssignment],
) -> u32 {
    let Some(previous) = previous else {
        return 0;
    };
    let prior = previous.assigned_player_ids();
    assignments
        .iter()
        .filter(|a| !prior.contains(a.player_id.as_str()))
        .count() as u32
}

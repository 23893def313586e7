//! JSON boundary for the lineup engine.
//!
//! The (external) route layer exchanges plain JSON strings with this
//! module. Error strings carry a stable code prefix so the route layer
//! can map them to status codes without parsing prose.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generators::create_generator;
use crate::models::{GameInfo, Lineup, Player};
use crate::rotation::RotationSnapshot;

pub const SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNSUPPORTED_SPORT: &str = "UNSUPPORTED_SPORT";
    pub const INSUFFICIENT_PLAYERS: &str = "INSUFFICIENT_PLAYERS";
    pub const MISSING_REQUIRED_POSITION: &str = "MISSING_REQUIRED_POSITION";
    pub const INFEASIBLE_ASSIGNMENT: &str = "INFEASIBLE_ASSIGNMENT";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
    pub const INTERNAL: &str = "INTERNAL";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub sport: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub num_periods: Option<u32>,
    /// Cross-game fairness: snapshot from a prior run, if the caller
    /// kept one. The engine itself persists nothing between calls.
    #[serde(default)]
    pub prior_history: Option<RotationSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineupResponse {
    pub schema_version: u8,
    pub sport: String,
    pub lineups: Vec<Lineup>,
    /// History after this game, for the caller to pass back next time.
    pub history: RotationSnapshot,
}

/// Typed entry point used by the JSON wrapper and by Rust callers.
pub fn generate_lineups(request: &LineupRequest) -> Result<LineupResponse> {
    let generator = create_generator(&request.sport)?;
    let game = GameInfo {
        seed: request.seed,
        num_periods: request.num_periods,
        prior_history: request.prior_history.clone(),
    };
    let lineups = generator.generate(&request.players, &game)?;

    // Rebuild the outgoing snapshot from the returned lineups so the
    // caller can thread history into the next game.
    let mut history = request.prior_history.clone().unwrap_or_default();
    for lineup in &lineups {
        for assignment in &lineup.assignments {
            history
                .positions_played
                .entry(assignment.player_id.clone())
                .or_default()
                .push(assignment.position_id.clone());
        }
    }

    Ok(LineupResponse {
        schema_version: SCHEMA_VERSION,
        sport: generator.config().sport_id.clone(),
        lineups,
        history,
    })
}

/// String-in, string-out wrapper for non-Rust hosts.
pub fn generate_lineups_json(request_json: &str) -> std::result::Result<String, String> {
    let request: LineupRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::INVALID_REQUEST,
            format!(
                "unsupported schema_version {}, expected {}",
                request.schema_version, SCHEMA_VERSION
            ),
        ));
    }
    let response = generate_lineups(&request).map_err(|e| err_code(e.code(), &e))?;
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::INTERNAL, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn baseball_request(seed: u64) -> serde_json::Value {
        let players: Vec<serde_json::Value> = (0..9)
            .map(|i| json!({ "id": format!("p{i}"), "name": format!("Player {i}") }))
            .collect();
        json!({
            "schema_version": 1,
            "seed": seed,
            "sport": "baseball",
            "players": players,
        })
    }

    #[test]
    fn generates_and_round_trips_through_json() {
        let raw = baseball_request(42).to_string();
        let out = generate_lineups_json(&raw).unwrap();
        let response: LineupResponse = serde_json::from_str(&out).unwrap();

        assert_eq!(response.schema_version, SCHEMA_VERSION);
        assert_eq!(response.sport, "baseball");
        assert_eq!(response.lineups.len(), 3);
        for lineup in &response.lineups {
            assert_eq!(lineup.assignments.len(), 9);
            assert!(lineup.bench.is_empty());
        }

        // Re-serializing the parsed response yields the same document.
        let again = serde_json::to_string(&response).unwrap();
        let reparsed: LineupResponse = serde_json::from_str(&again).unwrap();
        assert_eq!(reparsed.lineups, response.lineups);
        assert_eq!(reparsed.history, response.history);
    }

    #[test]
    fn identical_seed_yields_byte_identical_output() {
        let raw = baseball_request(7).to_string();
        let first = generate_lineups_json(&raw).unwrap();
        let second = generate_lineups_json(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn history_accumulates_across_games() {
        let raw = baseball_request(7).to_string();
        let out = generate_lineups_json(&raw).unwrap();
        let response: LineupResponse = serde_json::from_str(&out).unwrap();
        // 9 players, 3 periods, everyone plays every period.
        for positions in response.history.positions_played.values() {
            assert_eq!(positions.len(), 3);
        }
    }

    #[test]
    fn unsupported_sport_maps_to_error_code() {
        let raw = json!({
            "schema_version": 1,
            "seed": 0,
            "sport": "cricket",
            "players": [],
        })
        .to_string();
        let err = generate_lineups_json(&raw).unwrap_err();
        assert!(err.starts_with(error_codes::UNSUPPORTED_SPORT));
    }

    #[test]
    fn malformed_json_maps_to_invalid_request() {
        let err = generate_lineups_json("{not json").unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_REQUEST));
    }

    #[test]
    fn every_engine_error_code_is_a_documented_constant() {
        use crate::error::LineupError;
        let documented = [
            error_codes::INVALID_REQUEST,
            error_codes::UNSUPPORTED_SPORT,
            error_codes::INSUFFICIENT_PLAYERS,
            error_codes::MISSING_REQUIRED_POSITION,
            error_codes::INFEASIBLE_ASSIGNMENT,
            error_codes::INVALID_CONFIG,
            error_codes::INTERNAL,
        ];
        let variants = [
            LineupError::InsufficientPlayers { needed: 9, available: 8 },
            LineupError::MissingRequiredPosition { position_id: "GK".to_string() },
            LineupError::InfeasibleAssignment { period: 1 },
            LineupError::UnsupportedSport { sport_id: "cricket".to_string() },
            LineupError::InvalidInput("bad".to_string()),
            LineupError::InvalidConfig("bad".to_string()),
        ];
        for variant in &variants {
            assert!(documented.contains(&variant.code()), "{} undocumented", variant.code());
        }
    }

    #[test]
    fn wrong_schema_version_is_rejected() {
        let mut request = baseball_request(0);
        request["schema_version"] = json!(9);
        let err = generate_lineups_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_REQUEST));
    }
}

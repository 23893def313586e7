//! Maps sport identifiers to configured generator instances.

use super::{BaseballGenerator, SoccerGenerator, SportGenerator, VolleyballGenerator};
use crate::config;
use crate::error::{LineupError, Result};

/// Resolve a sport id (case-insensitive) to a ready-to-use generator.
/// Unknown ids fail with `UnsupportedSport`; there is no fallback.
pub fn create_generator(sport_id: &str) -> Result<SportGenerator> {
    let normalized = sport_id.trim().to_ascii_lowercase();
    let Some(sport_config) = config::load_sport_config(&normalized) else {
        return Err(LineupError::UnsupportedSport {
            sport_id: sport_id.to_string(),
        });
    };
    match normalized.as_str() {
        "baseball" => Ok(SportGenerator::Baseball(BaseballGenerator::new(sport_config))),
        "soccer" => Ok(SportGenerator::Soccer(SoccerGenerator::new(sport_config))),
        "volleyball" => Ok(SportGenerator::Volleyball(VolleyballGenerator::new(sport_config))),
        _ => Err(LineupError::UnsupportedSport {
            sport_id: sport_id.to_string(),
        }),
    }
}

/// Sport ids with both a config and a generator.
pub fn supported_sports() -> Vec<&'static str> {
    config::available_sports()
}

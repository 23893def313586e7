use serde::{Deserialize, Serialize};

/// Roster member with position preferences.
///
/// # Boundary Contract
/// - Received from the (external) route layer as part of the request body
/// - `position_preferences` holds position ids; an empty list means the
///   player is eligible for any position
/// - `available` is per-game attendance; unavailable players never reach
///   the assignment engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position_preferences: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            position_preferences: Vec::new(),
            available: true,
        }
    }

    pub fn with_preferences(mut self, preferences: &[&str]) -> Self {
        self.position_preferences = preferences.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Empty preferences mean the player is eligible everywhere.
    pub fn can_play_position(&self, position_id: &str) -> bool {
        self.position_preferences.is_empty()
            || self.position_preferences.iter().any(|p| p == position_id)
    }

    pub fn has_preference_for(&self, position_id: &str) -> bool {
        self.position_preferences.iter().any(|p| p == position_id)
    }
}

/// One player holding one position for one period. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionAssignment {
    pub player_id: String,
    pub player_name: String,
    pub position_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preferences_play_anywhere() {
        let p = Player::new("1", "Alex");
        assert!(p.can_play_position("P"));
        assert!(p.can_play_position("GK"));
        assert!(!p.has_preference_for("P"));
    }

    #[test]
    fn preferences_restrict_eligibility() {
        let p = Player::new("1", "Alex").with_preferences(&["P", "C"]);
        assert!(p.can_play_position("P"));
        assert!(!p.can_play_position("SS"));
        assert!(p.has_preference_for("C"));
    }

    #[test]
    fn available_defaults_to_true_on_deserialize() {
        let p: Player = serde_json::from_str(r#"{"id":"7","name":"Sam"}"#).unwrap();
        assert!(p.available);
        assert!(p.position_preferences.is_empty());
    }
}

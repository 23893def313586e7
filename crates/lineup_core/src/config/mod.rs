//! Embedded sport configurations.
//!
//! The three sport descriptions ship as JSON assets compiled into the
//! binary and are parsed once into a cached registry. A malformed
//! embedded config is a build defect, so the registry panics on first
//! access rather than propagating an error every call.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::models::SportConfig;

static CONFIGS: Lazy<BTreeMap<&'static str, SportConfig>> = Lazy::new(|| {
    let sources: [(&str, &str); 3] = [
        ("baseball", include_str!("../../config/sports/baseball.json")),
        ("soccer", include_str!("../../config/sports/soccer.json")),
        ("volleyball", include_str!("../../config/sports/volleyball.json")),
    ];
    let mut registry = BTreeMap::new();
    for (sport_id, raw) in sources {
        let parsed: SportConfig = serde_json::from_str(raw)
            .unwrap_or_else(|e| panic!("embedded config {sport_id} is not valid JSON: {e}"));
        parsed
            .validate()
            .unwrap_or_else(|e| panic!("embedded config {sport_id} failed validation: {e}"));
        registry.insert(sport_id, parsed);
    }
    registry
});

/// Look up a sport config by id. Ids are exact; the factory normalizes
/// case before calling.
pub fn load_sport_config(sport_id: &str) -> Option<SportConfig> {
    CONFIGS.get(sport_id).cloned()
}

pub fn available_sports() -> Vec<&'static str> {
    CONFIGS.keys().copied().collect()
}

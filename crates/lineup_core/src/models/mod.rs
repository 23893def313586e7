pub mod lineup;
pub mod player;
pub mod sport_config;

pub use lineup::{GameInfo, Lineup};
pub use player::{Player, PositionAssignment};
pub use sport_config::{
    GameStructure, PeriodKind, Position, PositionSlot, SportConfig, SportRules,
};

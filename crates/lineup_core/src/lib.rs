//! # lineup_core - Deterministic Per-Period Lineup Generation Engine
//!
//! Generates one lineup per period (2-inning block, half, or set) for
//! youth team sports, assigning available players to positions under
//! sport rules and fairness constraints.
//!
//! ## Features
//! - 100% deterministic generation (same roster + same seed = same lineups)
//! - Sport rule layers: pitcher rotation cap, goalkeeper and setter requirements
//! - Bench fairness: position variety tie-breaks and a must-play rule
//! - JSON API for easy integration with a host route layer
//!
//! Each generation call is self-contained: it builds its own rotation
//! tracker and PRNG, shares nothing, and returns either the full lineup
//! list or the first error.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod generators;
pub mod models;
pub mod rotation;

pub use api::{generate_lineups, generate_lineups_json, LineupRequest, LineupResponse, SCHEMA_VERSION};
pub use engine::{AssignmentEngine, PeriodRequest};
pub use error::{LineupError, Result};
pub use generators::{
    create_generator, supported_sports, BaseballGenerator, SoccerGenerator, SportGenerator,
    VolleyballGenerator,
};
pub use models::{
    GameInfo, GameStructure, Lineup, PeriodKind, Player, Position, PositionAssignment,
    PositionSlot, SportConfig, SportRules,
};
pub use rotation::{RotationSnapshot, RotationTracker};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

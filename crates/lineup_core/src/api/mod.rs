pub mod json_api;

pub use json_api::{
    error_codes, generate_lineups, generate_lineups_json, LineupRequest, LineupResponse,
    SCHEMA_VERSION,
};

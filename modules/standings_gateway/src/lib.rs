//! Standings Gateway: a thin REST facade over a key-value store holding
//! league-year records and user records.

pub mod api;
pub mod domain;
pub mod infra;

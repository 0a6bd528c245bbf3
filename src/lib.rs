pub mod config;
pub mod error;
pub mod h2h;
pub mod handler;
pub mod model;
pub mod nba_stats;
pub mod roster;
pub mod season;
pub mod stats;

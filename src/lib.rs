pub mod config;
pub mod error;
pub mod espn;
pub mod evaluate;
pub mod grading;
pub mod http_client;
pub mod logging;
pub mod matchups;
pub mod profile;
pub mod render;
pub mod season_convert;
pub mod spread;
pub mod team_meta;

pub mod assets;
pub mod config;
pub mod constants;
pub mod embed_api;
pub mod native_player;
pub mod units;

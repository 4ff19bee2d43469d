//! Constants module for centralized configuration values

pub mod layout;
pub mod player;

// Re-export commonly used items
pub use layout::{feed, full_player, mini_player};
pub use player::{gesture, polling, seeking};

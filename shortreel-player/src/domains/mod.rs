//! Domain modules for the shortreel client
//!
//! `feed` renders the catalogue and starts playback; `player` owns the
//! session store, the embedded player and the full/mini layouts.

pub mod feed;
pub mod player;

use self::player::PlayerDomain;

/// All domains that carry state
#[derive(Debug)]
pub struct DomainRegistry {
    pub player: PlayerDomain,
}

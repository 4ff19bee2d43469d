//! Feed domain: categorized list of videos; selecting one starts playback.

pub mod messages;
pub mod theme;
pub mod update;
pub mod view;

//! Layout constants for the mobile-styled shell.

/// Feed column
pub mod feed {
    /// The feed is laid out like a phone screen
    pub const MAX_WIDTH: f32 = 420.0;

    pub const SECTION_SPACING: f32 = 32.0;

    pub const CARD_SPACING: f32 = 16.0;

    /// Card thumbnail area uses a 4:5 aspect ratio
    pub const CARD_THUMB_HEIGHT: f32 = MAX_WIDTH * 5.0 / 4.0 - 40.0;

    /// Bottom padding reserved while the mini player covers the feed
    pub const MINI_PLAYER_CLEARANCE: f32 = 112.0;

    pub const DEFAULT_BOTTOM_PADDING: f32 = 32.0;
}

/// Full-screen player
pub mod full_player {
    pub const HEADER_HEIGHT: f32 = 56.0;

    /// Video surface height
    pub const SURFACE_HEIGHT: f32 = 320.0;

    pub const UP_NEXT_THUMB_WIDTH: f32 = 96.0;

    pub const UP_NEXT_THUMB_HEIGHT: f32 = 56.0;
}

/// Bottom-anchored mini player
pub mod mini_player {
    pub const HEIGHT: f32 = 100.0;

    pub const SURFACE_WIDTH: f32 = 150.0;

    pub const SURFACE_HEIGHT: f32 = 84.0;

    /// Touch target for the bar's action buttons
    pub const BUTTON_SIZE: f32 = 44.0;
}

/// Defaults for the player controls; [`crate::infra::config::PlayerConfig`]
/// can override most of them.
pub mod seeking {
    /// Skip distance for the -10 / +10 buttons and arrow keys
    pub const SKIP_SECONDS: f64 = 10.0;
}

pub mod polling {
    /// Interval between embedded player time/duration polls
    pub const POLL_INTERVAL_MS: u64 = 500;
}

pub mod gesture {
    /// Downward drag beyond this commits full -> mini
    pub const DRAG_THRESHOLD_PX: f32 = 120.0;

    /// Visual drag offset never exceeds this
    pub const MAX_DRAG_PX: f32 = 300.0;

    /// Duration of the animated return after an uncommitted drag
    pub const SNAP_BACK_MS: u64 = 200;

    /// Tick rate of the snap-back animation
    pub const ANIMATION_FRAME_MS: u64 = 16;
}

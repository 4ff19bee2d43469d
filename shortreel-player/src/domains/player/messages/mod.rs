pub mod subscriptions;

use std::fmt;
use std::time::Instant;

use crate::domains::player::embed::EmbedEvent;

#[derive(Clone)]
pub enum Message {
    // Playback control
    PlayPause,
    Seek(f64),
    SkipBack,
    SkipForward,

    // Presentation
    Minimize,
    Close,
    Expand,

    // Drag-to-minimize on the full player header
    DragPressed,
    DragMoved(f32),
    DragReleased,
    DragExited,
    AnimationFrame(Instant),

    // Up next panel
    ToggleUpNext,
    SelectRelated(String), // Video slug within the current category

    // Embedded player
    PollTick,
    Embed(EmbedEvent),
}

pub use Message as PlayerMessage;

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayPause => "Player::PlayPause",
            Self::Seek(_) => "Player::Seek",
            Self::SkipBack => "Player::SkipBack",
            Self::SkipForward => "Player::SkipForward",
            Self::Minimize => "Player::Minimize",
            Self::Close => "Player::Close",
            Self::Expand => "Player::Expand",
            Self::DragPressed => "Player::DragPressed",
            Self::DragMoved(_) => "Player::DragMoved",
            Self::DragReleased => "Player::DragReleased",
            Self::DragExited => "Player::DragExited",
            Self::AnimationFrame(_) => "Player::AnimationFrame",
            Self::ToggleUpNext => "Player::ToggleUpNext",
            Self::SelectRelated(_) => "Player::SelectRelated",
            Self::PollTick => "Player::PollTick",
            Self::Embed(_) => "Player::Embed",
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Seek(secs) => write!(f, "Seek({secs:.2})"),
            Message::DragMoved(y) => write!(f, "DragMoved({y:.1})"),
            Message::AnimationFrame(_) => write!(f, "AnimationFrame"),
            Message::SelectRelated(slug) => write!(f, "SelectRelated({slug})"),
            Message::Embed(event) => write!(f, "Embed({event:?})"),
            other => f.write_str(
                other.name().trim_start_matches("Player::"),
            ),
        }
    }
}

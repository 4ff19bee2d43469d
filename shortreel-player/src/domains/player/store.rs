//! Session-wide "what is playing and how is it shown" store.
//!
//! Every surface reads from the one [`PlayerStore`] owned by the root state;
//! mutation goes through [`PlayerStore::play_video`],
//! [`PlayerStore::toggle_play`] and [`PlayerStore::set_mode`] only.

use std::fmt;

use shortreel_model::{CategoryGroup, VideoItem};

/// Presentation mode of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerMode {
    #[default]
    Hidden,
    Full,
    Mini,
}

impl PlayerMode {
    pub fn is_visible(self) -> bool {
        !matches!(self, PlayerMode::Hidden)
    }
}

impl fmt::Display for PlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerMode::Hidden => write!(f, "hidden"),
            PlayerMode::Full => write!(f, "full"),
            PlayerMode::Mini => write!(f, "mini"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStore {
    current_video: Option<VideoItem>,
    current_category: Option<CategoryGroup>,
    is_playing: bool,
    mode: PlayerMode,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `video` current, start playing and open the full player.
    ///
    /// Membership of `video` in `category` is the caller's responsibility.
    pub fn play_video(&mut self, video: VideoItem, category: CategoryGroup) {
        log::debug!(
            "[Player] play_video `{}` in `{}`",
            video.slug,
            category.slug()
        );
        self.current_video = Some(video);
        self.current_category = Some(category);
        self.is_playing = true;
        self.mode = PlayerMode::Full;
    }

    /// Flip the playing flag. No-op while nothing is selected.
    pub fn toggle_play(&mut self) {
        if self.current_video.is_some() {
            self.is_playing = !self.is_playing;
        }
    }

    pub fn set_mode(&mut self, mode: PlayerMode) {
        if self.mode != mode {
            log::debug!("[Player] mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn current_video(&self) -> Option<&VideoItem> {
        self.current_video.as_ref()
    }

    pub fn current_category(&self) -> Option<&CategoryGroup> {
        self.current_category.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Whether the player view is mounted (a video is set and not hidden).
    pub fn is_presented(&self) -> bool {
        self.current_video.is_some() && self.mode.is_visible()
    }

    /// Other videos of the current category, excluding the current one.
    pub fn related_videos(&self) -> Vec<&VideoItem> {
        match (&self.current_category, &self.current_video) {
            (Some(category), Some(video)) => {
                category.related_to(&video.slug).collect()
            }
            (Some(category), None) => category.contents.iter().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortreel_model::{CategoryMeta, MediaType};

    fn video(slug: &str) -> VideoItem {
        VideoItem {
            title: slug.to_uppercase(),
            media_url: format!("https://www.youtube.com/embed/{slug}"),
            media_type: MediaType::Embedded,
            thumbnail_url: String::new(),
            slug: slug.to_string(),
        }
    }

    fn category(slugs: &[&str]) -> CategoryGroup {
        CategoryGroup {
            category: CategoryMeta {
                slug: "ai".into(),
                name: "AI".into(),
                icon_url: String::new(),
            },
            contents: slugs.iter().map(|slug| video(slug)).collect(),
        }
    }

    #[test]
    fn starts_empty_and_hidden() {
        let store = PlayerStore::new();
        assert!(store.current_video().is_none());
        assert!(store.current_category().is_none());
        assert!(!store.is_playing());
        assert_eq!(store.mode(), PlayerMode::Hidden);
        assert!(!store.is_presented());
    }

    #[test]
    fn set_mode_reflects_last_call() {
        let mut store = PlayerStore::new();
        let sequence = [
            PlayerMode::Mini,
            PlayerMode::Full,
            PlayerMode::Full,
            PlayerMode::Hidden,
            PlayerMode::Mini,
        ];
        for mode in sequence {
            store.set_mode(mode);
            assert_eq!(store.mode(), mode);
        }
        // set_mode never touches the selection or the playing flag
        assert!(store.current_video().is_none());
        assert!(!store.is_playing());
    }

    #[test]
    fn toggle_without_video_is_noop() {
        let mut store = PlayerStore::new();
        for _ in 0..3 {
            store.toggle_play();
            assert!(!store.is_playing());
        }
    }

    #[test]
    fn play_video_always_lands_in_full_and_playing() {
        let group = category(&["a", "b", "c"]);
        let priors = [PlayerMode::Hidden, PlayerMode::Full, PlayerMode::Mini];

        for prior in priors {
            let mut store = PlayerStore::new();
            store.play_video(video("a"), group.clone());
            store.toggle_play();
            store.set_mode(prior);

            store.play_video(video("b"), group.clone());
            assert_eq!(store.mode(), PlayerMode::Full);
            assert!(store.is_playing());
            assert_eq!(store.current_video().map(|v| v.slug.as_str()), Some("b"));
        }
    }

    #[test]
    fn toggle_flips_with_video() {
        let mut store = PlayerStore::new();
        store.play_video(video("a"), category(&["a"]));
        store.toggle_play();
        assert!(!store.is_playing());
        store.toggle_play();
        assert!(store.is_playing());
    }

    #[test]
    fn closing_keeps_last_video() {
        let mut store = PlayerStore::new();
        store.play_video(video("a"), category(&["a"]));
        store.set_mode(PlayerMode::Hidden);
        assert_eq!(store.current_video().map(|v| v.slug.as_str()), Some("a"));
        assert!(!store.is_presented());
    }

    #[test]
    fn related_excludes_current() {
        let mut store = PlayerStore::new();
        let group = category(&["a", "b", "c"]);
        store.play_video(video("b"), group);
        let related: Vec<_> =
            store.related_videos().iter().map(|v| v.slug.clone()).collect();
        assert_eq!(related, vec!["a", "c"]);
    }
}

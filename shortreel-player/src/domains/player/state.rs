use std::sync::Arc;
use std::time::Duration;

use super::direct::DirectPlayer;
use super::embed::{EmbedEvent, EmbedPhase, EmbedStep, EmbeddedPlayer};
use super::gesture::DragGesture;
use super::store::{PlayerMode, PlayerStore};
use super::time_sync::PlaybackClock;
use crate::infra::config::PlayerConfig;
use crate::infra::embed_api::EmbedApi;
use crate::infra::native_player::NativeBackend;

#[derive(Debug)]
pub struct PlayerDomainState {
    // Embedded playback
    pub embed: EmbeddedPlayer,
    pub clock: PlaybackClock,

    // DIRECT playback
    pub direct: DirectPlayer,

    // Full-player interaction
    pub gesture: DragGesture,
    pub up_next_open: bool,

    // Settings
    pub skip_seconds: f64,
    pub poll_interval: Duration,
}

impl PlayerDomainState {
    pub fn new(
        api: Arc<dyn EmbedApi>,
        native: Arc<dyn NativeBackend>,
        config: &PlayerConfig,
    ) -> Self {
        Self {
            embed: EmbeddedPlayer::new(api),
            clock: PlaybackClock::default(),
            direct: DirectPlayer::new(native),
            gesture: DragGesture::new(
                config.drag_threshold_px,
                config.max_drag_px,
                config.snap_back(),
            ),
            up_next_open: true,
            skip_seconds: config.skip_seconds,
            poll_interval: config.poll_interval(),
        }
    }

    /// Bring the embedded and native players in line with the store.
    ///
    /// An embed is wanted while the player is presented with an EMBEDDED
    /// video that has an identifier, a native player while it is presented
    /// with a DIRECT one; anything else tears them down. A video that
    /// already failed is left alone until it is selected again.
    pub fn reconcile(&mut self, store: &PlayerStore) -> EmbedStep {
        if store.mode() != PlayerMode::Full {
            self.gesture.reset();
        }

        let video = store.current_video().filter(|_| store.is_presented());

        match video {
            Some(video) if !video.is_embedded() => self.direct.activate(
                &video.media_url,
                &video.title,
                store.is_playing(),
            ),
            _ => self.direct.deactivate(),
        }

        let desired = match video {
            Some(video) if video.is_embedded() => {
                let id = video.embed_video_id();
                if id.is_none() {
                    log::warn!(
                        "[Player] `{}` has no embeddable id in `{}`",
                        video.slug,
                        video.media_url
                    );
                }
                id
            }
            _ => None,
        };

        match desired {
            Some(id) => {
                if self.embed.video_id() != Some(id.as_str()) {
                    self.clock.reset();
                }
                self.embed.activate(&id)
            }
            None => {
                self.embed.deactivate();
                self.clock.reset();
                EmbedStep::Idle
            }
        }
    }

    /// Reconcile after `play_video`: a fresh selection may retry a video
    /// that failed before.
    pub fn reconcile_selection(&mut self, store: &PlayerStore) -> EmbedStep {
        self.embed.forget_failure();
        self.direct.forget();
        self.reconcile(store)
    }

    pub fn handle_embed_event(
        &mut self,
        event: EmbedEvent,
        store: &PlayerStore,
    ) -> EmbedStep {
        let step = self.embed.handle_event(event, store.is_playing());
        if let EmbedStep::Ready { duration } = step {
            self.clock.set_duration(duration);
        }
        step
    }

    /// Whether the 500 ms poll should be running: a live embed to sync
    /// time from, or a native player to watch for exit.
    pub fn wants_polling(&self, store: &PlayerStore) -> bool {
        if !store.is_presented() {
            return false;
        }
        let embedded_live = store
            .current_video()
            .is_some_and(|video| video.is_embedded())
            && self.embed.phase() == EmbedPhase::Ready;
        embedded_live || self.direct.is_active()
    }

    pub fn poll(&mut self) {
        if let Some(instance) = self.embed.instance() {
            self.clock.poll(instance);
        }
        self.direct.check_alive();
    }

    /// Flip the store flag, then make whichever player is live follow it.
    pub fn toggle_play(&mut self, store: &mut PlayerStore) {
        store.toggle_play();
        let playing = store.is_playing();

        if let Some(instance) = self.embed.instance_mut() {
            if playing {
                instance.play();
            } else {
                instance.pause();
            }
        }
        self.direct.set_playing(playing);
    }

    /// Seek the embedded instance. No-op without one.
    pub fn seek(&mut self, seconds: f64) {
        let Some(instance) = self.embed.instance_mut() else {
            return;
        };
        instance.seek_to(seconds, true);
        self.clock.seek(seconds);
    }

    pub fn skip_back(&mut self) {
        if self.embed.instance().is_some() {
            self.seek(self.clock.skip_back_target(self.skip_seconds));
        }
    }

    pub fn skip_forward(&mut self) {
        if self.embed.instance().is_some() {
            self.seek(self.clock.skip_forward_target(self.skip_seconds));
        }
    }
}

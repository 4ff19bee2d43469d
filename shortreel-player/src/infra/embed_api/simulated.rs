//! In-process stand-in for the third-party player API.
//!
//! Behaves like the real API from the host's point of view: the script
//! "loads" after a delay, instances become ready asynchronously, and
//! playback time only moves while an instance is playing. With
//! [`SimulatedEmbedApi::manual_clock`] time advances exclusively through
//! [`SimulatedEmbedApi::advance`], which keeps tests deterministic.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{
    EmbedApi, EmbedError, EmbedInstance, EmbedPlaybackState, MountPoint,
    PlayerOptions,
};

/// Tunables for the simulated API, read from the `[embed]` config table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedEmbedConfig {
    /// Start with the API global already present (skips script injection)
    pub api_preloaded: bool,
    pub script_delay_ms: u64,
    pub ready_delay_ms: u64,
    pub default_duration_secs: f64,
    pub fail_script_load: bool,
    pub fail_create: bool,
}

impl Default for SimulatedEmbedConfig {
    fn default() -> Self {
        Self {
            api_preloaded: false,
            script_delay_ms: 350,
            ready_delay_ms: 150,
            default_duration_secs: 300.0,
            fail_script_load: false,
            fail_create: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    Wall,
    Manual,
}

#[derive(Debug)]
struct Shared {
    config: SimulatedEmbedConfig,
    clock: Clock,
    available: AtomicBool,
    script_injections: AtomicUsize,
    created: AtomicUsize,
    durations: Mutex<HashMap<String, f64>>,
    /// Instances not yet destroyed
    instances: Mutex<Vec<Arc<Mutex<SimPlayback>>>>,
}

impl Shared {
    fn duration_for(&self, video_id: &str) -> f64 {
        self.durations
            .lock()
            .get(video_id)
            .copied()
            .unwrap_or(self.config.default_duration_secs)
    }
}

/// Simulated API global. Cheap to clone; clones share every instance.
#[derive(Debug, Clone)]
pub struct SimulatedEmbedApi {
    shared: Arc<Shared>,
}

impl SimulatedEmbedApi {
    /// Wall-clock simulation for the desktop client.
    pub fn new(config: SimulatedEmbedConfig) -> Self {
        Self::with_clock(config, Clock::Wall)
    }

    /// Time advances only through [`Self::advance`].
    pub fn manual_clock(config: SimulatedEmbedConfig) -> Self {
        Self::with_clock(config, Clock::Manual)
    }

    fn with_clock(config: SimulatedEmbedConfig, clock: Clock) -> Self {
        let available = AtomicBool::new(config.api_preloaded);
        Self {
            shared: Arc::new(Shared {
                config,
                clock,
                available,
                script_injections: AtomicUsize::new(0),
                created: AtomicUsize::new(0),
                durations: Mutex::new(HashMap::new()),
                instances: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Report `secs` as the duration of `video_id`.
    pub fn with_duration(self, video_id: &str, secs: f64) -> Self {
        self.shared
            .durations
            .lock()
            .insert(video_id.to_string(), secs);
        self
    }

    /// Move playback time forward on every playing instance.
    pub fn advance(&self, by: Duration) {
        for instance in self.shared.instances.lock().iter() {
            instance.lock().advance(by.as_secs_f64());
        }
    }

    /// Number of times the loader script was injected.
    pub fn script_injections(&self) -> usize {
        self.shared.script_injections.load(Ordering::SeqCst)
    }

    /// Number of instances ever constructed.
    pub fn instances_created(&self) -> usize {
        self.shared.created.load(Ordering::SeqCst)
    }

    /// Number of constructed instances not yet destroyed.
    pub fn live_instances(&self) -> usize {
        self.shared.instances.lock().len()
    }

    /// Snapshot of the most recently constructed live instance.
    pub fn latest(&self) -> Option<SimulatedSnapshot> {
        let now = Instant::now();
        self.shared
            .instances
            .lock()
            .last()
            .map(|instance| instance.lock().snapshot(now))
    }
}

impl EmbedApi for SimulatedEmbedApi {
    fn is_available(&self) -> bool {
        self.shared.available.load(Ordering::SeqCst)
    }

    fn inject_script(&self) -> BoxFuture<'static, Result<(), EmbedError>> {
        self.shared.script_injections.fetch_add(1, Ordering::SeqCst);
        let shared = Arc::clone(&self.shared);
        let delay = Duration::from_millis(shared.config.script_delay_ms);

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if shared.config.fail_script_load {
                return Err(EmbedError::ScriptLoad(
                    "loader script rejected".into(),
                ));
            }
            shared.available.store(true, Ordering::SeqCst);
            Ok(())
        })
    }

    fn create_player(
        &self,
        mount: &MountPoint,
        options: PlayerOptions,
    ) -> Result<Box<dyn EmbedInstance>, EmbedError> {
        if !self.is_available() {
            return Err(EmbedError::ApiUnavailable);
        }
        if self.shared.config.fail_create {
            return Err(EmbedError::CreateFailed(format!(
                "mount `{}` rejected",
                mount.id()
            )));
        }

        let duration = self.shared.duration_for(&options.video_id);
        let playback = Arc::new(Mutex::new(SimPlayback::new(
            mount.id().to_string(),
            options.video_id,
            duration,
            self.shared.clock,
        )));
        self.shared.instances.lock().push(Arc::clone(&playback));
        self.shared.created.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(SimulatedInstance {
            shared: Arc::clone(&self.shared),
            playback,
        }))
    }
}

/// Observable state of a simulated instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSnapshot {
    pub mount_id: String,
    pub video_id: String,
    pub loaded_ids: Vec<String>,
    pub state: EmbedPlaybackState,
    pub position: f64,
    pub duration: f64,
    pub ready: bool,
    pub destroyed: bool,
}

#[derive(Debug)]
struct SimPlayback {
    mount_id: String,
    video_id: String,
    loaded_ids: Vec<String>,
    state: EmbedPlaybackState,
    clock: Clock,
    /// Position at `anchor` (wall clock) or current position (manual clock)
    position: f64,
    anchor: Instant,
    duration: f64,
    ready: bool,
    destroyed: bool,
}

impl SimPlayback {
    fn new(
        mount_id: String,
        video_id: String,
        duration: f64,
        clock: Clock,
    ) -> Self {
        Self {
            mount_id,
            loaded_ids: vec![video_id.clone()],
            video_id,
            state: EmbedPlaybackState::Unstarted,
            clock,
            position: 0.0,
            anchor: Instant::now(),
            duration,
            ready: false,
            destroyed: false,
        }
    }

    fn position_at(&self, now: Instant) -> f64 {
        let position = match (self.clock, self.state) {
            (Clock::Wall, EmbedPlaybackState::Playing) => {
                self.position
                    + now.saturating_duration_since(self.anchor).as_secs_f64()
            }
            _ => self.position,
        };
        position.min(self.duration)
    }

    fn state_at(&self, now: Instant) -> EmbedPlaybackState {
        if self.state == EmbedPlaybackState::Playing
            && self.position_at(now) >= self.duration
        {
            EmbedPlaybackState::Ended
        } else {
            self.state
        }
    }

    /// Fold elapsed wall time into `position` before a state change.
    fn settle(&mut self, now: Instant) {
        self.position = self.position_at(now);
        self.state = self.state_at(now);
        self.anchor = now;
    }

    fn advance(&mut self, secs: f64) {
        if self.clock == Clock::Manual
            && self.state == EmbedPlaybackState::Playing
            && !self.destroyed
        {
            self.position = (self.position + secs).min(self.duration);
            if self.position >= self.duration {
                self.state = EmbedPlaybackState::Ended;
            }
        }
    }

    fn snapshot(&self, now: Instant) -> SimulatedSnapshot {
        SimulatedSnapshot {
            mount_id: self.mount_id.clone(),
            video_id: self.video_id.clone(),
            loaded_ids: self.loaded_ids.clone(),
            state: self.state_at(now),
            position: self.position_at(now),
            duration: self.duration,
            ready: self.ready,
            destroyed: self.destroyed,
        }
    }
}

#[derive(Debug)]
struct SimulatedInstance {
    shared: Arc<Shared>,
    playback: Arc<Mutex<SimPlayback>>,
}

impl EmbedInstance for SimulatedInstance {
    fn ready(&self) -> BoxFuture<'static, Result<(), EmbedError>> {
        let playback = Arc::clone(&self.playback);
        let delay = Duration::from_millis(self.shared.config.ready_delay_ms);

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let mut playback = playback.lock();
            if playback.destroyed {
                return Err(EmbedError::NotReady(
                    "instance destroyed before ready".into(),
                ));
            }
            playback.ready = true;
            Ok(())
        })
    }

    fn play(&mut self) {
        let mut playback = self.playback.lock();
        if playback.destroyed {
            return;
        }
        playback.settle(Instant::now());
        if playback.position < playback.duration {
            playback.state = EmbedPlaybackState::Playing;
        }
    }

    fn pause(&mut self) {
        let mut playback = self.playback.lock();
        if playback.destroyed {
            return;
        }
        playback.settle(Instant::now());
        if playback.state == EmbedPlaybackState::Playing {
            playback.state = EmbedPlaybackState::Paused;
        }
    }

    fn state(&self) -> EmbedPlaybackState {
        self.playback.lock().state_at(Instant::now())
    }

    fn current_time(&self) -> f64 {
        self.playback.lock().position_at(Instant::now())
    }

    fn duration(&self) -> f64 {
        self.playback.lock().duration
    }

    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) {
        let mut playback = self.playback.lock();
        if playback.destroyed {
            return;
        }
        let now = Instant::now();
        playback.settle(now);
        playback.position = seconds.clamp(0.0, playback.duration);
        if playback.state == EmbedPlaybackState::Ended
            && playback.position < playback.duration
        {
            playback.state = EmbedPlaybackState::Paused;
        }
    }

    fn load_video_by_id(&mut self, video_id: &str) {
        let duration = self.shared.duration_for(video_id);
        let mut playback = self.playback.lock();
        if playback.destroyed {
            return;
        }
        playback.video_id = video_id.to_string();
        playback.loaded_ids.push(video_id.to_string());
        playback.position = 0.0;
        playback.duration = duration;
        playback.anchor = Instant::now();
        // The real API starts buffering the new video and autoplays it.
        playback.state = EmbedPlaybackState::Buffering;
    }

    fn destroy(&mut self) {
        {
            let mut playback = self.playback.lock();
            playback.settle(Instant::now());
            playback.destroyed = true;
            playback.state = EmbedPlaybackState::Unstarted;
        }
        self.shared
            .instances
            .lock()
            .retain(|instance| !Arc::ptr_eq(instance, &self.playback));
    }
}

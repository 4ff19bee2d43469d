//! Lifecycle of the embedded third-party player.
//!
//! [`EmbeddedPlayer`] owns at most one instance at a time and walks it
//! through `Uninitialized -> LoadingScript -> Creating -> Ready ->
//! Destroyed`. Asynchronous completions (script load, instance ready) come
//! back as [`EmbedEvent`]s carrying the [`CallbackTicket`] issued when they
//! were requested; only the currently registered ticket is honoured, so a
//! completion that lands after teardown cannot create a mount point or
//! resurrect an instance.

use std::fmt;
use std::mem;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, info, warn};

use crate::infra::embed_api::{
    EmbedApi, EmbedError, EmbedInstance, MountPoint, PlayerOptions,
};

/// Future resolving to the event the adapter is waiting for.
pub type EmbedFuture = BoxFuture<'static, EmbedEvent>;

/// Identifies one outstanding asynchronous callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum EmbedEvent {
    /// The loader script finished and the API signalled readiness.
    ScriptLoaded {
        ticket: CallbackTicket,
        result: Result<(), EmbedError>,
    },
    /// A constructed instance fired its ready callback.
    InstanceReady {
        ticket: CallbackTicket,
        result: Result<(), EmbedError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedPhase {
    Uninitialized,
    LoadingScript,
    /// Instance constructed, waiting for its ready callback
    Creating,
    Ready,
    Destroyed,
    /// Script load or instance creation failed; inert until reactivated
    Failed,
}

/// What the caller has to do after driving the adapter.
pub enum EmbedStep {
    /// Nothing to do.
    Idle,
    /// Await the future and feed its event back through
    /// [`EmbeddedPlayer::handle_event`].
    Pending(EmbedFuture),
    /// The instance became ready and was told to play.
    Ready { duration: f64 },
    /// The live instance was switched to another video in place.
    Reloaded,
    /// Embedding failed; the player stays inert.
    Failed(EmbedError),
}

impl fmt::Debug for EmbedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedStep::Idle => write!(f, "Idle"),
            EmbedStep::Pending(_) => write!(f, "Pending(<future>)"),
            EmbedStep::Ready { duration } => {
                write!(f, "Ready {{ duration: {duration} }}")
            }
            EmbedStep::Reloaded => write!(f, "Reloaded"),
            EmbedStep::Failed(err) => write!(f, "Failed({err})"),
        }
    }
}

/// Element hosting the player's mount points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountContainer {
    mounts: Vec<MountPoint>,
}

impl MountContainer {
    fn attach(&mut self, mount: MountPoint) {
        self.mounts.push(mount);
    }

    fn detach(&mut self, mount: &MountPoint) {
        self.mounts.retain(|attached| attached != mount);
    }

    pub fn mounts(&self) -> &[MountPoint] {
        &self.mounts
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

#[derive(Debug)]
enum Slot {
    Empty,
    LoadingScript {
        video_id: String,
    },
    Creating {
        video_id: String,
        mount: MountPoint,
        instance: Box<dyn EmbedInstance>,
        ticket: CallbackTicket,
    },
    Ready {
        video_id: String,
        mount: MountPoint,
        instance: Box<dyn EmbedInstance>,
    },
}

#[derive(Debug)]
pub struct EmbeddedPlayer {
    api: Arc<dyn EmbedApi>,
    slot: Slot,
    /// Phase reported while the slot is empty
    idle_phase: EmbedPhase,
    /// One-shot "API ready" registration
    api_ready_callback: Option<CallbackTicket>,
    /// Identifier whose script load or creation failed; not retried
    failed_id: Option<String>,
    container: MountContainer,
    next_ticket: u64,
}

impl EmbeddedPlayer {
    pub fn new(api: Arc<dyn EmbedApi>) -> Self {
        Self {
            api,
            slot: Slot::Empty,
            idle_phase: EmbedPhase::Uninitialized,
            api_ready_callback: None,
            failed_id: None,
            container: MountContainer::default(),
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> EmbedPhase {
        match self.slot {
            Slot::Empty => self.idle_phase,
            Slot::LoadingScript { .. } => EmbedPhase::LoadingScript,
            Slot::Creating { .. } => EmbedPhase::Creating,
            Slot::Ready { .. } => EmbedPhase::Ready,
        }
    }

    /// Identifier the adapter is currently bound to, if any.
    pub fn video_id(&self) -> Option<&str> {
        match &self.slot {
            Slot::Empty => None,
            Slot::LoadingScript { video_id }
            | Slot::Creating { video_id, .. }
            | Slot::Ready { video_id, .. } => Some(video_id),
        }
    }

    pub fn container(&self) -> &MountContainer {
        &self.container
    }

    pub fn has_pending_api_callback(&self) -> bool {
        self.api_ready_callback.is_some()
    }

    /// The live instance, only once it reported ready.
    pub fn instance(&self) -> Option<&(dyn EmbedInstance + 'static)> {
        match &self.slot {
            Slot::Ready { instance, .. } => Some(instance.as_ref()),
            _ => None,
        }
    }

    pub fn instance_mut(
        &mut self,
    ) -> Option<&mut (dyn EmbedInstance + 'static)> {
        match &mut self.slot {
            Slot::Ready { instance, .. } => Some(instance.as_mut()),
            _ => None,
        }
    }

    /// Bind the adapter to `video_id`, creating, reusing or restarting the
    /// instance as needed.
    pub fn activate(&mut self, video_id: &str) -> EmbedStep {
        if video_id.is_empty() {
            warn!("[Embed] Refusing to embed without a video id");
            self.deactivate();
            return EmbedStep::Failed(EmbedError::MissingVideoId);
        }

        if matches!(self.slot, Slot::Empty)
            && self.failed_id.as_deref() == Some(video_id)
        {
            debug!("[Embed] `{video_id}` already failed; not retrying");
            return EmbedStep::Idle;
        }

        match &mut self.slot {
            Slot::Ready {
                video_id: current,
                instance,
                ..
            } => {
                if current == video_id {
                    return EmbedStep::Idle;
                }
                info!(
                    "[Embed] Loading `{video_id}` into live instance (was `{current}`)"
                );
                instance.load_video_by_id(video_id);
                instance.play();
                *current = video_id.to_string();
                return EmbedStep::Reloaded;
            }
            Slot::LoadingScript { video_id: current }
            | Slot::Creating {
                video_id: current, ..
            } => {
                if current == video_id {
                    return EmbedStep::Idle;
                }
                debug!(
                    "[Embed] `{video_id}` requested before `{current}` was ready; restarting"
                );
                self.deactivate();
            }
            Slot::Empty => {}
        }

        self.start(video_id)
    }

    /// Feed back the event produced by a [`EmbedStep::Pending`] future.
    ///
    /// `autoplay` is the session's playing flag at the time the event
    /// arrives; a ready instance is only started when it is set.
    pub fn handle_event(
        &mut self,
        event: EmbedEvent,
        autoplay: bool,
    ) -> EmbedStep {
        match event {
            EmbedEvent::ScriptLoaded { ticket, result } => {
                if self.api_ready_callback != Some(ticket) {
                    debug!("[Embed] Ignoring stale api-ready callback");
                    return EmbedStep::Idle;
                }
                self.api_ready_callback = None;

                let Slot::LoadingScript { video_id } =
                    mem::replace(&mut self.slot, Slot::Empty)
                else {
                    return EmbedStep::Idle;
                };

                match result {
                    Ok(()) => {
                        debug!("[Embed] Player api ready");
                        self.create(&video_id)
                    }
                    Err(err) => {
                        warn!("[Embed] {err}; player stays inert");
                        self.idle_phase = EmbedPhase::Failed;
                        self.failed_id = Some(video_id);
                        EmbedStep::Failed(err)
                    }
                }
            }
            EmbedEvent::InstanceReady { ticket, result } => {
                match mem::replace(&mut self.slot, Slot::Empty) {
                    Slot::Creating {
                        video_id,
                        mount,
                        mut instance,
                        ticket: expected,
                    } if expected == ticket => match result {
                        Ok(()) => {
                            if autoplay {
                                instance.play();
                            } else {
                                debug!("[Embed] Holding `{video_id}` paused");
                            }
                            let duration = instance.duration();
                            info!(
                                "[Embed] Instance ready for `{video_id}` ({duration:.1}s)"
                            );
                            self.slot = Slot::Ready {
                                video_id,
                                mount,
                                instance,
                            };
                            EmbedStep::Ready { duration }
                        }
                        Err(err) => {
                            warn!("[Embed] {err}; player stays inert");
                            instance.destroy();
                            self.container.detach(&mount);
                            self.idle_phase = EmbedPhase::Failed;
                            self.failed_id = Some(video_id);
                            EmbedStep::Failed(err)
                        }
                    },
                    other => {
                        self.slot = other;
                        debug!("[Embed] Ignoring stale instance-ready callback");
                        EmbedStep::Idle
                    }
                }
            }
        }
    }

    /// Destroy the instance, remove its mount point and drop any pending
    /// api-ready registration. A remembered failure is forgotten too.
    pub fn deactivate(&mut self) {
        self.api_ready_callback = None;
        self.failed_id = None;

        match mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Creating {
                mut instance,
                mount,
                video_id,
                ..
            }
            | Slot::Ready {
                mut instance,
                mount,
                video_id,
            } => {
                info!("[Embed] Destroying instance for `{video_id}`");
                instance.destroy();
                self.container.detach(&mount);
                self.idle_phase = EmbedPhase::Destroyed;
            }
            Slot::LoadingScript { video_id } => {
                debug!("[Embed] Abandoning script load for `{video_id}`");
                self.idle_phase = EmbedPhase::Destroyed;
            }
            Slot::Empty => {}
        }
    }

    /// Allow an identifier that failed to be embedded again.
    pub fn forget_failure(&mut self) {
        self.failed_id = None;
    }

    fn start(&mut self, video_id: &str) -> EmbedStep {
        self.failed_id = None;
        if self.api.is_available() {
            return self.create(video_id);
        }

        let ticket = self.issue_ticket();
        self.api_ready_callback = Some(ticket);
        self.slot = Slot::LoadingScript {
            video_id: video_id.to_string(),
        };
        info!("[Embed] Player api missing; injecting loader script");

        let loaded = self
            .api
            .inject_script()
            .map(move |result| EmbedEvent::ScriptLoaded { ticket, result })
            .boxed();
        EmbedStep::Pending(loaded)
    }

    fn create(&mut self, video_id: &str) -> EmbedStep {
        let mount = MountPoint::for_video(video_id);
        self.container.attach(mount.clone());

        let options = PlayerOptions {
            video_id: video_id.to_string(),
        };
        match self.api.create_player(&mount, options) {
            Ok(instance) => {
                let ticket = self.issue_ticket();
                let ready = instance
                    .ready()
                    .map(move |result| EmbedEvent::InstanceReady {
                        ticket,
                        result,
                    })
                    .boxed();
                debug!("[Embed] Created instance on `{}`", mount.id());
                self.slot = Slot::Creating {
                    video_id: video_id.to_string(),
                    mount,
                    instance,
                    ticket,
                };
                EmbedStep::Pending(ready)
            }
            Err(err) => {
                warn!("[Embed] {err}; player stays inert");
                self.container.detach(&mount);
                self.slot = Slot::Empty;
                self.idle_phase = EmbedPhase::Failed;
                self.failed_id = Some(video_id.to_string());
                EmbedStep::Failed(err)
            }
        }
    }

    fn issue_ticket(&mut self) -> CallbackTicket {
        self.next_ticket += 1;
        CallbackTicket(self.next_ticket)
    }
}

impl Drop for EmbeddedPlayer {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::embed_api::{MockEmbedApi, MockEmbedInstance};
    use futures::executor::block_on;
    use mockall::predicate::eq;

    fn ready_instance(duration: f64) -> MockEmbedInstance {
        let mut instance = MockEmbedInstance::new();
        instance
            .expect_ready()
            .returning(|| Box::pin(async { Ok(()) }));
        instance.expect_play().times(1).return_const(());
        instance.expect_duration().return_const(duration);
        instance.expect_destroy().return_const(());
        instance
    }

    fn drive(player: &mut EmbeddedPlayer, step: EmbedStep) -> EmbedStep {
        match step {
            EmbedStep::Pending(future) => {
                let event = block_on(future);
                let next = player.handle_event(event, true);
                drive(player, next)
            }
            other => other,
        }
    }

    #[test]
    fn creates_directly_when_api_available() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        api.expect_inject_script().times(0);
        let instance = ready_instance(212.0);
        api.expect_create_player()
            .times(1)
            .withf(|mount, options| {
                mount.id() == "yt-player-abc" && options.video_id == "abc"
            })
            .return_once(move |_, _| {
                Ok(Box::new(instance) as Box<dyn EmbedInstance>)
            });

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        assert_eq!(player.phase(), EmbedPhase::Uninitialized);

        let step = player.activate("abc");
        assert_eq!(player.phase(), EmbedPhase::Creating);
        assert_eq!(player.container().mounts().len(), 1);
        assert!(player.instance().is_none());

        match drive(&mut player, step) {
            EmbedStep::Ready { duration } => assert_eq!(duration, 212.0),
            other => panic!("expected ready, got {other:?}"),
        }
        assert_eq!(player.phase(), EmbedPhase::Ready);
        assert!(player.instance().is_some());
    }

    #[test]
    fn loads_script_when_api_missing() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(false);
        api.expect_inject_script()
            .times(1)
            .returning(|| Box::pin(async { Ok(()) }));
        let instance = ready_instance(60.0);
        api.expect_create_player()
            .times(1)
            .return_once(move |_, _| {
                Ok(Box::new(instance) as Box<dyn EmbedInstance>)
            });

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let step = player.activate("abc");
        assert_eq!(player.phase(), EmbedPhase::LoadingScript);
        assert!(player.has_pending_api_callback());
        assert!(player.container().is_empty());

        let step = drive(&mut player, step);
        assert!(matches!(step, EmbedStep::Ready { .. }));
        assert!(!player.has_pending_api_callback());
        assert_eq!(player.phase(), EmbedPhase::Ready);
    }

    #[test]
    fn stale_api_callback_after_teardown_is_ignored() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(false);
        api.expect_inject_script()
            .returning(|| Box::pin(async { Ok(()) }));
        api.expect_create_player().times(0);

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let EmbedStep::Pending(future) = player.activate("abc") else {
            panic!("expected pending script load");
        };
        player.deactivate();
        assert!(!player.has_pending_api_callback());

        let step = player.handle_event(block_on(future), true);
        assert!(matches!(step, EmbedStep::Idle));
        assert!(player.container().is_empty());
        assert_eq!(player.phase(), EmbedPhase::Destroyed);
    }

    #[test]
    fn switching_videos_reuses_the_instance() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        let mut instance = MockEmbedInstance::new();
        instance
            .expect_ready()
            .returning(|| Box::pin(async { Ok(()) }));
        instance.expect_duration().return_const(100.0);
        // Once on ready, once after loading the second video.
        instance.expect_play().times(2).return_const(());
        instance
            .expect_load_video_by_id()
            .with(eq("xyz"))
            .times(1)
            .return_const(());
        instance.expect_destroy().return_const(());
        api.expect_create_player()
            .times(1)
            .return_once(move |_, _| {
                Ok(Box::new(instance) as Box<dyn EmbedInstance>)
            });

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let step = player.activate("abc");
        drive(&mut player, step);

        assert!(matches!(player.activate("xyz"), EmbedStep::Reloaded));
        assert_eq!(player.video_id(), Some("xyz"));
        assert!(matches!(player.activate("xyz"), EmbedStep::Idle));
        assert_eq!(player.container().mounts().len(), 1);
    }

    #[test]
    fn deactivate_destroys_and_unmounts() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        let mut instance = MockEmbedInstance::new();
        instance
            .expect_ready()
            .returning(|| Box::pin(async { Ok(()) }));
        instance.expect_play().return_const(());
        instance.expect_duration().return_const(30.0);
        instance.expect_destroy().times(1).return_const(());
        api.expect_create_player()
            .return_once(move |_, _| {
                Ok(Box::new(instance) as Box<dyn EmbedInstance>)
            });

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let step = player.activate("abc");
        drive(&mut player, step);

        player.deactivate();
        assert_eq!(player.phase(), EmbedPhase::Destroyed);
        assert!(player.container().is_empty());
        assert!(player.instance().is_none());
        // Second teardown has nothing left to destroy.
        player.deactivate();
    }

    #[test]
    fn late_ready_after_teardown_does_not_resurrect() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        let mut instance = MockEmbedInstance::new();
        instance
            .expect_ready()
            .returning(|| Box::pin(async { Ok(()) }));
        instance.expect_play().times(0);
        instance.expect_destroy().times(1).return_const(());
        api.expect_create_player()
            .return_once(move |_, _| {
                Ok(Box::new(instance) as Box<dyn EmbedInstance>)
            });

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let EmbedStep::Pending(ready) = player.activate("abc") else {
            panic!("expected pending ready");
        };
        player.deactivate();

        let step = player.handle_event(block_on(ready), true);
        assert!(matches!(step, EmbedStep::Idle));
        assert_eq!(player.phase(), EmbedPhase::Destroyed);
    }

    #[test]
    fn creation_failure_leaves_player_inert() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        api.expect_create_player()
            .returning(|_, _| Err(EmbedError::CreateFailed("boom".into())));

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let step = player.activate("abc");
        assert!(matches!(step, EmbedStep::Failed(EmbedError::CreateFailed(_))));
        assert_eq!(player.phase(), EmbedPhase::Failed);
        assert!(player.container().is_empty());
    }

    #[test]
    fn failed_video_is_not_retried_until_forgotten() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        api.expect_create_player()
            .times(2)
            .returning(|_, _| Err(EmbedError::CreateFailed("boom".into())));

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        assert!(matches!(player.activate("abc"), EmbedStep::Failed(_)));
        assert!(matches!(player.activate("abc"), EmbedStep::Idle));
        assert_eq!(player.phase(), EmbedPhase::Failed);

        player.forget_failure();
        assert!(matches!(player.activate("abc"), EmbedStep::Failed(_)));
    }

    #[test]
    fn ready_instance_stays_paused_without_autoplay() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().return_const(true);
        let mut instance = MockEmbedInstance::new();
        instance
            .expect_ready()
            .returning(|| Box::pin(async { Ok(()) }));
        instance.expect_play().times(0);
        instance.expect_duration().return_const(45.0);
        instance.expect_destroy().return_const(());
        api.expect_create_player()
            .return_once(move |_, _| {
                Ok(Box::new(instance) as Box<dyn EmbedInstance>)
            });

        let mut player = EmbeddedPlayer::new(Arc::new(api));
        let EmbedStep::Pending(ready) = player.activate("abc") else {
            panic!("expected pending ready");
        };
        let step = player.handle_event(block_on(ready), false);
        assert!(matches!(step, EmbedStep::Ready { duration } if duration == 45.0));
        assert_eq!(player.phase(), EmbedPhase::Ready);
    }

    #[test]
    fn empty_video_id_is_rejected() {
        let mut api = MockEmbedApi::new();
        api.expect_is_available().times(0);
        let mut player = EmbeddedPlayer::new(Arc::new(api));
        assert!(matches!(
            player.activate(""),
            EmbedStep::Failed(EmbedError::MissingVideoId)
        ));
    }
}

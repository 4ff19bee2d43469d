//! In-process stand-in for the native player, for tests and machines
//! without mpv.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{LaunchRequest, NativeBackend, NativeError, NativeHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeSnapshot {
    pub url: String,
    pub title: String,
    pub paused: bool,
    pub running: bool,
}

#[derive(Debug, Default)]
struct Shared {
    fail_launch: bool,
    launches: Mutex<Vec<Arc<Mutex<NativeSnapshot>>>>,
}

/// Records launches; clones share every launched player.
#[derive(Debug, Clone, Default)]
pub struct SimulatedNativeBackend {
    shared: Arc<Shared>,
}

impl SimulatedNativeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every launch fails, as if the executable were missing.
    pub fn failing() -> Self {
        Self {
            shared: Arc::new(Shared {
                fail_launch: true,
                ..Default::default()
            }),
        }
    }

    pub fn launches(&self) -> usize {
        self.shared.launches.lock().len()
    }

    pub fn running(&self) -> usize {
        self.shared
            .launches
            .lock()
            .iter()
            .filter(|player| player.lock().running)
            .count()
    }

    pub fn latest(&self) -> Option<NativeSnapshot> {
        self.shared
            .launches
            .lock()
            .last()
            .map(|player| player.lock().clone())
    }

    /// The user closes the most recent player window.
    pub fn close_latest(&self) {
        if let Some(player) = self.shared.launches.lock().last() {
            player.lock().running = false;
        }
    }
}

impl NativeBackend for SimulatedNativeBackend {
    fn launch(
        &self,
        request: LaunchRequest,
    ) -> Result<Box<dyn NativeHandle>, NativeError> {
        if self.shared.fail_launch {
            return Err(NativeError::Launch {
                command: "simulated".to_string(),
                reason: "launch disabled".to_string(),
            });
        }

        let player = Arc::new(Mutex::new(NativeSnapshot {
            url: request.url,
            title: request.title,
            paused: request.start_paused,
            running: true,
        }));
        self.shared.launches.lock().push(Arc::clone(&player));
        Ok(Box::new(SimulatedNativeHandle { player }))
    }
}

#[derive(Debug)]
struct SimulatedNativeHandle {
    player: Arc<Mutex<NativeSnapshot>>,
}

impl NativeHandle for SimulatedNativeHandle {
    fn set_paused(&mut self, paused: bool) -> Result<(), NativeError> {
        let mut player = self.player.lock();
        if !player.running {
            return Err(NativeError::Exited);
        }
        player.paused = paused;
        Ok(())
    }

    fn is_alive(&mut self) -> bool {
        self.player.lock().running
    }

    fn stop(&mut self) {
        self.player.lock().running = false;
    }
}

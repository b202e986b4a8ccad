//! Tick actor: dedicated thread for the logic-update loop.

use super::pacing::Pacer;
use crate::Game;
use std::sync::atomic::{AtomicBool, AtomicU32};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Runs [`Game::on_tick`] at the configured tick rate on its own thread.
pub struct TickActor {
    handle: Option<JoinHandle<()>>,
}

impl TickActor {
    /// Spawn the tick loop.
    ///
    /// `rate` is shared with the engine handle; changes take effect on the
    /// next poll. `shutdown` is the engine-wide stop signal.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    pub fn spawn(game: Arc<dyn Game>, rate: Arc<AtomicU32>, shutdown: Arc<AtomicBool>) -> Self {
        let handle = thread::Builder::new()
            .name("asciiloop-tick".to_string())
            .spawn(move || {
                let mut pacer = Pacer::new(rate);
                while pacer.wait(&shutdown) {
                    game.on_tick();
                    pacer.mark();
                }
            })
            .expect("Failed to spawn tick thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the tick thread to finish (the shutdown flag must already be
    /// set, or the thread will keep ticking).
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

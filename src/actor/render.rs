//! Render actor: dedicated thread for the draw loop.
//!
//! This actor owns the [`BufferSet`] and the persistent [`DrawState`]. Each
//! iteration it hands the application a fresh [`Canvas`] over the write
//! grid, performs exactly one swap when the draw callback returns, then
//! publishes a snapshot of the new read grid to the presenter channel.
//! Within an iteration draw-callback execution therefore always precedes the
//! swap, and swaps are strictly serialized by happening on this one thread.

use super::pacing::Pacer;
use crate::draw::{Canvas, DrawState};
use crate::grid::BufferSet;
use crate::present::Frame;
use crate::Game;
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, AtomicU32};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Runs [`Game::on_render`] plus the buffer swap at the configured render
/// rate on its own thread.
pub struct RenderActor {
    handle: Option<JoinHandle<()>>,
}

impl RenderActor {
    /// Spawn the render loop.
    ///
    /// The actor takes ownership of the buffer set; frames flow out through
    /// `frame_tx` with `try_send`, so a slow presenter drops frames instead
    /// of queueing them.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    pub fn spawn(
        game: Arc<dyn Game>,
        rate: Arc<AtomicU32>,
        shutdown: Arc<AtomicBool>,
        buffers: BufferSet,
        frame_tx: Sender<Frame>,
    ) -> Self {
        let handle = thread::Builder::new()
            .name("asciiloop-render".to_string())
            .spawn(move || {
                Self::run_loop(game.as_ref(), rate, &shutdown, buffers, &frame_tx);
            })
            .expect("Failed to spawn render thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the render thread to finish (the shutdown flag must already
    /// be set).
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(
        game: &dyn Game,
        rate: Arc<AtomicU32>,
        shutdown: &AtomicBool,
        mut buffers: BufferSet,
        frame_tx: &Sender<Frame>,
    ) {
        let mut pacer = Pacer::new(rate);
        let mut state = DrawState::default();

        while pacer.wait(shutdown) {
            {
                let mut canvas = Canvas::new(&mut buffers, &mut state);
                game.on_render(&mut canvas);
            }
            // Exactly one swap per iteration, after all draw calls — even if
            // the callback wrote nothing, a new front buffer is exposed.
            buffers.swap();
            let _ = frame_tx.try_send(Frame::from_grid(buffers.read_grid()));
            pacer.mark();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    struct BoxGame {
        renders: AtomicU64,
    }

    impl Game for BoxGame {
        fn on_tick(&self) {}

        fn on_render(&self, canvas: &mut Canvas<'_>) {
            self.renders.fetch_add(1, Ordering::Relaxed);
            canvas.clear();
            canvas.set_brush('A');
            canvas.set_color(2);
            canvas.rect(0, 0, 10, 10, true);
        }
    }

    #[test]
    fn test_render_loop_draws_swaps_and_publishes() {
        let game = Arc::new(BoxGame {
            renders: AtomicU64::new(0),
        });
        let rate = Arc::new(AtomicU32::new(50));
        let shutdown = Arc::new(AtomicBool::new(false));
        let (frame_tx, frame_rx) = bounded(2);

        let actor = RenderActor::spawn(
            game.clone(),
            rate,
            shutdown.clone(),
            BufferSet::new(96, 54),
            frame_tx,
        );

        let frame = frame_rx
            .recv_timeout(Duration::from_millis(500))
            .expect("no frame published");
        shutdown.store(true, Ordering::Relaxed);
        actor.join();

        assert!(game.renders.load(Ordering::Relaxed) >= 1);
        assert_eq!(frame.width, 96);
        assert_eq!(frame.height, 54);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(frame.char_at(x, y), Some('A'));
                assert_eq!(frame.color_at(x, y), Some(2));
            }
        }
        assert_eq!(frame.char_at(10, 0), Some(' '));
        assert_eq!(frame.color_at(10, 0), Some(0));
    }

    #[test]
    fn test_slow_consumer_drops_frames_without_stalling() {
        let game = Arc::new(BoxGame {
            renders: AtomicU64::new(0),
        });
        let rate = Arc::new(AtomicU32::new(200));
        let shutdown = Arc::new(AtomicBool::new(false));
        // Nobody ever drains this channel beyond its capacity of 2.
        let (frame_tx, frame_rx) = bounded(2);

        let actor = RenderActor::spawn(
            game.clone(),
            rate,
            shutdown.clone(),
            BufferSet::new(8, 8),
            frame_tx,
        );
        thread::sleep(Duration::from_millis(200));
        shutdown.store(true, Ordering::Relaxed);
        actor.join();

        // The render loop kept iterating even though the channel was full.
        assert!(game.renders.load(Ordering::Relaxed) > 2);
        assert_eq!(frame_rx.len(), 2);
    }
}

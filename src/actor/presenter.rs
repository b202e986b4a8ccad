//! Presenter actor: dedicated thread feeding frames to the presentation
//! consumer.
//!
//! Sits on the receiving end of the render actor's frame channel. The
//! consumer samples frames at its own pace; if it falls behind, the bounded
//! channel makes the render actor drop frames rather than queue them.

use crate::grid::Palette;
use crate::present::{Frame, Presenter};
use crossbeam_channel::Receiver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long one receive waits before re-checking the shutdown flag.
const RECV_TIMEOUT: Duration = Duration::from_millis(16);

/// Runs a [`Presenter`] on its own thread.
pub struct PresenterActor {
    handle: Option<JoinHandle<()>>,
}

impl PresenterActor {
    /// Spawn the presenter thread.
    ///
    /// The palette is captured here: it is replaced wholesale via
    /// configuration, never edited mid-run, so every frame is painted
    /// against a consistent table.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    pub fn spawn(
        frame_rx: Receiver<Frame>,
        mut presenter: Box<dyn Presenter>,
        palette: Palette,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        let handle = thread::Builder::new()
            .name("asciiloop-present".to_string())
            .spawn(move || loop {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
                match frame_rx.recv_timeout(RECV_TIMEOUT) {
                    Ok(frame) => {
                        if let Err(e) = presenter.present(&frame, &palette) {
                            eprintln!("Presenter error: {e}");
                            break;
                        }
                    }
                    Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
                    Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
                }
            })
            .expect("Failed to spawn presenter thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the presenter thread to finish (the shutdown flag must
    /// already be set).
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};
    use crossbeam_channel::bounded;
    use std::io;
    use std::sync::atomic::AtomicU64;

    struct CountingPresenter {
        presented: Arc<AtomicU64>,
    }

    impl Presenter for CountingPresenter {
        fn present(&mut self, _frame: &Frame, _palette: &Palette) -> io::Result<()> {
            self.presented.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    #[test]
    fn test_presenter_actor_consumes_frames() {
        let presented = Arc::new(AtomicU64::new(0));
        let (frame_tx, frame_rx) = bounded(2);
        let shutdown = Arc::new(AtomicBool::new(false));

        let actor = PresenterActor::spawn(
            frame_rx,
            Box::new(CountingPresenter {
                presented: presented.clone(),
            }),
            Palette::default(),
            shutdown.clone(),
        );

        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, Cell::new('x', 1));
        frame_tx.send(Frame::from_grid(&grid)).unwrap();
        frame_tx.send(Frame::from_grid(&grid)).unwrap();

        thread::sleep(Duration::from_millis(100));
        shutdown.store(true, Ordering::Relaxed);
        actor.join();

        assert_eq!(presented.load(Ordering::Relaxed), 2);
    }
}

//! Static scene demo: incremental drawing with `sync_buffer`.
//!
//! Nothing clears the canvas here. Each render pass adds one more dot of a
//! spiral and then syncs the buffers, so everything drawn on earlier frames
//! persists across the swap. Press Esc to quit.

use asciiloop::{Canvas, Engine, EngineConfig, Game, KeyCode, KeyEvent, KeyState, TermPresenter};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

struct Spiral {
    step: AtomicU32,
}

impl Game for Spiral {
    fn on_tick(&self) {
        self.step.fetch_add(1, Ordering::Relaxed);
    }

    fn on_render(&self, canvas: &mut Canvas<'_>) {
        let step = self.step.load(Ordering::Relaxed);
        let t = f64::from(step) * 0.15;
        let r = f64::from(step) * 0.06;
        let cx = f64::from(canvas.width()) / 2.0;
        let cy = f64::from(canvas.height()) / 2.0;

        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (
            (cx + t.cos() * r * 2.0) as i32,
            (cy + t.sin() * r) as i32,
        );

        canvas.set_color(u8::try_from(step % 15).unwrap_or(0) + 1);
        canvas.set_brush('o');
        canvas.point(x, y);

        // Persist everything drawn so far across the swap.
        canvas.sync_buffer();
    }

    fn on_key(&self, event: KeyEvent) {
        // Space restarts the spiral (the old trail stays until overdrawn).
        if event.code == KeyCode::Char(' ') && event.state == KeyState::Pressed {
            self.step.store(0, Ordering::Relaxed);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EngineConfig::default();
    config.render_rate = 60;
    config.tick_rate = 60;

    let engine = Engine::new(config)?;
    engine.run(
        Arc::new(Spiral {
            step: AtomicU32::new(0),
        }),
        Box::new(TermPresenter::new()?),
    );
    Ok(())
}

//! Bounce demo: a box ricocheting inside a double-ruled border.
//!
//! Clear-per-frame drawing — the canvas is wiped at the start of every
//! render pass, so the moving box leaves no trail. Press Esc to quit.

use asciiloop::{Canvas, Engine, EngineConfig, Game, TermPresenter};
use std::sync::Arc;
use std::sync::Mutex;

struct BoxState {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

struct Bounce {
    state: Mutex<BoxState>,
    width: i32,
    height: i32,
}

const BOX_W: i32 = 6;
const BOX_H: i32 = 3;

impl Game for Bounce {
    fn on_tick(&self) {
        let mut s = self.state.lock().unwrap();
        s.x += s.dx;
        s.y += s.dy;
        // Bounce off the inside of the border.
        if s.x <= 1 || s.x + BOX_W >= self.width - 1 {
            s.dx = -s.dx;
        }
        if s.y <= 1 || s.y + BOX_H >= self.height - 1 {
            s.dy = -s.dy;
        }
    }

    fn on_render(&self, canvas: &mut Canvas<'_>) {
        let (x, y) = {
            let s = self.state.lock().unwrap();
            (s.x, s.y)
        };

        canvas.clear();
        canvas.set_color(7);
        canvas.draw_perimeter(0, 0, self.width, self.height);
        canvas.set_color(4);
        canvas.set_brush('█');
        canvas.rect(x, y, BOX_W, BOX_H, true);
        canvas.set_color(8);
        canvas.text(2, 0, " bounce — Esc quits ");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EngineConfig::default();
    config.tick_rate = 30;
    config.render_rate = 30;
    let width = i32::from(config.grid_width);
    let height = i32::from(config.grid_height);

    let engine = Engine::new(config)?;
    let game = Arc::new(Bounce {
        state: Mutex::new(BoxState {
            x: 10,
            y: 8,
            dx: 1,
            dy: 1,
        }),
        width,
        height,
    });

    engine.run(game, Box::new(TermPresenter::new()?));
    Ok(())
}

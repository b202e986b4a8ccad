//! Engine: validated configuration, the application seam, and the
//! load → run → stop → save lifecycle.
//!
//! The engine is an explicit value constructed once at startup — there is no
//! process-wide state anywhere. It spawns the input, tick, render, and
//! presenter actors, dispatches key events on the calling thread until the
//! stop signal fires, then joins the actors and invokes the save hook.

use super::input::InputActor;
use super::messages::{KeyCode, KeyEvent, KeyState};
use super::presenter::PresenterActor;
use super::render::RenderActor;
use super::tick::TickActor;
use crate::draw::Canvas;
use crate::grid::{BufferSet, Palette};
use crate::present::{Frame, Presenter};
use crossbeam_channel::bounded;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Malformed configuration, rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid width or height is zero.
    ZeroDimension,
    /// Tick or render rate is zero.
    ZeroRate,
    /// The palette has no entries.
    EmptyPalette,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "grid dimensions must be non-zero"),
            Self::ZeroRate => write!(f, "tick and render rates must be non-zero"),
            Self::EmptyPalette => write!(f, "palette must have at least one entry"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A named presentation-resolution record: pixel dimensions plus the glyph
/// pixel size.
///
/// One record instead of parallel preset arrays, so the three values can
/// never fall out of correlation. Purely a hint for the presentation layer;
/// the core never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPreset {
    /// Window width in pixels.
    pub pixel_width: u32,
    /// Window height in pixels.
    pub pixel_height: u32,
    /// Glyph size in pixels.
    pub glyph_size: u32,
}

impl ResolutionPreset {
    /// 1920×1080, 20px glyphs.
    pub const HD_1080: Self = Self {
        pixel_width: 1920,
        pixel_height: 1080,
        glyph_size: 20,
    };
    /// 1280×720, 14px glyphs.
    pub const HD_720: Self = Self {
        pixel_width: 1280,
        pixel_height: 720,
        glyph_size: 14,
    };
    /// 2560×1440, 28px glyphs.
    pub const QHD_1440: Self = Self {
        pixel_width: 2560,
        pixel_height: 1440,
        glyph_size: 28,
    };

    /// The named presets, in selection order.
    pub const ALL: [Self; 3] = [Self::HD_1080, Self::HD_720, Self::QHD_1440];
}

impl Default for ResolutionPreset {
    fn default() -> Self {
        Self::HD_1080
    }
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Canvas width in characters.
    pub grid_width: u16,
    /// Canvas height in characters.
    pub grid_height: u16,
    /// Tick loop target rate, invocations per second.
    pub tick_rate: u32,
    /// Render loop target rate, invocations per second.
    pub render_rate: u32,
    /// The color table frames are painted against.
    pub palette: Palette,
    /// Presentation-layer resolution hint.
    pub resolution: ResolutionPreset,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_width: 96,
            grid_height: 54,
            tick_rate: 15,
            render_rate: 15,
            palette: Palette::default(),
            resolution: ResolutionPreset::default(),
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.tick_rate == 0 || self.render_rate == 0 {
            return Err(ConfigError::ZeroRate);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

/// The application capability interface.
///
/// Supplied to the engine at construction; the engine never depends on
/// application types beyond this trait. `on_tick` and `on_render` run on
/// different threads concurrently — implementations protect any state
/// touched from both (interior mutability, typically a `Mutex` or atomics).
pub trait Game: Send + Sync + 'static {
    /// Called once, before the first tick. Load state here.
    fn on_load(&self) {}

    /// Called once, after the loops have stopped and before
    /// [`Engine::run`] returns. Best-effort: not atomic with in-flight
    /// tick or render work.
    fn on_save(&self) {}

    /// One logic update. Invoked at the tick rate on the tick thread. Must
    /// not touch the grid; drawing belongs in [`on_render`](Self::on_render).
    fn on_tick(&self);

    /// One draw pass. Invoked at the render rate on the render thread; the
    /// canvas writes into the back buffer, which is swapped and published
    /// when this returns.
    fn on_render(&self, canvas: &mut Canvas<'_>);

    /// A key event. The escape key has already triggered the stop signal by
    /// the time this sees it.
    fn on_key(&self, event: KeyEvent) {
        let _ = event;
    }
}

/// Cloneable control surface shared with the application.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    stop: Arc<AtomicBool>,
    tick_rate: Arc<AtomicU32>,
    render_rate: Arc<AtomicU32>,
}

impl EngineHandle {
    /// Fire the stop signal: loops wind down and [`Engine::run`] returns
    /// after the save hook.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the stop signal has fired.
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Change the tick rate. Takes effect on the tick loop's next poll.
    pub fn set_tick_rate(&self, rate: u32) {
        self.tick_rate.store(rate, Ordering::Relaxed);
    }

    /// Change the render rate. Takes effect on the render loop's next poll.
    pub fn set_render_rate(&self, rate: u32) {
        self.render_rate.store(rate, Ordering::Relaxed);
    }
}

/// The engine value: owns the configuration and the shared control state.
pub struct Engine {
    config: EngineConfig,
    stop: Arc<AtomicBool>,
    tick_rate: Arc<AtomicU32>,
    render_rate: Arc<AtomicU32>,
}

impl Engine {
    /// Create an engine, failing fast on malformed configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tick_rate = Arc::new(AtomicU32::new(config.tick_rate));
        let render_rate = Arc::new(AtomicU32::new(config.render_rate));
        Ok(Self {
            config,
            stop: Arc::new(AtomicBool::new(false)),
            tick_rate,
            render_rate,
        })
    }

    /// The control handle. Clone it into the application before `run`.
    pub fn handle(&self) -> EngineHandle {
        EngineHandle {
            stop: self.stop.clone(),
            tick_rate: self.tick_rate.clone(),
            render_rate: self.render_rate.clone(),
        }
    }

    /// The validated configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the engine until the stop signal fires.
    ///
    /// Lifecycle: `on_load`, spawn the actors, dispatch key events on this
    /// thread, then — once stopped — join the actors and call `on_save`.
    /// Escape presses fire the stop signal before the event is forwarded.
    pub fn run(self, game: Arc<dyn Game>, presenter: Box<dyn Presenter>) {
        game.on_load();

        // Small buffers: frames must not queue up behind a slow presenter,
        // and key bursts beyond 64 events can safely drop.
        let (frame_tx, frame_rx) = bounded::<Frame>(2);
        let (key_tx, key_rx) = bounded::<KeyEvent>(64);

        let input = InputActor::spawn(key_tx, self.stop.clone());
        let tick = TickActor::spawn(game.clone(), self.tick_rate.clone(), self.stop.clone());
        let render = RenderActor::spawn(
            game.clone(),
            self.render_rate.clone(),
            self.stop.clone(),
            BufferSet::new(self.config.grid_width, self.config.grid_height),
            frame_tx,
        );
        let present = PresenterActor::spawn(
            frame_rx,
            presenter,
            self.config.palette.clone(),
            self.stop.clone(),
        );

        while !self.stop.load(Ordering::Relaxed) {
            if let Ok(event) = key_rx.recv_timeout(Duration::from_millis(16)) {
                if event.code == KeyCode::Esc && event.state == KeyState::Pressed {
                    self.stop.store(true, Ordering::Relaxed);
                }
                game.on_key(event);
            }
        }

        input.join();
        tick.join();
        render.join();
        present.join();

        game.on_save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::AtomicU64;
    use std::sync::Mutex;

    struct NullPresenter;

    impl Presenter for NullPresenter {
        fn present(&mut self, _frame: &Frame, _palette: &Palette) -> io::Result<()> {
            Ok(())
        }
    }

    struct LifecycleGame {
        handle: EngineHandle,
        loads: AtomicU64,
        ticks: AtomicU64,
        renders: AtomicU64,
        saves: AtomicU64,
        log: Mutex<Vec<&'static str>>,
    }

    impl Game for LifecycleGame {
        fn on_load(&self) {
            self.loads.fetch_add(1, Ordering::Relaxed);
            self.log.lock().unwrap().push("load");
        }

        fn on_save(&self) {
            self.saves.fetch_add(1, Ordering::Relaxed);
            self.log.lock().unwrap().push("save");
        }

        fn on_tick(&self) {
            if self.ticks.fetch_add(1, Ordering::Relaxed) == 0 {
                self.log.lock().unwrap().push("tick");
            }
            if self.ticks.load(Ordering::Relaxed) >= 3
                && self.renders.load(Ordering::Relaxed) >= 1
            {
                self.handle.stop();
            }
        }

        fn on_render(&self, canvas: &mut Canvas<'_>) {
            self.renders.fetch_add(1, Ordering::Relaxed);
            canvas.clear();
            canvas.set_brush('.');
            canvas.point(0, 0);
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = EngineConfig::default();
        config.grid_width = 0;
        assert_eq!(Engine::new(config).err(), Some(ConfigError::ZeroDimension));

        let mut config = EngineConfig::default();
        config.render_rate = 0;
        assert_eq!(Engine::new(config).err(), Some(ConfigError::ZeroRate));

        assert!(Engine::new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_default_config_matches_contract() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_width, 96);
        assert_eq!(config.grid_height, 54);
        assert_eq!(config.tick_rate, 15);
        assert_eq!(config.render_rate, 15);
        assert_eq!(config.palette.len(), 16);
        assert_eq!(config.resolution, ResolutionPreset::HD_1080);
    }

    #[test]
    fn test_lifecycle_order_and_hooks_run_once() {
        let mut config = EngineConfig::default();
        config.tick_rate = 100;
        config.render_rate = 100;
        let engine = Engine::new(config).unwrap();

        let game = Arc::new(LifecycleGame {
            handle: engine.handle(),
            loads: AtomicU64::new(0),
            ticks: AtomicU64::new(0),
            renders: AtomicU64::new(0),
            saves: AtomicU64::new(0),
            log: Mutex::new(Vec::new()),
        });

        engine.run(game.clone(), Box::new(NullPresenter));

        assert_eq!(game.loads.load(Ordering::Relaxed), 1);
        assert_eq!(game.saves.load(Ordering::Relaxed), 1);
        assert!(game.ticks.load(Ordering::Relaxed) >= 3);
        assert!(game.renders.load(Ordering::Relaxed) >= 1);

        let log = game.log.lock().unwrap();
        assert_eq!(log.first(), Some(&"load"));
        assert_eq!(log.last(), Some(&"save"));
    }

    #[test]
    fn test_handle_stop_is_idempotent() {
        let engine = Engine::new(EngineConfig::default()).unwrap();
        let handle = engine.handle();
        assert!(!handle.is_stopped());
        handle.stop();
        handle.stop();
        assert!(handle.is_stopped());
    }

    #[test]
    fn test_handle_rate_changes_are_visible() {
        let engine = Engine::new(EngineConfig::default()).unwrap();
        let handle = engine.handle();
        handle.set_tick_rate(30);
        handle.set_render_rate(60);
        assert_eq!(engine.tick_rate.load(Ordering::Relaxed), 30);
        assert_eq!(engine.render_rate.load(Ordering::Relaxed), 60);
    }

    #[test]
    fn test_resolution_presets() {
        assert_eq!(ResolutionPreset::ALL.len(), 3);
        assert_eq!(ResolutionPreset::HD_720.glyph_size, 14);
        assert_eq!(ResolutionPreset::QHD_1440.pixel_width, 2560);
    }
}

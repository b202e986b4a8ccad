//! # asciiloop
//!
//! A double-buffered ASCII canvas engine with independent tick and render
//! loops.
//!
//! The engine maintains a fixed-size grid of (character, palette-index)
//! cells behind a two-grid double buffer. Two independently rate-limited
//! loops drive it: a tick loop that runs the application's logic callback,
//! and a render loop that runs the draw callback, swaps the buffers, and
//! publishes the finished grid to a presentation consumer — once per
//! iteration, never mid-draw, which is what keeps the output flicker-free
//! without a single lock in the draw path.
//!
//! ## Core concepts
//!
//! - **Double buffering**: [`BufferSet`] owns two [`Grid`]s; draw calls and
//!   presentation always target different grids
//! - **Clipped drawing**: [`Canvas`] primitives silently drop out-of-bounds
//!   writes — shapes can hang off the edge
//! - **Deadline pacing**: each loop sleeps to its next deadline; overruns
//!   are never replayed
//! - **Capability seam**: applications implement [`Game`]; presentation
//!   layers implement [`Presenter`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use asciiloop::{Canvas, Engine, EngineConfig, Game, TermPresenter};
//! use std::sync::Arc;
//!
//! struct Hello;
//!
//! impl Game for Hello {
//!     fn on_tick(&self) {}
//!     fn on_render(&self, canvas: &mut Canvas<'_>) {
//!         canvas.clear();
//!         canvas.set_color(2);
//!         canvas.text(2, 1, "hello");
//!     }
//! }
//!
//! let engine = Engine::new(EngineConfig::default())?;
//! engine.run(Arc::new(Hello), Box::new(TermPresenter::new()?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod draw;
pub mod grid;
pub mod present;

// Re-exports for convenience
pub use actor::{
    ConfigError, Engine, EngineConfig, EngineHandle, Game, KeyCode, KeyEvent, KeyModifiers,
    KeyState, ResolutionPreset,
};
pub use draw::{Canvas, DrawState};
pub use grid::{BufferSet, Cell, Grid, Palette, Rgb, Role};
pub use present::{Frame, Presenter, TermPresenter};

//! Actor module: the engine's threads and the messages between them.
//!
//! Four dedicated threads, coordinated only through channels, atomics, and
//! the buffer set:
//! - **Input**: polls terminal key events, forwards them to the engine loop
//! - **Tick**: invokes the logic-update callback at the tick rate
//! - **Render**: invokes the draw callback, swaps, publishes a frame
//! - **Presenter**: paints each published frame
//!
//! ```text
//! ┌──────────────┐    KeyEvent     ┌──────────────┐
//! │ Input Thread │ ──────────────▶ │ Engine loop  │──▶ Game::on_key
//! └──────────────┘                 └──────────────┘
//! ┌──────────────┐                 ┌──────────────┐
//! │ Tick Thread  │──▶ on_tick      │Render Thread │──▶ on_render, swap
//! └──────────────┘                 └──────┬───────┘
//!                                         │ Frame
//!                                         ▼
//!                                  ┌──────────────┐
//!                                  │Present Thread│──▶ Presenter::present
//!                                  └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod pacing;
mod presenter;
mod render;
mod tick;

pub use engine::{ConfigError, Engine, EngineConfig, EngineHandle, Game, ResolutionPreset};
pub use input::InputActor;
pub use messages::{KeyCode, KeyEvent, KeyModifiers, KeyState};
pub use presenter::PresenterActor;
pub use render::RenderActor;
pub use tick::TickActor;

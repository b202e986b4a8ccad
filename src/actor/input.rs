//! Input actor: dedicated thread polling terminal key events.
//!
//! Uses crossterm's event polling so the engine thread never blocks on the
//! terminal. Only key press/release events survive conversion; the canvas is
//! fixed-size by contract, so resize and mouse events are dropped here.

use super::messages::{KeyCode, KeyEvent, KeyModifiers, KeyState};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long one poll waits before re-checking the shutdown flag.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Input actor that forwards key events to the engine.
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
}

impl InputActor {
    /// Spawn the input polling thread.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    pub fn spawn(sender: Sender<KeyEvent>, shutdown: Arc<AtomicBool>) -> Self {
        let handle = thread::Builder::new()
            .name("asciiloop-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the input thread to finish (the shutdown flag must already
    /// be set).
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(sender: &Sender<KeyEvent>, shutdown: &AtomicBool) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            match event::poll(POLL_TIMEOUT) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if let Some(key) = Self::convert_event(&ev) {
                            if sender.send(key).is_err() {
                                // Receiver dropped, engine is gone.
                                break;
                            }
                        }
                    }
                    Err(_) => break,
                },
                Ok(false) => {
                    // No event, loop to re-check shutdown.
                }
                // Polling fails when stdin is not a terminal; there is no
                // input to deliver, so stop quietly.
                Err(_) => break,
            }
        }
    }

    fn convert_event(ev: &Event) -> Option<KeyEvent> {
        let Event::Key(key) = ev else {
            return None;
        };
        let state = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => KeyState::Pressed,
            KeyEventKind::Release => KeyState::Released,
        };
        let code = Self::convert_key_code(key.code)?;
        Some(KeyEvent {
            code,
            state,
            modifiers: Self::convert_modifiers(key.modifiers),
        })
    }

    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::F(n) => KeyCode::F(n),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        let mut out = KeyModifiers::empty();
        if mods.contains(event::KeyModifiers::SHIFT) {
            out |= KeyModifiers::SHIFT;
        }
        if mods.contains(event::KeyModifiers::CONTROL) {
            out |= KeyModifiers::CONTROL;
        }
        if mods.contains(event::KeyModifiers::ALT) {
            out |= KeyModifiers::ALT;
        }
        out
    }
}

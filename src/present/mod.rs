//! Presentation module: the frame snapshot type and the consumer seam.
//!
//! The render loop publishes one [`Frame`] per iteration, after its swap.
//! A [`Presenter`] receives frames on a dedicated thread and turns them into
//! pixels — here, ANSI cells via [`TermPresenter`].

mod frame;
mod term;

pub use frame::Frame;
pub use term::{Presenter, TermPresenter};

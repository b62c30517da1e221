//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and drives the triangle renderer from redraw events.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

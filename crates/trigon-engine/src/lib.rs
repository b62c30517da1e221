//! Trigon engine crate.
//!
//! Initializes a GPU device through wgpu, builds one fixed triangle pipeline and draws it
//! every frame into a window surface.
//!
//! Startup runs adapter → device → surface → pipeline and yields a
//! [`render::TriangleRenderer`]; the [`window::Runtime`] then calls
//! [`render::TriangleRenderer::render_frame`] on every redraw.

pub mod device;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod window;

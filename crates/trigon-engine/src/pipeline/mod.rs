//! Render pipeline description.
//!
//! Everything here is plain data: shader sources, vertex layout, fixed-function state.
//! The GPU objects are created from it by the device layer.

mod desc;
mod variant;
mod vertex;

pub use desc::{PipelineDesc, ShaderStageDesc};
pub use variant::{TriangleVariant, VertexBufferMode, CLEAR_COLOR};
pub use vertex::{ColorVertex, TRIANGLE_VERTICES};

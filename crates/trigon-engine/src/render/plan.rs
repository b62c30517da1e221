use std::ops::Range;

/// Parameters of a non-indexed draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

impl DrawCall {
    /// Three vertices, one instance, no offsets.
    pub const TRIANGLE: Self = Self {
        vertex_count: 3,
        instance_count: 1,
        first_vertex: 0,
        first_instance: 0,
    };

    #[inline]
    pub fn vertices(&self) -> Range<u32> {
        self.first_vertex..self.first_vertex + self.vertex_count
    }

    #[inline]
    pub fn instances(&self) -> Range<u32> {
        self.first_instance..self.first_instance + self.instance_count
    }
}

/// What every frame records: one cleared pass with one draw.
///
/// Constant for the lifetime of a renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FramePlan {
    pub clear_color: wgpu::Color,
    pub draw: DrawCall,
}

impl FramePlan {
    pub const VERTEX_BUFFER_SLOT: u32 = 0;
}

/// Result of one frame iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Commands were submitted and the frame presented.
    Submitted,
    /// Nothing was submitted for this frame.
    Dropped,
    /// The surface cannot recover; the host should stop rendering.
    Fatal,
}

use crate::device::AlphaMode;
use crate::render::{DrawCall, FramePlan};

use super::desc::{PipelineDesc, ShaderStageDesc};
use super::vertex::{ColorVertex, TRIANGLE_VERTICES};

/// Where the triangle's vertices come from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VertexBufferMode {
    /// Positions are looked up in the vertex shader by `@builtin(vertex_index)`.
    None,
    /// One vertex buffer of interleaved [`ColorVertex`] data.
    InterleavedPosColor,
}

/// One of the two demo configurations.
///
/// The variants share the pipeline shape and the frame sequence; they differ in shaders,
/// surface alpha mode and whether a vertex buffer is used.
#[derive(Debug, Clone)]
pub struct TriangleVariant {
    pub name: &'static str,
    pub vertex_buffer_mode: VertexBufferMode,
    pub alpha_mode: AlphaMode,
    pub vertex_shader: ShaderStageDesc,
    pub fragment_shader: ShaderStageDesc,
    pub clear_color: wgpu::Color,
}

/// Background behind the triangle.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.5,
    b: 1.0,
    a: 1.0,
};

impl TriangleVariant {
    /// Interleaved position+color vertex buffer on a premultiplied-alpha surface.
    pub fn vertex_buffer() -> Self {
        Self {
            name: "vertex-buffer",
            vertex_buffer_mode: VertexBufferMode::InterleavedPosColor,
            alpha_mode: AlphaMode::Premultiplied,
            vertex_shader: ShaderStageDesc {
                label: "trigon color vertex vs",
                source: include_str!("shaders/color_vertex.vert.wgsl"),
                entry_point: "vs_main",
            },
            fragment_shader: ShaderStageDesc {
                label: "trigon color vertex fs",
                source: include_str!("shaders/color_vertex.frag.wgsl"),
                entry_point: "fs_main",
            },
            clear_color: CLEAR_COLOR,
        }
    }

    /// Shader-generated positions, no vertex buffer, opaque surface.
    pub fn builtin_index() -> Self {
        Self {
            name: "builtin-index",
            vertex_buffer_mode: VertexBufferMode::None,
            alpha_mode: AlphaMode::Opaque,
            vertex_shader: ShaderStageDesc {
                label: "trigon builtin index vs",
                source: include_str!("shaders/builtin_index.vert.wgsl"),
                entry_point: "vs_main",
            },
            fragment_shader: ShaderStageDesc {
                label: "trigon builtin index fs",
                source: include_str!("shaders/builtin_index.frag.wgsl"),
                entry_point: "fs_main",
            },
            clear_color: CLEAR_COLOR,
        }
    }

    /// Pipeline for this variant, targeting the configured surface `format`.
    pub fn pipeline_desc(&self, format: wgpu::TextureFormat) -> PipelineDesc {
        let vertex_buffers = match self.vertex_buffer_mode {
            VertexBufferMode::None => Vec::new(),
            VertexBufferMode::InterleavedPosColor => vec![ColorVertex::layout()],
        };

        PipelineDesc::triangle(
            "trigon triangle pipeline",
            self.vertex_shader,
            self.fragment_shader,
            vertex_buffers,
            format,
        )
    }

    /// Vertex data uploaded once at startup, if this variant uses a buffer.
    pub fn vertex_data(&self) -> Option<&'static [ColorVertex]> {
        match self.vertex_buffer_mode {
            VertexBufferMode::None => None,
            VertexBufferMode::InterleavedPosColor => Some(&TRIANGLE_VERTICES),
        }
    }

    pub fn frame_plan(&self) -> FramePlan {
        FramePlan {
            clear_color: self.clear_color,
            draw: DrawCall::TRIANGLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

    #[test]
    fn vertex_buffer_variant_uses_interleaved_layout() {
        let variant = TriangleVariant::vertex_buffer();
        let desc = variant.pipeline_desc(FORMAT);

        assert_eq!(desc.vertex_buffers.len(), 1);
        assert_eq!(desc.vertex_buffers[0].array_stride, 32);
        assert_eq!(desc.vertex_buffers[0].attributes.len(), 2);
        assert_eq!(variant.vertex_data().map(<[_]>::len), Some(3));
        assert_eq!(variant.alpha_mode, AlphaMode::Premultiplied);
    }

    #[test]
    fn builtin_index_variant_has_no_buffers() {
        let variant = TriangleVariant::builtin_index();
        let desc = variant.pipeline_desc(FORMAT);

        assert!(desc.vertex_buffers.is_empty());
        assert!(variant.vertex_data().is_none());
        assert_eq!(variant.alpha_mode, AlphaMode::Opaque);
    }

    #[test]
    fn fixed_function_state_is_shared() {
        for variant in [TriangleVariant::vertex_buffer(), TriangleVariant::builtin_index()] {
            let desc = variant.pipeline_desc(FORMAT);
            assert_eq!(
                desc.primitive.topology,
                wgpu::PrimitiveTopology::TriangleList
            );
            assert_eq!(desc.primitive.cull_mode, None);
            assert_eq!(desc.color_targets.len(), 1);
            assert_eq!(desc.color_targets[0].format, FORMAT);
        }
    }

    #[test]
    fn shader_sources_declare_their_entry_points() {
        for variant in [TriangleVariant::vertex_buffer(), TriangleVariant::builtin_index()] {
            let vs = variant.vertex_shader;
            let fs = variant.fragment_shader;
            assert!(vs.source.contains("@vertex"));
            assert!(vs.source.contains(&format!("fn {}(", vs.entry_point)));
            assert!(fs.source.contains("@fragment"));
            assert!(fs.source.contains(&format!("fn {}(", fs.entry_point)));
        }
    }

    #[test]
    fn builtin_shader_indexes_three_positions() {
        let src = TriangleVariant::builtin_index().vertex_shader.source;
        assert!(src.contains("@builtin(vertex_index)"));
        assert!(src.contains("array<vec2<f32>, 3>"));
    }
}

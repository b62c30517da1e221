use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: clip-space position followed by RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x4, // position
        1 => Float32x4  // color
    ];

    /// Buffer layout matching the `#[repr(C)]` field order of this type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Red top, green bottom-left, blue bottom-right.
pub const TRIANGLE_VERTICES: [ColorVertex; 3] = [
    ColorVertex {
        position: [0.0, 0.6, 0.0, 1.0],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    ColorVertex {
        position: [-0.5, -0.6, 0.0, 1.0],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    ColorVertex {
        position: [0.5, -0.6, 0.0, 1.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_two_float4_attributes() {
        let layout = ColorVertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, [0, 16]);

        let locations: Vec<u32> = layout
            .attributes
            .iter()
            .map(|a| a.shader_location)
            .collect();
        assert_eq!(locations, [0, 1]);

        assert!(layout
            .attributes
            .iter()
            .all(|a| a.format == wgpu::VertexFormat::Float32x4));
    }

    #[test]
    fn stride_matches_vertex_type() {
        // The layout is derived from the struct; a field change must keep both in sync.
        let layout = ColorVertex::layout();
        assert_eq!(
            layout.array_stride as usize,
            std::mem::size_of::<ColorVertex>()
        );

        let end = layout
            .attributes
            .iter()
            .map(|a| a.offset + a.format.size())
            .max()
            .unwrap();
        assert_eq!(end, layout.array_stride);
    }

    #[test]
    fn triangle_bytes_match_literal() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        let expected: [f32; 24] = [
            0.0, 0.6, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, //
            -0.5, -0.6, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, //
            0.5, -0.6, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0,
        ];
        assert_eq!(floats, expected);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&TRIANGLE_VERTICES).len(), 96);
    }
}

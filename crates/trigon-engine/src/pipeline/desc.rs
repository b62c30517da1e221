/// One compiled shader stage: embedded WGSL source plus its entry point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderStageDesc {
    pub label: &'static str,
    pub source: &'static str,
    pub entry_point: &'static str,
}

/// Plain-data description of the render pipeline.
///
/// Built before any GPU call so the fixed-function state can be inspected on its own;
/// [`GpuPlatform::create_pipeline`](crate::device::GpuPlatform::create_pipeline) turns it
/// into a real pipeline.
#[derive(Debug, Clone)]
pub struct PipelineDesc {
    pub label: &'static str,
    pub vertex: ShaderStageDesc,
    pub fragment: ShaderStageDesc,

    /// Empty when vertex positions come from the shader itself.
    pub vertex_buffers: Vec<wgpu::VertexBufferLayout<'static>>,

    pub primitive: wgpu::PrimitiveState,
    pub color_targets: Vec<wgpu::ColorTargetState>,
}

impl PipelineDesc {
    /// Triangle-list pipeline with no culling and a single color target in `format`.
    pub fn triangle(
        label: &'static str,
        vertex: ShaderStageDesc,
        fragment: ShaderStageDesc,
        vertex_buffers: Vec<wgpu::VertexBufferLayout<'static>>,
        format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            label,
            vertex,
            fragment,
            vertex_buffers,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            color_targets: vec![wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            }],
        }
    }
}

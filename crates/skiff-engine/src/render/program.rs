use std::num::NonZeroU64;
use std::path::Path;

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::quad::QuadVertex;
use super::RenderCtx;

/// Vertex attribute location of the quad position (`@location(0)`).
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Vertex attribute location of the texture coordinate (`@location(1)`).
pub const TEX_COORD_ATTRIBUTE: u32 = 1;

/// Bind group slots shared with the WGSL sources.
const CAMERA_GROUP: u32 = 0;
const MODEL_GROUP: u32 = 1;
pub(crate) const TEXTURE_GROUP: u32 = 2;

/// Model slots allocated before the first `ensure_model_capacity` call.
const INITIAL_MODEL_SLOTS: usize = 2;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
}

fn min_binding_size<T>() -> Option<NonZeroU64> {
    NonZeroU64::new(std::mem::size_of::<T>() as u64)
}

/// A linked vertex + fragment shader pair with its uniforms.
///
/// The projection and view matrices live in one uniform buffer bound once per
/// pass. Model matrices are written into consecutive slots of a second buffer
/// and selected per draw with a dynamic offset, so each sprite keeps its own
/// matrix inside a single submission.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,

    camera_ubo: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    projection: Mat4,
    view: Mat4,

    model_bgl: wgpu::BindGroupLayout,
    model_ubo: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_stride: u64,
    model_capacity: usize,

    texture_bgl: wgpu::BindGroupLayout,
}

impl ShaderProgram {
    /// Reads both WGSL files and builds the program.
    pub fn load(
        ctx: &RenderCtx<'_>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vertex_path = vertex_path.as_ref();
        let fragment_path = fragment_path.as_ref();

        let vertex_src = std::fs::read_to_string(vertex_path)
            .with_context(|| format!("failed to read vertex shader {}", vertex_path.display()))?;
        let fragment_src = std::fs::read_to_string(fragment_path).with_context(|| {
            format!("failed to read fragment shader {}", fragment_path.display())
        })?;

        log::debug!(
            "compiling shader program {} + {}",
            vertex_path.display(),
            fragment_path.display()
        );

        Ok(Self::from_sources(ctx, &vertex_src, &fragment_src))
    }

    /// Builds the program from in-memory WGSL.
    ///
    /// The vertex source must export `vs_main`, the fragment source `fs_main`.
    fn from_sources(ctx: &RenderCtx<'_>, vertex_src: &str, fragment_src: &str) -> Self {
        let vertex = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skiff vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vertex_src.into()),
        });
        let fragment = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skiff fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fragment_src.into()),
        });

        let camera_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skiff camera bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: min_binding_size::<CameraUniform>(),
                },
                count: None,
            }],
        });

        let model_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skiff model bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: min_binding_size::<ModelUniform>(),
                },
                count: None,
            }],
        });

        let texture_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skiff texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skiff sprite pipeline layout"),
            bind_group_layouts: &[&camera_bgl, &model_bgl, &texture_bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skiff sprite pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // src-alpha / one-minus-src-alpha
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("skiff camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skiff camera bind group"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        let align = u64::from(ctx.device.limits().min_uniform_buffer_offset_alignment);
        let model_stride = (std::mem::size_of::<ModelUniform>() as u64).next_multiple_of(align);

        let model_capacity = INITIAL_MODEL_SLOTS;
        let (model_ubo, model_bind_group) =
            create_model_slots(ctx.device, &model_bgl, model_stride, model_capacity);

        let program = Self {
            pipeline,
            camera_ubo,
            camera_bind_group,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            model_bgl,
            model_ubo,
            model_bind_group,
            model_stride,
            model_capacity,
            texture_bgl,
        };
        program.write_camera(ctx.queue);
        program
    }

    pub fn set_projection_matrix(&mut self, queue: &wgpu::Queue, projection: Mat4) {
        self.projection = projection;
        self.write_camera(queue);
    }

    pub fn set_view_matrix(&mut self, queue: &wgpu::Queue, view: Mat4) {
        self.view = view;
        self.write_camera(queue);
    }

    /// Grows the model-matrix buffer so `count` slots are addressable.
    ///
    /// Growing replaces the buffer; previously written slots must be rewritten.
    pub fn ensure_model_capacity(&mut self, ctx: &RenderCtx<'_>, count: usize) {
        let new_cap = next_capacity(self.model_capacity, count);
        if new_cap == self.model_capacity {
            return;
        }

        let (ubo, bind_group) =
            create_model_slots(ctx.device, &self.model_bgl, self.model_stride, new_cap);

        self.model_ubo = ubo;
        self.model_bind_group = bind_group;
        self.model_capacity = new_cap;
    }

    /// Writes `model` into `slot` and returns the dynamic offset that selects it.
    ///
    /// `slot` must be below the capacity set by `ensure_model_capacity`.
    pub fn set_model_matrix(&self, queue: &wgpu::Queue, slot: usize, model: Mat4) -> u32 {
        debug_assert!(slot < self.model_capacity, "model slot {slot} out of range");

        let offset = slot as u64 * self.model_stride;
        let uniform = ModelUniform {
            model: model.to_cols_array_2d(),
        };
        queue.write_buffer(&self.model_ubo, offset, bytemuck::bytes_of(&uniform));

        offset as u32
    }

    pub fn position_attribute(&self) -> u32 {
        POSITION_ATTRIBUTE
    }

    pub fn tex_coordinate_attribute(&self) -> u32 {
        TEX_COORD_ATTRIBUTE
    }

    /// Layout textures must be created against to be bindable by this program.
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bgl
    }

    /// Binds the pipeline and the camera uniforms.
    pub(crate) fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(CAMERA_GROUP, &self.camera_bind_group, &[]);
    }

    /// Selects the model slot at `offset` for subsequent draws.
    pub(crate) fn bind_model(&self, rpass: &mut wgpu::RenderPass<'_>, offset: u32) {
        rpass.set_bind_group(MODEL_GROUP, &self.model_bind_group, &[offset]);
    }

    fn write_camera(&self, queue: &wgpu::Queue) {
        let uniform = CameraUniform {
            projection: self.projection.to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
        };
        queue.write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(&uniform));
    }
}

/// Slot count needed to address `needed` sprites, starting from `current`.
///
/// Never shrinks; grows to the next power of two.
fn next_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two()
    }
}

fn create_model_slots(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let ubo = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("skiff model ubo"),
        size: stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("skiff model bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &ubo,
                offset: 0,
                size: min_binding_size::<ModelUniform>(),
            }),
        }],
    });

    (ubo, bind_group)
}

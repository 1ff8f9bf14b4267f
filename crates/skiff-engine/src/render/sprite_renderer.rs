use std::path::Path;

use anyhow::Result;
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::program::TEXTURE_GROUP;
use super::quad::QUAD_VERTICES;
use super::texture::{Texture, TextureHandle};
use super::{RenderCtx, RenderTarget, ShaderProgram};
use crate::sprite::Sprite;

/// Draws sprites as textured quads, one draw call each, in slice order.
///
/// The quad geometry is uploaded once at construction; per frame only the
/// model matrices change.
pub struct SpriteRenderer {
    program: ShaderProgram,
    quad_vbo: wgpu::Buffer,
    textures: Vec<Texture>,
}

impl SpriteRenderer {
    pub fn new(ctx: &RenderCtx<'_>, program: ShaderProgram) -> Self {
        let quad_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("skiff quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            program,
            quad_vbo,
            textures: Vec::new(),
        }
    }

    /// Loads an image file and returns a handle sprites can reference.
    pub fn load_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        path: impl AsRef<Path>,
    ) -> Result<TextureHandle> {
        let texture = Texture::load(ctx, self.program.texture_layout(), path)?;
        self.textures.push(texture);
        Ok(TextureHandle(self.textures.len() - 1))
    }

    /// Sets the fixed camera: projection plus view.
    pub fn set_camera(&mut self, queue: &wgpu::Queue, projection: Mat4, view: Mat4) {
        self.program.set_projection_matrix(queue, projection);
        self.program.set_view_matrix(queue, view);
    }

    /// Records one pass drawing every sprite over the existing frame contents.
    ///
    /// Sprites whose texture handle does not belong to this renderer are skipped.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, sprites: &[Sprite]) {
        if sprites.is_empty() {
            return;
        }

        self.program.ensure_model_capacity(ctx, sprites.len());
        let offsets: Vec<u32> = sprites
            .iter()
            .enumerate()
            .map(|(slot, sprite)| self.program.set_model_matrix(ctx.queue, slot, sprite.model))
            .collect();

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("skiff sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.program.bind(&mut rpass);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));

        for (sprite, offset) in sprites.iter().zip(offsets) {
            let Some(texture) = self.textures.get(sprite.texture.0) else {
                log::debug!("sprite references unknown texture {:?}", sprite.texture);
                continue;
            };

            self.program.bind_model(&mut rpass, offset);
            rpass.set_bind_group(TEXTURE_GROUP, texture.bind_group(), &[]);
            rpass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        }
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use super::RenderCtx;

/// Opaque handle to a texture owned by a `SpriteRenderer`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureHandle(pub(crate) usize);

/// Decodes an image file into an RGBA8 pixel buffer.
pub fn decode_rgba8(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).with_context(|| format!("failed to load image {}", path.display()))?;
    Ok(img.into_rgba8())
}

/// GPU texture + sampler, bound together for the sprite shader.
pub struct Texture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl Texture {
    /// Decodes `path` and uploads it. The CPU-side pixels are dropped once uploaded.
    pub fn load(
        ctx: &RenderCtx<'_>,
        layout: &wgpu::BindGroupLayout,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let pixels = decode_rgba8(path)?;
        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        let label = path.display().to_string();
        Ok(Self::from_rgba8(ctx, layout, &label, &pixels))
    }

    /// Uploads an RGBA8 image.
    ///
    /// Minification is nearest-neighbour; magnification is linear.
    pub fn from_rgba8(
        ctx: &RenderCtx<'_>,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        pixels: &RgbaImage,
    ) -> Self {
        let (width, height) = pixels.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            _texture: texture,
            bind_group,
        }
    }

    pub(crate) fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

//! Textured-quad rendering.
//!
//! Convention:
//! - world space is y-up, with the visible extent set by an orthographic projection
//! - every sprite is the same unit quad centred on the origin, placed by its model matrix
//! - shaders are WGSL, loaded from disk as a vertex/fragment file pair

mod ctx;
mod program;
mod projection;
mod quad;
mod sprite_renderer;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use program::{ShaderProgram, POSITION_ATTRIBUTE, TEX_COORD_ATTRIBUTE};
pub use projection::orthographic;
pub use quad::{QuadVertex, QUAD_VERTICES};
pub use sprite_renderer::SpriteRenderer;
pub use texture::{decode_rgba8, Texture, TextureHandle};

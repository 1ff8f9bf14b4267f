//! Sprite records and the pure transform math that moves them.
//!
//! Nothing here touches the GPU: games mutate `Sprite`s during update and the
//! renderer only reads `Sprite::model` and `Sprite::texture`.

mod motion;
mod sprite;

pub use motion::{integrate, normalize_movement};
pub use sprite::Sprite;

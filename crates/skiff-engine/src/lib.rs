//! skiff engine crate.
//!
//! Window, GPU context, input, frame timing and textured-sprite rendering
//! shared by the skiff demos. Games own their state; the runtime lends them
//! one `core::FrameCtx` per frame.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
pub mod paint;
pub mod render;
pub mod sprite;

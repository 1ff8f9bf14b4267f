//! Contracts between the runtime loop and the demo applications.
//!
//! Apps implement `App`; the runtime owns the window, GPU context, input and
//! clock, and lends them out through `FrameCtx` once per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;

//! Keyboard input.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates window events into `InputEvent`s via `platform`.

mod axis;
mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use axis::axis_from_keys;
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};

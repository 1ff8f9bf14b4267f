//! Colour representation shared by the frame clear and the demos.

mod color;

pub use color::Color;

use glam::Mat4;

/// Orthographic projection showing `[-half_width, half_width] × [-half_height, half_height]`
/// with depth range `-1..1`, mapped to wgpu clip space (z in `0..1`).
pub fn orthographic(half_width: f32, half_height: f32) -> Mat4 {
    Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, -1.0, 1.0)
}

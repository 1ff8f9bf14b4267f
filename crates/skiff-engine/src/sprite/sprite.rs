use glam::{EulerRot, Mat4, Quat, Vec3};

use super::motion::{integrate, normalize_movement};
use crate::render::TextureHandle;

/// One textured quad in the scene.
///
/// `base_offset` and `base_scale` are the sprite's fixed placement.
/// `position`, `rotation` (radians) and `scale` accumulate on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub base_offset: Vec3,
    pub base_scale: Vec3,

    pub position: Vec3,
    /// Direction of travel for this frame; reset by input handling.
    pub movement: Vec3,
    pub speed: f32,

    pub rotation: Vec3,
    pub rotation_rate: Vec3,

    pub scale: Vec3,
    pub scale_rate: Vec3,

    pub texture: TextureHandle,

    /// Derived; rebuilt by `update_model`.
    pub model: Mat4,
}

impl Sprite {
    pub const fn new(texture: TextureHandle) -> Self {
        Self {
            base_offset: Vec3::ZERO,
            base_scale: Vec3::ONE,
            position: Vec3::ZERO,
            movement: Vec3::ZERO,
            speed: 1.0,
            rotation: Vec3::ZERO,
            rotation_rate: Vec3::ZERO,
            scale: Vec3::ONE,
            scale_rate: Vec3::ZERO,
            texture,
            model: Mat4::IDENTITY,
        }
    }

    pub const fn offset(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            base_offset: Vec3::new(x, y, z),
            ..self
        }
    }

    pub const fn base_scale(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            base_scale: Vec3::new(x, y, z),
            ..self
        }
    }

    pub const fn speed(self, speed: f32) -> Self {
        Self { speed, ..self }
    }

    pub const fn spin(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            rotation_rate: Vec3::new(x, y, z),
            ..self
        }
    }

    pub const fn growth(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            scale_rate: Vec3::new(x, y, z),
            ..self
        }
    }

    /// Sets this frame's movement, normalized to at most unit length.
    pub fn set_movement(&mut self, movement: Vec3) {
        self.movement = normalize_movement(movement);
    }

    /// Advances position, rotation and scale by `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        self.position = integrate(self.position, self.movement, self.speed, dt);
        self.rotation += self.rotation_rate * dt;
        self.scale += self.scale_rate * dt;
    }

    /// `T(base_offset) · T(position) · R(rotation) · S(base_scale ⊙ scale)`.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::ZYX,
            self.rotation.z,
            self.rotation.y,
            self.rotation.x,
        );

        Mat4::from_translation(self.base_offset)
            * Mat4::from_translation(self.position)
            * Mat4::from_quat(rotation)
            * Mat4::from_scale(self.base_scale * self.scale)
    }

    pub fn update_model(&mut self) {
        self.model = self.model_matrix();
    }

    /// World-space y of the sprite's top edge, ignoring rotation.
    pub fn top(&self) -> f32 {
        self.position.y + self.base_offset.y + self.base_scale.y / 2.0
    }

    /// World-space y of the sprite's bottom edge, ignoring rotation.
    pub fn bottom(&self) -> f32 {
        self.position.y + self.base_offset.y - self.base_scale.y / 2.0
    }

    /// Pulls the sprite back so its top edge is at most `top` and its bottom
    /// edge at least `bottom`.
    pub fn clamp_vertical(&mut self, top: f32, bottom: f32) {
        let half = self.base_scale.y / 2.0;

        if self.top() > top {
            self.position.y = top - self.base_offset.y - half;
        }
        if self.bottom() < bottom {
            self.position.y = bottom - self.base_offset.y + half;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIP: Sprite = Sprite::new(TextureHandle(0))
        .offset(-4.0, 0.0, 0.0)
        .base_scale(66.0 / 128.0, 113.0 / 128.0, 0.0);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn fresh_sprite_model_is_base_placement() {
        let mut s = SHIP;
        s.update_model();

        let centre = s.model.transform_point3(Vec3::ZERO);
        assert_eq!(centre, Vec3::new(-4.0, 0.0, 0.0));

        let corner = s.model.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert!(close(corner.x, -4.0 + 33.0 / 128.0));
        assert!(close(corner.y, 113.0 / 256.0));
    }

    #[test]
    fn model_applies_accumulated_position_after_offset() {
        let mut s = SHIP;
        s.position = Vec3::new(0.0, 1.25, 0.0);
        let centre = s.model_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(centre, Vec3::new(-4.0, 1.25, 0.0));
    }

    #[test]
    fn model_rotates_about_sprite_centre() {
        let mut s = Sprite::new(TextureHandle(0)).offset(1.0, 0.0, 0.0);
        s.rotation.z = std::f32::consts::FRAC_PI_2;
        let p = s.model_matrix().transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!(close(p.x, 1.0));
        assert!(close(p.y, 0.5));
    }

    #[test]
    fn model_scales_by_base_and_accumulated_scale() {
        let mut s = Sprite::new(TextureHandle(0)).base_scale(2.0, 1.0, 1.0);
        s.scale = Vec3::new(1.5, 3.0, 1.0);
        let p = s.model_matrix().transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert!(close(p.x, 1.5));
        assert!(close(p.y, 1.5));
    }

    #[test]
    fn integrate_accumulates_all_three_channels() {
        let mut s = Sprite::new(TextureHandle(0))
            .speed(2.0)
            .spin(0.0, 0.0, 1.0)
            .growth(0.5, 0.5, 0.0);
        s.set_movement(Vec3::new(1.0, 0.0, 0.0));
        s.integrate(0.5);

        assert_eq!(s.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(s.rotation, Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(s.scale, Vec3::new(1.25, 1.25, 1.0));
    }

    #[test]
    fn set_movement_normalizes_long_vectors() {
        let mut s = SHIP;
        s.set_movement(Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(s.movement, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn clamp_pins_top_edge_to_limit() {
        let mut s = SHIP;
        s.position.y = 10.0;
        s.clamp_vertical(3.75, -3.75);
        assert!(close(s.top(), 3.75));
    }

    #[test]
    fn clamp_pins_bottom_edge_to_limit() {
        let mut s = SHIP;
        s.position.y = -7.0;
        s.clamp_vertical(3.75, -3.75);
        assert!(close(s.bottom(), -3.75));
    }

    #[test]
    fn clamp_leaves_in_bounds_sprite_alone() {
        let mut s = SHIP;
        s.position.y = 1.0;
        s.clamp_vertical(3.75, -3.75);
        assert_eq!(s.position.y, 1.0);
    }

    #[test]
    fn clamp_accounts_for_base_offset() {
        let mut s = SHIP.offset(0.0, 1.0, 0.0);
        s.position.y = 5.0;
        s.clamp_vertical(3.75, -3.75);
        assert!(close(s.top(), 3.75));
        assert!(close(s.position.y, 3.75 - 1.0 - 113.0 / 256.0));
    }
}

use std::f32::consts::PI;

use glam::Vec3;
use skiff_engine::render::TextureHandle;
use skiff_engine::sprite::Sprite;

pub const PENGUIN: usize = 0;
pub const PUFFLE: usize = 1;

pub const HALF_WIDTH: f32 = 5.0;
pub const HALF_HEIGHT: f32 = 3.75;

/// The penguin waddles right while spinning; the puffle sits still and grows.
///
/// Nothing is bounded: given long enough, the penguin leaves the screen and
/// the puffle fills it.
#[derive(Debug, Clone)]
pub struct PenguinState {
    pub sprites: Vec<Sprite>,
}

impl Default for PenguinState {
    fn default() -> Self {
        Self::new()
    }
}

impl PenguinState {
    pub fn new() -> Self {
        let mut penguin = Sprite::new(TextureHandle::default())
            .offset(-2.5, 0.5, 0.0)
            .base_scale(1.0, 1.25, 1.0)
            .speed(0.25)
            .spin(0.0, 0.0, PI / 2.0);
        penguin.set_movement(Vec3::X);

        let puffle = Sprite::new(TextureHandle::default())
            .offset(2.0, -1.5, 0.0)
            .base_scale(0.75, 0.75, 1.0)
            .growth(0.1, 0.1, 0.0);

        let mut state = Self {
            sprites: vec![penguin, puffle],
        };
        for sprite in &mut state.sprites {
            sprite.update_model();
        }
        state
    }

    pub fn update(&mut self, dt: f32) {
        for sprite in &mut self.sprites {
            sprite.integrate(dt);
            sprite.update_model();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penguin_drifts_right_and_spins() {
        let mut state = PenguinState::new();
        state.update(2.0);

        let penguin = &state.sprites[PENGUIN];
        assert!((penguin.position.x - 0.5).abs() < 1e-6);
        assert!((penguin.rotation.z - PI).abs() < 1e-6);
        assert_eq!(penguin.scale, Vec3::ONE);
    }

    #[test]
    fn puffle_grows_in_place() {
        let mut state = PenguinState::new();
        state.update(5.0);

        let puffle = &state.sprites[PUFFLE];
        assert_eq!(puffle.position, Vec3::ZERO);
        assert!((puffle.scale.x - 1.5).abs() < 1e-6);
        assert!((puffle.scale.y - 1.5).abs() < 1e-6);

        let centre = puffle.model.transform_point3(Vec3::ZERO);
        assert_eq!(centre, Vec3::new(2.0, -1.5, 0.0));
    }

    #[test]
    fn transforms_accumulate_without_bounds() {
        let mut state = PenguinState::new();
        for _ in 0..1000 {
            state.update(0.25);
        }

        let penguin = &state.sprites[PENGUIN];
        assert!(penguin.position.x + penguin.base_offset.x > HALF_WIDTH);
        assert!(state.sprites[PUFFLE].scale.x > 20.0);
    }

    #[test]
    fn model_follows_accumulated_transform() {
        let mut state = PenguinState::new();
        state.update(1.0);

        let penguin = &state.sprites[PENGUIN];
        let centre = penguin.model.transform_point3(Vec3::ZERO);
        assert!((centre.x - (-2.5 + 0.25)).abs() < 1e-6);
        assert!((centre.y - 0.5).abs() < 1e-6);

        // A quarter turn puts the quad's right edge midpoint straight above the centre.
        let right = penguin.model.transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!((right.x - centre.x).abs() < 1e-5);
        assert!((right.y - (centre.y + 0.5)).abs() < 1e-5);
    }
}

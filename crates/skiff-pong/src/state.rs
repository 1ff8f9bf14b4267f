use glam::Vec3;
use skiff_engine::input::{InputFrame, InputState, Key};
use skiff_engine::sprite::Sprite;
use skiff_engine::render::TextureHandle;

/// Index of the left (red) ship in `PongState::sprites`.
pub const SHIP_ONE: usize = 0;
/// Index of the right (blue) ship in `PongState::sprites`.
pub const SHIP_TWO: usize = 1;

/// Visible world half-extent; the ships may not leave it vertically.
pub const HALF_WIDTH: f32 = 5.0;
pub const HALF_HEIGHT: f32 = 3.75;

const SHIP_SCALE: Vec3 = Vec3::new(66.0 / 128.0, 113.0 / 128.0, 0.0);
const SHIP_SPEED: f32 = 1.0;

/// Up/down keys for one ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
}

pub const PLAYER_ONE: Controls = Controls { up: Key::W, down: Key::S };
pub const PLAYER_TWO: Controls = Controls {
    up: Key::ArrowUp,
    down: Key::ArrowDown,
};

/// Flips `PongState::two_player_mode`.
pub const MODE_TOGGLE: Key = Key::T;

fn ship(x: f32) -> Sprite {
    Sprite::new(TextureHandle::default())
        .offset(x, 0.0, 0.0)
        .base_scale(SHIP_SCALE.x, SHIP_SCALE.y, SHIP_SCALE.z)
        .speed(SHIP_SPEED)
}

/// Everything the ship pong loop mutates.
#[derive(Debug, Clone)]
pub struct PongState {
    pub sprites: Vec<Sprite>,
    pub controls: [Controls; 2],

    /// Toggled with T. While false, ship one ignores its keys; ship two is unaffected.
    pub two_player_mode: bool,
}

impl Default for PongState {
    fn default() -> Self {
        Self::new()
    }
}

impl PongState {
    pub fn new() -> Self {
        let mut state = Self {
            sprites: vec![ship(-4.0), ship(4.0)],
            controls: [PLAYER_ONE, PLAYER_TWO],
            two_player_mode: true,
        };
        for sprite in &mut state.sprites {
            sprite.update_model();
        }
        state
    }

    /// Reads this frame's keyboard state into each ship's movement.
    pub fn process_input(&mut self, input: &InputState, frame: &InputFrame) {
        for _ in 0..frame.press_count(MODE_TOGGLE) {
            self.two_player_mode = !self.two_player_mode;
        }
        if frame.pressed(MODE_TOGGLE) {
            log::info!("two-player mode {}", if self.two_player_mode { "on" } else { "off" });
        }

        for (index, (sprite, controls)) in self.sprites.iter_mut().zip(self.controls).enumerate() {
            let mut dy = input.axis(controls.up, controls.down);
            if index == SHIP_ONE && !self.two_player_mode {
                dy = 0.0;
            }
            sprite.set_movement(Vec3::new(0.0, dy, 0.0));
        }
    }

    /// Moves the ships by `dt` seconds and keeps them on screen.
    ///
    /// Model matrices are built before the clamp, so a ship that overshoots is
    /// drawn at the overshoot for one frame and pulled back on the next.
    pub fn update(&mut self, dt: f32) {
        for sprite in &mut self.sprites {
            sprite.integrate(dt);
            sprite.update_model();
            sprite.clamp_vertical(HALF_HEIGHT, -HALF_HEIGHT);
        }
    }
}

#[cfg(test)]
mod tests {
    use skiff_engine::input::{InputEvent, KeyState};

    use super::*;

    struct Keyboard {
        state: InputState,
        frame: InputFrame,
    }

    impl Keyboard {
        fn new() -> Self {
            Self {
                state: InputState::default(),
                frame: InputFrame::default(),
            }
        }

        fn send(&mut self, key: Key, state: KeyState) {
            self.state
                .apply_event(&mut self.frame, InputEvent::Key { key, state });
        }

        fn press(&mut self, key: Key) {
            self.send(key, KeyState::Pressed);
        }

        fn release(&mut self, key: Key) {
            self.send(key, KeyState::Released);
        }

        fn tap(&mut self, key: Key) {
            self.press(key);
            self.release(key);
        }

        /// Runs one frame of input then update, like the app loop does.
        fn frame(&mut self, pong: &mut PongState, dt: f32) {
            pong.process_input(&self.state, &self.frame);
            pong.update(dt);
            self.frame.clear();
        }
    }

    #[test]
    fn ships_start_centred_on_their_edges() {
        let pong = PongState::new();
        assert_eq!(pong.sprites.len(), 2);
        assert_eq!(pong.sprites[SHIP_ONE].model.transform_point3(Vec3::ZERO), Vec3::new(-4.0, 0.0, 0.0));
        assert_eq!(pong.sprites[SHIP_TWO].model.transform_point3(Vec3::ZERO), Vec3::new(4.0, 0.0, 0.0));
        assert!(pong.two_player_mode);
    }

    #[test]
    fn holding_w_for_one_frame_moves_ship_one_up_by_dt() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(Key::W);
        kb.frame(&mut pong, 0.016);

        assert_eq!(pong.sprites[SHIP_ONE].position.y, 0.016);
        assert_eq!(pong.sprites[SHIP_TWO].position.y, 0.0);
    }

    #[test]
    fn arrow_keys_move_ship_two() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(Key::ArrowDown);
        kb.frame(&mut pong, 0.5);

        assert_eq!(pong.sprites[SHIP_TWO].position.y, -0.5);
        assert_eq!(pong.sprites[SHIP_ONE].position.y, 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(Key::W);
        kb.press(Key::S);
        kb.press(Key::ArrowUp);
        kb.press(Key::ArrowDown);
        kb.frame(&mut pong, 0.25);

        assert_eq!(pong.sprites[SHIP_ONE].position.y, 0.0);
        assert_eq!(pong.sprites[SHIP_TWO].position.y, 0.0);
    }

    #[test]
    fn movement_resets_when_keys_are_released() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(Key::W);
        kb.frame(&mut pong, 0.1);
        kb.release(Key::W);
        kb.frame(&mut pong, 0.1);

        assert_eq!(pong.sprites[SHIP_ONE].movement, Vec3::ZERO);
        assert!((pong.sprites[SHIP_ONE].position.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn toggling_twice_restores_mode() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();
        let original = pong.two_player_mode;

        kb.tap(MODE_TOGGLE);
        kb.frame(&mut pong, 0.0);
        assert_ne!(pong.two_player_mode, original);

        kb.tap(MODE_TOGGLE);
        kb.frame(&mut pong, 0.0);
        assert_eq!(pong.two_player_mode, original);
    }

    #[test]
    fn toggle_flips_once_per_key_down_within_a_frame() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.tap(MODE_TOGGLE);
        kb.press(MODE_TOGGLE);
        kb.frame(&mut pong, 0.0);
        assert!(pong.two_player_mode);

        // Auto-repeat while T stays down.
        kb.press(MODE_TOGGLE);
        kb.frame(&mut pong, 0.0);
        assert!(!pong.two_player_mode);
    }

    #[test]
    fn held_toggle_key_flips_only_once() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(MODE_TOGGLE);
        kb.frame(&mut pong, 0.0);
        kb.frame(&mut pong, 0.0);
        kb.frame(&mut pong, 0.0);

        assert!(!pong.two_player_mode);
    }

    #[test]
    fn mode_off_freezes_ship_one_only() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.tap(MODE_TOGGLE);
        kb.press(Key::W);
        kb.press(Key::ArrowUp);
        kb.frame(&mut pong, 0.5);

        assert!(!pong.two_player_mode);
        assert_eq!(pong.sprites[SHIP_ONE].position.y, 0.0);
        assert_eq!(pong.sprites[SHIP_TWO].position.y, 0.5);
    }

    #[test]
    fn ships_are_clamped_to_the_top() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(Key::W);
        kb.press(Key::ArrowUp);
        for _ in 0..40 {
            kb.frame(&mut pong, 0.25);
        }

        for ship in &pong.sprites {
            assert!((ship.top() - HALF_HEIGHT).abs() < 1e-5);
        }
    }

    #[test]
    fn ships_are_clamped_to_the_bottom() {
        let mut pong = PongState::new();
        let mut kb = Keyboard::new();

        kb.press(Key::S);
        kb.press(Key::ArrowDown);
        for _ in 0..40 {
            kb.frame(&mut pong, 0.25);
        }

        for ship in &pong.sprites {
            assert!((ship.bottom() + HALF_HEIGHT).abs() < 1e-5);
        }
    }

    #[test]
    fn model_matrix_uses_pre_clamp_position() {
        let mut pong = PongState::new();
        pong.sprites[SHIP_ONE].position.y = 10.0;
        pong.update(0.0);

        let drawn = pong.sprites[SHIP_ONE].model.transform_point3(Vec3::ZERO);
        assert_eq!(drawn.y, 10.0);
        assert!((pong.sprites[SHIP_ONE].top() - HALF_HEIGHT).abs() < 1e-5);

        pong.update(0.0);
        let drawn = pong.sprites[SHIP_ONE].model.transform_point3(Vec3::ZERO);
        assert!((drawn.y + SHIP_SCALE.y / 2.0 - HALF_HEIGHT).abs() < 1e-5);
    }
}

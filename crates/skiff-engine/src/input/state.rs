use std::collections::HashSet;

use super::axis::axis_from_keys;
use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the window.
///
/// Holds "is down" information; per-frame transitions go into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and records deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Releases delivered while unfocused never arrive.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state: KeyState::Pressed,
            } => {
                self.keys_down.insert(key);
                frame.record_press(key);
            }

            InputEvent::Key {
                key,
                state: KeyState::Released,
            } => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// `axis_from_keys` over the held state of `positive` and `negative`.
    pub fn axis(&self, positive: Key, negative: Key) -> f32 {
        axis_from_keys(self.key_down(positive), self.key_down(negative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state }
    }

    #[test]
    fn press_and_release_track_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        assert!(state.key_down(Key::W));
        assert!(frame.pressed(Key::W));

        state.apply_event(&mut frame, key(Key::W, KeyState::Released));
        assert!(!state.key_down(Key::W));
    }

    #[test]
    fn auto_repeat_counts_as_another_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::T, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::T, KeyState::Pressed));

        assert_eq!(frame.press_count(Key::T), 2);
        assert_eq!(state.keys_down.len(), 1);
    }

    #[test]
    fn release_of_unheld_key_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::S, KeyState::Released));
        assert!(state.keys_down.is_empty());
        assert!(!frame.pressed(Key::S));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, key(Key::ArrowUp, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn axis_reads_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert_eq!(state.axis(Key::W, Key::S), 0.0);

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        assert_eq!(state.axis(Key::W, Key::S), 1.0);

        state.apply_event(&mut frame, key(Key::S, KeyState::Pressed));
        assert_eq!(state.axis(Key::W, Key::S), 0.0);

        state.apply_event(&mut frame, key(Key::W, KeyState::Released));
        assert_eq!(state.axis(Key::W, Key::S), -1.0);
    }
}

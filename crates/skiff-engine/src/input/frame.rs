use std::collections::HashMap;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` answers "is it held"; `InputFrame` answers "how often did it go
/// down this frame". Every key-down counts, auto-repeat included.
/// The runtime clears it after every `on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    presses: HashMap<Key, u32>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    pub(crate) fn record_press(&mut self, key: Key) {
        *self.presses.entry(key).or_insert(0) += 1;
    }

    /// Number of key-down events for `key` since the last `clear`.
    pub fn press_count(&self, key: Key) -> u32 {
        self.presses.get(&key).copied().unwrap_or(0)
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.press_count(key) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_are_counted_per_key() {
        let mut frame = InputFrame::default();
        frame.record_press(Key::T);
        frame.record_press(Key::T);
        frame.record_press(Key::W);

        assert_eq!(frame.press_count(Key::T), 2);
        assert_eq!(frame.press_count(Key::W), 1);
        assert_eq!(frame.press_count(Key::S), 0);
        assert!(!frame.pressed(Key::S));

        frame.clear();
        assert!(!frame.pressed(Key::T));
    }
}

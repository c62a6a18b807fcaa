use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

const REPEAT_DELAY: f64 = 0.35; // Seconds a key must be held before it starts repeating
const REPEAT_INTERVAL: f64 = 1.0 / 30.0; // Seconds between repeats once it does

/// Turns a held key into a stream of presses, like the OS key repeat.
pub struct KeyRepeat {
    key: KeyCode,
    held_since: Option<f64>,
    last_fire: f64,
}

impl KeyRepeat {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            held_since: None,
            last_fire: 0.0,
        }
    }

    /// Polls macroquad for this frame.
    pub fn fired(&mut self, now: f64) -> bool {
        self.update(is_key_pressed(self.key), is_key_down(self.key), now)
    }

    fn update(&mut self, pressed: bool, down: bool, now: f64) -> bool {
        if pressed {
            self.held_since = Some(now);
            self.last_fire = now;
            return true;
        }

        match self.held_since {
            Some(since) if down => {
                if now - since >= REPEAT_DELAY && now - self.last_fire >= REPEAT_INTERVAL {
                    self.last_fire = now;
                    true
                } else {
                    false
                }
            }
            _ => {
                self.held_since = None;
                false
            }
        }
    }
}

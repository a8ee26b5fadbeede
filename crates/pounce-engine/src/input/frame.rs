use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Per-frame input transitions.
///
/// `InputState` holds what is currently down; `InputFrame` records what changed
/// since the runtime last cleared it.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame (repeats excluded).
    keys_pressed: HashSet<Key>,

    /// Mouse buttons that went down this frame.
    buttons_pressed: HashSet<MouseButton>,

    /// A close request arrived this frame.
    pub close_requested: bool,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
        self.close_requested = false;
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn button_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    pub(crate) fn record_key_press(&mut self, key: Key) {
        self.keys_pressed.insert(key);
    }

    pub(crate) fn record_button_press(&mut self, btn: MouseButton) {
        self.buttons_pressed.insert(btn);
    }
}

//! Keyboard Input Module
//!
//! Key codes and the drive key state consumed by the per-frame update.
//! Decoupled from any windowing system; browser hosts translate
//! `KeyboardEvent.key` / `KeyboardEvent.code` strings with [`KeyCode::from_key_name`].

use serde::{Deserialize, Serialize};

use super::bindings::{DriveAction, DriveBindings};

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Space,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a browser key name to a key code.
    ///
    /// Accepts both `KeyboardEvent.key` values (`"w"`, `"W"`, `"ArrowUp"`, `" "`)
    /// and `KeyboardEvent.code` values (`"KeyW"`, `"Space"`).
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "w" | "W" | "KeyW" => KeyCode::W,
            "a" | "A" | "KeyA" => KeyCode::A,
            "s" | "S" | "KeyS" => KeyCode::S,
            "d" | "D" | "KeyD" => KeyCode::D,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            " " | "Space" | "Spacebar" => KeyCode::Space,
            "Escape" | "Esc" => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

/// Input flags for one frame of driving.
///
/// `forward`/`backward` are throttle, `left`/`right` steer. When both keys
/// of a pair are held, forward and left win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DriveKeys {
    /// Create a drive key state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build directly from the four WASD flags.
    pub fn from_wasd(w: bool, a: bool, s: bool, d: bool) -> Self {
        Self {
            forward: w,
            backward: s,
            left: a,
            right: d,
        }
    }

    /// Update drive state based on key press/release.
    ///
    /// Returns `true` if the key is bound to a drive action and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, bindings: &DriveBindings) -> bool {
        match bindings.action_for(key) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }

    /// Set the flag behind a drive action directly.
    pub fn set(&mut self, action: DriveAction, pressed: bool) {
        match action {
            DriveAction::Accelerate => self.forward = pressed,
            DriveAction::Reverse => self.backward = pressed,
            DriveAction::SteerLeft => self.left = pressed,
            DriveAction::SteerRight => self.right = pressed,
        }
    }

    /// True while either throttle key is held.
    pub fn any_throttle(&self) -> bool {
        self.forward || self.backward
    }

    /// Check if any drive key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_keys_default() {
        let keys = DriveKeys::new();
        assert!(!keys.any_pressed());
        assert!(!keys.any_throttle());
    }

    #[test]
    fn test_handle_key_wasd() {
        let bindings = DriveBindings::default();
        let mut keys = DriveKeys::new();

        assert!(keys.handle_key(KeyCode::W, true, &bindings));
        assert!(keys.forward);
        assert!(keys.any_throttle());

        assert!(keys.handle_key(KeyCode::A, true, &bindings));
        assert!(keys.left);

        assert!(keys.handle_key(KeyCode::W, false, &bindings));
        assert!(!keys.forward);
        assert!(!keys.any_throttle());
        assert!(keys.any_pressed());
    }

    #[test]
    fn test_unbound_key_not_handled() {
        let bindings = DriveBindings::default();
        let mut keys = DriveKeys::new();
        assert!(!keys.handle_key(KeyCode::Space, true, &bindings));
        assert!(!keys.handle_key(KeyCode::Unknown, true, &bindings));
        assert_eq!(keys, DriveKeys::new());
    }

    #[test]
    fn test_from_key_name() {
        assert_eq!(KeyCode::from_key_name("w"), KeyCode::W);
        assert_eq!(KeyCode::from_key_name("W"), KeyCode::W);
        assert_eq!(KeyCode::from_key_name("KeyD"), KeyCode::D);
        assert_eq!(KeyCode::from_key_name("ArrowLeft"), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_key_name(" "), KeyCode::Space);
        assert_eq!(KeyCode::from_key_name("q"), KeyCode::Unknown);
    }

    #[test]
    fn test_from_wasd() {
        let keys = DriveKeys::from_wasd(true, false, false, true);
        assert!(keys.forward && keys.right);
        assert!(!keys.backward && !keys.left);
    }

    #[test]
    fn test_reset() {
        let mut keys = DriveKeys::from_wasd(true, true, true, true);
        keys.reset();
        assert!(!keys.any_pressed());
    }
}

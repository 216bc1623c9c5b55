//! Input Bindings Module
//!
//! Maps physical keys to drive actions so keys can be remapped from config
//! without touching the vehicle code.

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical drive actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveAction {
    /// Throttle forward (default: W, ArrowUp)
    Accelerate,
    /// Throttle backward (default: S, ArrowDown)
    Reverse,
    /// Turn left (default: A, ArrowLeft)
    SteerLeft,
    /// Turn right (default: D, ArrowRight)
    SteerRight,
}

/// Key bindings for the four drive actions. Several keys may share an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveBindings {
    pub accelerate: Vec<KeyCode>,
    pub reverse: Vec<KeyCode>,
    pub steer_left: Vec<KeyCode>,
    pub steer_right: Vec<KeyCode>,
}

impl Default for DriveBindings {
    fn default() -> Self {
        Self {
            accelerate: vec![KeyCode::W, KeyCode::ArrowUp],
            reverse: vec![KeyCode::S, KeyCode::ArrowDown],
            steer_left: vec![KeyCode::A, KeyCode::ArrowLeft],
            steer_right: vec![KeyCode::D, KeyCode::ArrowRight],
        }
    }
}

impl DriveBindings {
    /// Get the action bound to a physical key, if any.
    ///
    /// When a key appears under several actions the first match wins, in the
    /// order Accelerate, Reverse, SteerLeft, SteerRight.
    pub fn action_for(&self, key: KeyCode) -> Option<DriveAction> {
        if self.accelerate.contains(&key) {
            Some(DriveAction::Accelerate)
        } else if self.reverse.contains(&key) {
            Some(DriveAction::Reverse)
        } else if self.steer_left.contains(&key) {
            Some(DriveAction::SteerLeft)
        } else if self.steer_right.contains(&key) {
            Some(DriveAction::SteerRight)
        } else {
            None
        }
    }

    /// Bind a key to an action, removing it from any other action first.
    pub fn bind(&mut self, key: KeyCode, action: DriveAction) {
        self.unbind_key(key);
        self.keys_mut(action).push(key);
    }

    /// Remove a key from every action.
    pub fn unbind_key(&mut self, key: KeyCode) {
        for keys in [
            &mut self.accelerate,
            &mut self.reverse,
            &mut self.steer_left,
            &mut self.steer_right,
        ] {
            keys.retain(|k| *k != key);
        }
    }

    /// Keys currently bound to an action.
    pub fn keys_for(&self, action: DriveAction) -> &[KeyCode] {
        match action {
            DriveAction::Accelerate => &self.accelerate,
            DriveAction::Reverse => &self.reverse,
            DriveAction::SteerLeft => &self.steer_left,
            DriveAction::SteerRight => &self.steer_right,
        }
    }

    fn keys_mut(&mut self, action: DriveAction) -> &mut Vec<KeyCode> {
        match action {
            DriveAction::Accelerate => &mut self.accelerate,
            DriveAction::Reverse => &mut self.reverse,
            DriveAction::SteerLeft => &mut self.steer_left,
            DriveAction::SteerRight => &mut self.steer_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = DriveBindings::default();
        assert_eq!(bindings.action_for(KeyCode::W), Some(DriveAction::Accelerate));
        assert_eq!(bindings.action_for(KeyCode::S), Some(DriveAction::Reverse));
        assert_eq!(bindings.action_for(KeyCode::A), Some(DriveAction::SteerLeft));
        assert_eq!(bindings.action_for(KeyCode::D), Some(DriveAction::SteerRight));
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), Some(DriveAction::Accelerate));
        assert_eq!(bindings.action_for(KeyCode::Space), None);
    }

    #[test]
    fn test_rebind_key_moves_it() {
        let mut bindings = DriveBindings::default();
        bindings.bind(KeyCode::W, DriveAction::Reverse);

        assert_eq!(bindings.action_for(KeyCode::W), Some(DriveAction::Reverse));
        assert_eq!(bindings.keys_for(DriveAction::Accelerate), &[KeyCode::ArrowUp]);
        assert!(bindings.keys_for(DriveAction::Reverse).contains(&KeyCode::W));
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = DriveBindings::default();
        bindings.unbind_key(KeyCode::D);
        assert_eq!(bindings.action_for(KeyCode::D), None);
        assert_eq!(bindings.keys_for(DriveAction::SteerRight), &[KeyCode::ArrowRight]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let bindings: DriveBindings =
            serde_json::from_str(r#"{ "accelerate": ["Space"] }"#).unwrap();
        assert_eq!(bindings.action_for(KeyCode::Space), Some(DriveAction::Accelerate));
        assert_eq!(bindings.action_for(KeyCode::W), None);
        assert_eq!(bindings.action_for(KeyCode::S), Some(DriveAction::Reverse));
    }
}

//! Input Module
//!
//! Platform-agnostic drive input. The host captures raw key events and feeds
//! them through [`DriveKeys::handle_key`]; the level only ever sees the
//! resulting flags.
//!
//! # Example
//!
//! ```rust,ignore
//! use ramp_rally_engine::input::{DriveBindings, DriveKeys, KeyCode};
//!
//! let bindings = DriveBindings::default();
//! let mut keys = DriveKeys::new();
//!
//! keys.handle_key(KeyCode::from_key_name("w"), true, &bindings);
//! if keys.forward {
//!     // Throttle is held
//! }
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{DriveAction, DriveBindings};
pub use keyboard::{DriveKeys, KeyCode};

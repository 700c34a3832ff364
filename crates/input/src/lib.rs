//! Desktop input mapped to camera offsets.
//!
//! The window layer translates raw device events into [`Action`]s; the
//! [`CameraController`] turns actions into position/yaw/pitch offsets on the
//! camera and tracks the field of view. This crate never sees windowing
//! types, so the mapping is testable without a window.
//!
//! # Invariants
//! - All offsets handed to the camera are already scaled by elapsed frame
//!   time and the sensitivity/speed constants.
//! - Field of view stays in `[1, 45]` degrees.

pub mod action;
pub mod controller;
pub mod cursor;

pub use action::{Action, MoveDirection};
pub use controller::CameraController;
pub use cursor::CursorTracker;

//! Free-fly camera: orientation state plus the derived basis and view transform.
//!
//! # Invariants
//! - Yaw stays in `[0, 360)` degrees; pitch stays within `[-89, 89]` degrees.
//! - Direction/right/up are derived from yaw/pitch on read, never stored as
//!   independent truth.
//! - Single writer, single reader per frame: callers apply all input-driven
//!   mutations before reading the basis or view for that frame.

pub mod camera;
pub mod orientation;

pub use camera::Camera;
pub use orientation::{Orientation, WORLD_UP};

//! wgpu render front end for the fly-camera demo.
//!
//! Renders a fixed field of cubes lit by a single orbiting point light.
//! Consumes the camera's position/direction/view each frame and owns the
//! perspective projection (the scroll-driven field of view lives with the
//! front end, not the camera).
//!
//! # Invariants
//! - The renderer never mutates the camera; it reads a fully-updated camera
//!   after the frame's input has been applied.
//! - Scene content is static; only the light and the camera move.

mod gpu;
mod light;
mod projection;
mod scene;
mod shaders;

pub use gpu::WgpuRenderer;
pub use light::PointLight;
pub use projection::Projection;
pub use scene::Scene;

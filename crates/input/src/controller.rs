use flyby_camera::{Camera, WORLD_UP};

use crate::action::{Action, MoveDirection};
use crate::cursor::CursorTracker;

/// Lower bound of the zoomable field of view, in degrees.
pub const MIN_FOV_DEGREES: f32 = 1.0;
/// Upper bound of the zoomable field of view, in degrees.
pub const MAX_FOV_DEGREES: f32 = 45.0;

/// Per-session input context: cursor tracking, tuning constants, and the
/// scroll-driven field of view.
///
/// One instance lives for the whole session and is the single place input
/// state accumulates; the camera itself stays free of input concerns. The
/// field of view belongs here rather than on the camera because only the
/// projection consumes it.
#[derive(Debug, Clone)]
pub struct CameraController {
    cursor: CursorTracker,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub sensitivity: f32,
    fov_degrees: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            cursor: CursorTracker::new(),
            speed: 6.0,
            sensitivity: 0.2,
            fov_degrees: MAX_FOV_DEGREES,
        }
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field of view in degrees, always within `[1, 45]`.
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Dispatch one action onto the camera. `dt` is the elapsed frame time
    /// in seconds and scales movement only; look and zoom deltas arrive
    /// per-event, not per-frame.
    pub fn apply(&mut self, camera: &mut Camera, action: Action, dt: f32) {
        match action {
            Action::Move(direction) => self.apply_move(camera, direction, dt),
            Action::Look { x, y } => self.cursor_moved(camera, x, y),
            Action::Zoom(steps) => self.zoom(steps),
        }
    }

    /// Move the camera along one axis for this frame.
    ///
    /// Direction and right are read from the camera at call time, so
    /// movement issued after a same-frame rotation follows the rotated
    /// basis.
    pub fn apply_move(&self, camera: &mut Camera, direction: MoveDirection, dt: f32) {
        let step = self.speed * dt;
        let delta = match direction {
            MoveDirection::Forward => camera.direction() * step,
            MoveDirection::Backward => -camera.direction() * step,
            MoveDirection::Left => -camera.right() * step,
            MoveDirection::Right => camera.right() * step,
            MoveDirection::Up => WORLD_UP * step,
            MoveDirection::Down => -WORLD_UP * step,
        };
        camera.offset_position(delta);
    }

    /// Feed an absolute cursor position; rotates the camera by the tracked
    /// delta scaled by sensitivity.
    pub fn cursor_moved(&mut self, camera: &mut Camera, x: f32, y: f32) {
        let (dx, dy) = self.cursor.sample(x, y);
        camera.offset_yaw(dx * self.sensitivity);
        camera.offset_pitch(dy * self.sensitivity);
    }

    /// Forget the last cursor position. Call when mouse look is re-engaged
    /// so the first new sample does not snap the view.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Apply a scroll step to the field of view; positive steps zoom in.
    pub fn zoom(&mut self, steps: f32) {
        let requested = self.fov_degrees - steps;
        self.fov_degrees = requested.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES);
        if self.fov_degrees != requested {
            tracing::debug!(requested, clamped = self.fov_degrees, "fov clamped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const TOL: f32 = 1e-5;

    #[test]
    fn fov_clamps_at_both_bounds() {
        let mut ctl = CameraController::new();
        ctl.zoom(100.0);
        assert_eq!(ctl.fov_degrees(), MIN_FOV_DEGREES);
        ctl.zoom(-3.5);
        assert_eq!(ctl.fov_degrees(), 4.5);
        ctl.zoom(-100.0);
        assert_eq!(ctl.fov_degrees(), MAX_FOV_DEGREES);
    }

    #[test]
    fn scroll_up_narrows_the_fov() {
        let mut ctl = CameraController::new();
        ctl.zoom(1.0);
        assert_eq!(ctl.fov_degrees(), 44.0);
    }

    #[test]
    fn forward_move_follows_the_view_direction() {
        let mut camera = Camera::default();
        camera.set_position(Vec3::ZERO);
        let ctl = CameraController::new();
        ctl.apply_move(&mut camera, MoveDirection::Forward, 0.5);
        // Default camera looks down -Z; speed 6.0 for half a second.
        assert!((camera.position() - Vec3::new(0.0, 0.0, -3.0)).length() < TOL);
    }

    #[test]
    fn strafe_uses_the_derived_right_vector() {
        let mut camera = Camera::default();
        camera.set_position(Vec3::ZERO);
        let ctl = CameraController::new();
        ctl.apply_move(&mut camera, MoveDirection::Right, 1.0 / 6.0);
        assert!((camera.position() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);
        ctl.apply_move(&mut camera, MoveDirection::Left, 1.0 / 6.0);
        assert!(camera.position().length() < 1e-4);
    }

    #[test]
    fn vertical_moves_use_the_world_axis() {
        let mut camera = Camera::default();
        camera.set_position(Vec3::ZERO);
        let mut ctl = CameraController::new();
        // Pitch the camera hard down; Up must still move along world up.
        camera.offset_pitch(-80.0);
        ctl.apply(&mut camera, Action::Move(MoveDirection::Up), 1.0 / 6.0);
        assert!((camera.position() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn look_applies_sensitivity_scaled_offsets() {
        let mut camera = Camera::default();
        let mut ctl = CameraController::new();
        ctl.cursor_moved(&mut camera, 100.0, 100.0); // first sample: no-op
        assert_eq!(camera.yaw(), 270.0);
        ctl.cursor_moved(&mut camera, 150.0, 60.0);
        // dx=50, dy=+40 (inverted), sensitivity 0.2.
        assert!((camera.yaw() - 280.0).abs() < TOL);
        assert!((camera.pitch() - 8.0).abs() < TOL);
    }

    #[test]
    fn look_cannot_push_pitch_past_the_clamp() {
        let mut camera = Camera::default();
        let mut ctl = CameraController::new();
        ctl.cursor_moved(&mut camera, 0.0, 10_000.0);
        ctl.cursor_moved(&mut camera, 0.0, 0.0);
        assert_eq!(camera.pitch(), 89.0);
    }

    #[test]
    fn rotation_then_movement_uses_the_new_basis() {
        let mut camera = Camera::default();
        camera.set_position(Vec3::ZERO);
        let ctl = CameraController::new();
        // Turn 90 degrees right (to yaw 0, facing +X), then move forward.
        camera.offset_yaw(90.0);
        ctl.apply_move(&mut camera, MoveDirection::Forward, 1.0 / 6.0);
        assert!((camera.position() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);
    }
}

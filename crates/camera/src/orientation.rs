use glam::Vec3;

/// Fixed world up axis. The stable reference for right-vector derivation;
/// never part of mutable state.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Eye position and viewing angles, with the bounds policy applied on every
/// mutation.
///
/// Yaw is the rotation about the world up axis in degrees, normalized into
/// `[0, 360)`. Pitch is the elevation above the horizontal plane in degrees,
/// kept within `[-89, 89]` so the direction never reaches the vertical pole
/// (where the right vector would degenerate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Orientation {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut o = Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        };
        o.set_yaw(yaw);
        let _ = o.set_pitch(pitch);
        o
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Replace the position unconditionally. Position is unbounded.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Add a delta to the position. No clamping.
    pub fn offset_position(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Store a yaw, wrapping by one revolution at most: a result of 360 or
    /// more has 360 subtracted once, a negative result has 360 added once.
    /// Inputs more than one revolution out of range are not further
    /// corrected.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        if self.yaw >= 360.0 {
            self.yaw -= 360.0;
        }
        if self.yaw < 0.0 {
            self.yaw += 360.0;
        }
    }

    /// Add a delta to the yaw, with the same single-step wrap as `set_yaw`.
    pub fn offset_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Store a pitch only if it is strictly inside `(-89, 89)`; anything
    /// else is a silent no-op. Returns whether the value was accepted.
    ///
    /// Note the asymmetry with `offset_pitch`, which clamps instead of
    /// rejecting. Both policies are kept as-is.
    pub fn set_pitch(&mut self, pitch: f32) -> bool {
        if pitch > -89.0 && pitch < 89.0 {
            self.pitch = pitch;
            true
        } else {
            false
        }
    }

    /// Add a delta to the pitch, clamping the result to `[-89, 89]`.
    pub fn offset_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-89.0, 89.0);
    }
}

impl Default for Orientation {
    /// Eye at `(0, 0, 3)` looking down -Z (yaw 270), pitch level.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), 270.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_world_forward() {
        let o = Orientation::default();
        assert_eq!(o.yaw(), 270.0);
        assert_eq!(o.pitch(), 0.0);
        assert_eq!(o.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn set_yaw_wraps_within_one_revolution() {
        let mut o = Orientation::default();
        o.set_yaw(400.0);
        assert_eq!(o.yaw(), 40.0);
        o.set_yaw(-90.0);
        assert_eq!(o.yaw(), 270.0);
        o.set_yaw(359.5);
        assert_eq!(o.yaw(), 359.5);
    }

    #[test]
    fn set_yaw_result_stays_in_range_for_one_revolution_inputs() {
        for y in [-360.0, -1.0, 0.0, 90.0, 359.9, 360.0, 719.9] {
            let mut o = Orientation::default();
            o.set_yaw(y);
            assert!(o.yaw() >= 0.0 && o.yaw() < 360.0, "yaw {y} -> {}", o.yaw());
            assert!((o.yaw() - y.rem_euclid(360.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn offset_yaw_wraps_at_full_turn() {
        let mut o = Orientation::default();
        o.set_yaw(270.0);
        o.offset_yaw(90.0);
        assert_eq!(o.yaw(), 0.0);
    }

    #[test]
    fn set_pitch_accepts_strict_interior_only() {
        let mut o = Orientation::default();
        assert!(o.set_pitch(45.0));
        assert_eq!(o.pitch(), 45.0);

        // Boundary and beyond are rejected without modification.
        assert!(!o.set_pitch(89.0));
        assert_eq!(o.pitch(), 45.0);
        assert!(!o.set_pitch(-89.0));
        assert_eq!(o.pitch(), 45.0);
        assert!(!o.set_pitch(95.0));
        assert_eq!(o.pitch(), 45.0);
    }

    #[test]
    fn offset_pitch_clamps_to_closed_range() {
        let mut o = Orientation::default();
        assert!(o.set_pitch(85.0));
        o.offset_pitch(10.0);
        assert_eq!(o.pitch(), 89.0);

        o.offset_pitch(-200.0);
        assert_eq!(o.pitch(), -89.0);

        o.offset_pitch(30.0);
        assert_eq!(o.pitch(), -59.0);
    }

    #[test]
    fn offset_pitch_matches_clamp_of_sum() {
        let mut o = Orientation::default();
        for d in [-120.0, -5.0, 0.0, 5.0, 120.0] {
            let before = o.pitch();
            o.offset_pitch(d);
            assert_eq!(o.pitch(), (before + d).clamp(-89.0, 89.0));
        }
    }

    #[test]
    fn position_is_unbounded() {
        let mut o = Orientation::default();
        o.set_position(Vec3::ZERO);
        o.offset_position(Vec3::new(0.0, -1e6, 2.5));
        assert_eq!(o.position(), Vec3::new(0.0, -1e6, 2.5));
    }
}

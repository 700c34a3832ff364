use glam::{Mat4, Vec3};

use crate::orientation::{Orientation, WORLD_UP};

/// Free-fly camera: a derived-value view over an [`Orientation`].
///
/// Direction, right, and up are recomputed from yaw/pitch on every read, so
/// a read issued after any number of same-frame mutations always reflects
/// the latest orientation. The cost is a handful of trig calls; there is no
/// dirty flag to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    orientation: Orientation,
}

impl Camera {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn position(&self) -> Vec3 {
        self.orientation.position()
    }

    pub fn yaw(&self) -> f32 {
        self.orientation.yaw()
    }

    pub fn pitch(&self) -> f32 {
        self.orientation.pitch()
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.orientation.set_position(position);
    }

    pub fn offset_position(&mut self, delta: Vec3) {
        self.orientation.offset_position(delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.orientation.set_yaw(yaw);
    }

    pub fn offset_yaw(&mut self, delta: f32) {
        self.orientation.offset_yaw(delta);
    }

    pub fn set_pitch(&mut self, pitch: f32) -> bool {
        self.orientation.set_pitch(pitch)
    }

    pub fn offset_pitch(&mut self, delta: f32) {
        self.orientation.offset_pitch(delta);
    }

    /// Unit view direction from the spherical angles: yaw sweeps the
    /// horizontal plane, pitch elevates out of it.
    pub fn direction(&self) -> Vec3 {
        let yaw = self.orientation.yaw().to_radians();
        let pitch = self.orientation.pitch().to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Unit right vector. Well-defined for every reachable orientation: the
    /// pitch bound keeps the direction off the vertical pole, so the cross
    /// product with the world up never collapses.
    pub fn right(&self) -> Vec3 {
        self.direction().cross(WORLD_UP).normalize()
    }

    /// Re-orthogonalized up vector used by the view transform. Derived from
    /// direction and right rather than assumed equal to the world up.
    pub fn up(&self) -> Vec3 {
        let dir = self.direction();
        dir.cross(dir.cross(WORLD_UP).normalize()).normalize()
    }

    /// Right-handed look-at transform from the eye toward `position +
    /// direction`. Rebuilt on every call; never cached across mutations.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position(),
            self.position() + self.direction(),
            self.up(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn camera_at(yaw: f32, pitch: f32) -> Camera {
        Camera::new(Orientation::new(Vec3::ZERO, yaw, pitch))
    }

    #[test]
    fn direction_is_unit_length_everywhere_reachable() {
        for yaw in [0.0, 45.0, 90.0, 180.0, 269.5, 359.9] {
            for pitch in [-89.0, -45.0, 0.0, 30.0, 89.0] {
                let mut cam = camera_at(yaw, 0.0);
                cam.offset_pitch(pitch);
                assert!(
                    (cam.direction().length() - 1.0).abs() < TOL,
                    "yaw={yaw} pitch={pitch}"
                );
            }
        }
    }

    #[test]
    fn right_is_orthogonal_to_direction() {
        for yaw in [0.0, 30.0, 135.0, 270.0] {
            let mut cam = camera_at(yaw, 0.0);
            cam.offset_pitch(-60.0);
            assert!(cam.direction().dot(cam.right()).abs() < TOL);
        }
    }

    #[test]
    fn up_is_orthogonal_to_direction_and_right() {
        let mut cam = camera_at(123.0, 0.0);
        cam.offset_pitch(40.0);
        assert!(cam.up().dot(cam.direction()).abs() < TOL);
        assert!(cam.up().dot(cam.right()).abs() < TOL);
        assert!((cam.up().length() - 1.0).abs() < TOL);
    }

    #[test]
    fn reads_are_idempotent_without_mutation() {
        let cam = camera_at(200.0, 0.0);
        assert_eq!(cam.direction(), cam.direction());
        assert_eq!(cam.right(), cam.right());
        assert_eq!(cam.view_matrix(), cam.view_matrix());
    }

    #[test]
    fn yaw_270_level_looks_down_negative_z() {
        let cam = camera_at(270.0, 0.0);
        let dir = cam.direction();
        assert!(dir.x.abs() < TOL);
        assert!(dir.y.abs() < TOL);
        assert!((dir.z + 1.0).abs() < TOL);
    }

    #[test]
    fn yaw_wrap_scenario() {
        let mut cam = camera_at(270.0, 0.0);
        cam.offset_yaw(90.0);
        assert_eq!(cam.yaw(), 0.0);
    }

    #[test]
    fn moving_along_direction_updates_position() {
        let mut cam = camera_at(270.0, 0.0);
        cam.set_position(Vec3::ZERO);
        let step = cam.direction() * 2.0;
        cam.offset_position(step);
        let pos = cam.position();
        assert!(pos.x.abs() < TOL);
        assert!(pos.y.abs() < TOL);
        assert!((pos.z + 2.0).abs() < TOL);
    }

    #[test]
    fn reads_after_mutation_see_the_new_orientation() {
        let mut cam = camera_at(270.0, 0.0);
        let before = cam.direction();
        cam.offset_yaw(90.0);
        let after = cam.direction();
        assert!((before - after).length() > 1.0);
        assert!((after.x - 1.0).abs() < TOL);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut cam = camera_at(315.0, 0.0);
        cam.set_position(Vec3::new(1.0, 2.0, 3.0));
        cam.offset_pitch(-20.0);
        let eye_in_view = cam.view_matrix().transform_point3(cam.position());
        assert!(eye_in_view.length() < TOL);
    }

    #[test]
    fn view_matrix_places_look_target_on_negative_z() {
        let cam = camera_at(30.0, 0.0);
        let target = cam.position() + cam.direction() * 5.0;
        let in_view = cam.view_matrix().transform_point3(target);
        assert!(in_view.x.abs() < 1e-4);
        assert!(in_view.y.abs() < 1e-4);
        assert!((in_view.z + 5.0).abs() < 1e-4);
    }
}

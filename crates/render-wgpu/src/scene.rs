use glam::{Mat4, Vec3};

/// World positions of the cube field.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Base colors cycled across the cube field.
const PALETTE: [Vec3; 5] = [
    Vec3::new(0.85, 0.45, 0.25),
    Vec3::new(0.30, 0.60, 0.85),
    Vec3::new(0.40, 0.75, 0.40),
    Vec3::new(0.80, 0.70, 0.30),
    Vec3::new(0.65, 0.45, 0.80),
];

/// The static cube field. Each cube gets a fixed yaw of `20 * index`
/// degrees, composed rotation-first so the whole field fans out around the
/// world origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scene;

impl Scene {
    pub fn new() -> Self {
        Self
    }

    pub fn cube_count(&self) -> usize {
        CUBE_POSITIONS.len()
    }

    /// Model matrix for one cube: `rotate_y(20deg * index) * translate(p)`.
    pub fn model_matrix(&self, index: usize) -> Mat4 {
        let angle = (20.0 * index as f32).to_radians();
        Mat4::from_rotation_y(angle) * Mat4::from_translation(CUBE_POSITIONS[index])
    }

    pub fn color(&self, index: usize) -> Vec3 {
        PALETTE[index % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_has_ten_cubes() {
        assert_eq!(Scene::new().cube_count(), 10);
    }

    #[test]
    fn cube_zero_sits_at_the_origin() {
        let scene = Scene::new();
        let origin = scene.model_matrix(0).transform_point3(Vec3::ZERO);
        assert!(origin.length() < 1e-5);
    }

    #[test]
    fn rotation_is_applied_after_translation() {
        let scene = Scene::new();
        // Cube 1 lives at (2, 5, -15); its world position is that point
        // swung 20 degrees around the world Y axis.
        let world = scene.model_matrix(1).transform_point3(Vec3::ZERO);
        let expected =
            Mat4::from_rotation_y(20.0_f32.to_radians()).transform_point3(CUBE_POSITIONS[1]);
        assert!((world - expected).length() < 1e-4);
        // Height is unaffected by a yaw rotation.
        assert!((world.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn model_matrices_preserve_scale() {
        let scene = Scene::new();
        for i in 0..scene.cube_count() {
            let m = scene.model_matrix(i);
            assert!((m.determinant() - 1.0).abs() < 1e-4, "cube {i}");
        }
    }

    #[test]
    fn colors_cycle_over_the_palette() {
        let scene = Scene::new();
        assert_eq!(scene.color(0), scene.color(5));
        assert_ne!(scene.color(0), scene.color(1));
    }
}

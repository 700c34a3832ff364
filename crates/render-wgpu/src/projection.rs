use glam::Mat4;

/// Perspective projection parameters. The field of view is written by the
/// input layer each frame; aspect follows the window surface.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 1280.0 / 720.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Update the aspect ratio from a surface size in pixels.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn matrix_is_finite() {
        let proj = Projection::default();
        let m = proj.matrix();
        for c in 0..4 {
            assert!(!m.col(c).x.is_nan());
        }
    }

    #[test]
    fn narrower_fov_magnifies() {
        let wide = Projection::default();
        let narrow = Projection {
            fov_degrees: 10.0,
            ..Projection::default()
        };
        let p = Vec3::new(0.5, 0.5, -10.0);
        let a = wide.matrix().project_point3(p);
        let b = narrow.matrix().project_point3(p);
        assert!(b.x.abs() > a.x.abs());
        assert!(b.y.abs() > a.y.abs());
    }

    #[test]
    fn aspect_follows_surface_size() {
        let mut proj = Projection::default();
        proj.set_aspect(1920, 1080);
        assert!((proj.aspect - 16.0 / 9.0).abs() < 1e-5);
        // Degenerate sizes are pinned to one pixel.
        proj.set_aspect(0, 0);
        assert_eq!(proj.aspect, 1.0);
    }
}

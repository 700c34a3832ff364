use glam::Vec3;

/// A single point light orbiting the cube field on a horizontal circle.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: Vec3,
    /// Orbit radius in world units.
    pub radius: f32,
    /// Height of the orbit plane above the world origin.
    pub height: f32,
    /// Angular speed in radians per second.
    pub angular_speed: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            radius: 3.0,
            height: 2.0,
            angular_speed: 0.8,
        }
    }
}

impl PointLight {
    /// Light position at `time` seconds since session start.
    pub fn position(&self, time: f32) -> Vec3 {
        let angle = time * self.angular_speed;
        Vec3::new(
            angle.cos() * self.radius,
            self.height,
            angle.sin() * self.radius,
        )
    }
}

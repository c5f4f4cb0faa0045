use glam::Vec3;

use crate::renderer::camera::PerspectiveCamera;

/// Exponential-decay factor applied to pending rotation every update.
pub const DEFAULT_DAMPING: f32 = 0.05;
/// Eye distance after a view reset.
pub const RESET_RADIUS: f32 = 50.0;
/// Dolly clamp range.
pub const RADIUS_MIN: f32 = 10.0;
pub const RADIUS_MAX: f32 = 500.0;

/// Keeps the polar angle off the poles so the view never flips.
const PHI_EPSILON: f32 = 0.01;

/// Damped orbit controller around a target point.
///
/// Pointer drags accumulate into pending angle deltas; `update` bleeds a
/// `damping_factor` fraction of them into the camera each step, so motion
/// eases out over several frames. Dolly is multiplicative and clamped.
pub struct OrbitController {
    pub target: Vec3,
    pub damping_factor: f32,
    /// Eye distance from the target.
    radius: f32,
    /// Azimuth around +Y; 0 places the eye on +Z.
    theta: f32,
    /// Polar angle from +Y; PI/2 is the equatorial plane.
    phi: f32,
    theta_delta: f32,
    phi_delta: f32,
    dolly_scale: f32,
}

impl OrbitController {
    /// Adopt the camera's current eye/target as the orbit state.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().clamp(RADIUS_MIN, RADIUS_MAX);
        let phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            std::f32::consts::FRAC_PI_2
        };
        let theta = offset.x.atan2(offset.z);
        Self {
            target: camera.target,
            damping_factor: DEFAULT_DAMPING,
            radius,
            theta,
            phi,
            theta_delta: 0.0,
            phi_delta: 0.0,
            dolly_scale: 1.0,
        }
    }

    /// Queue a rotation (radians of azimuth and polar) from a pointer drag.
    pub fn rotate(&mut self, delta_theta: f32, delta_phi: f32) {
        self.theta_delta -= delta_theta;
        self.phi_delta -= delta_phi;
    }

    /// Queue a multiplicative dolly (>1 moves the eye outward).
    pub fn dolly(&mut self, scale: f32) {
        self.dolly_scale *= scale;
    }

    /// Apply one damping step and write the resulting pose to the camera.
    /// Runs every frame, paused or not.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let k = self.damping_factor;
        self.theta += self.theta_delta * k;
        self.phi = (self.phi + self.phi_delta * k)
            .clamp(PHI_EPSILON, std::f32::consts::PI - PHI_EPSILON);
        self.theta_delta *= 1.0 - k;
        self.phi_delta *= 1.0 - k;

        self.radius = (self.radius * self.dolly_scale).clamp(RADIUS_MIN, RADIUS_MAX);
        self.dolly_scale = 1.0;

        self.apply(camera);
    }

    /// Reset to the home pose: target at the origin, eye on +Z at
    /// `RESET_RADIUS`, pending motion discarded.
    pub fn reset(&mut self, camera: &mut PerspectiveCamera) {
        self.target = Vec3::ZERO;
        self.radius = RESET_RADIUS;
        self.theta = 0.0;
        self.phi = std::f32::consts::FRAC_PI_2;
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.dolly_scale = 1.0;
        self.apply(camera);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn apply(&self, camera: &mut PerspectiveCamera) {
        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        camera.eye = self.target + offset;
        camera.target = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(16.0 / 9.0)
    }

    #[test]
    fn adopts_camera_pose() {
        let cam = camera(); // eye (0, 0, 100)
        let controls = OrbitController::from_camera(&cam);
        assert!((controls.radius() - 100.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_eases_toward_queued_delta() {
        let mut cam = camera();
        let mut controls = OrbitController::from_camera(&cam);
        controls.rotate(1.0, 0.0);

        controls.update(&mut cam);
        let first = cam.eye;
        // One step moves only a damping_factor fraction of the way.
        assert!((first - Vec3::new(0.0, 0.0, 100.0)).length() > 0.0);

        for _ in 0..400 {
            controls.update(&mut cam);
        }
        // Fully converged: azimuth -1 rad from +Z.
        let expected = Vec3::new(100.0 * (-1.0_f32).sin(), 0.0, 100.0 * (-1.0_f32).cos());
        assert!((cam.eye - expected).length() < 0.1);
    }

    #[test]
    fn update_without_input_is_stable() {
        let mut cam = camera();
        let mut controls = OrbitController::from_camera(&cam);
        controls.update(&mut cam);
        let eye = cam.eye;
        for _ in 0..10 {
            controls.update(&mut cam);
        }
        assert!((cam.eye - eye).length() < 1e-4);
    }

    #[test]
    fn dolly_is_clamped() {
        let mut cam = camera();
        let mut controls = OrbitController::from_camera(&cam);
        for _ in 0..200 {
            controls.dolly(1.5);
            controls.update(&mut cam);
        }
        assert!((controls.radius() - RADIUS_MAX).abs() < 1e-3);
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut cam = camera();
        let mut controls = OrbitController::from_camera(&cam);
        controls.rotate(2.0, 0.5);
        controls.dolly(2.0);
        for _ in 0..20 {
            controls.update(&mut cam);
        }

        controls.reset(&mut cam);
        assert!((cam.eye - Vec3::new(0.0, 0.0, RESET_RADIUS)).length() < 1e-4);
        assert_eq!(cam.target, Vec3::ZERO);

        // No residual drift from before the reset.
        controls.update(&mut cam);
        assert!((cam.eye - Vec3::new(0.0, 0.0, RESET_RADIUS)).length() < 1e-4);
    }
}

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Default vertical field of view in radians (75 degrees).
pub const DEFAULT_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera for 3D rendering.
/// Produces a view-projection matrix mapping world space to clip space.
pub struct PerspectiveCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye position in world space.
    pub eye: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    pub up: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y: DEFAULT_FOV_Y,
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            eye: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            eye: self.eye.to_array(),
            _pad: 0.0,
        }
    }

    /// Recompute the aspect ratio on viewport resize. Field of view is
    /// preserved.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.aspect = viewport_width / viewport_height.max(1.0);
    }

    /// Map a normalized-device-space point (x, y in -1..1, depth in 0..1)
    /// back into world space.
    pub fn unproject(&self, ndc_x: f32, ndc_y: f32, depth: f32) -> Vec3 {
        self.view_projection()
            .inverse()
            .project_point3(Vec3::new(ndc_x, ndc_y, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_sets_aspect() {
        let mut cam = PerspectiveCamera::new(1.0);
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn view_projection_centers_target() {
        // The look-at target projects to the center of the screen.
        let cam = PerspectiveCamera::new(16.0 / 9.0);
        let clip = cam.view_projection().project_point3(cam.target);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
    }

    #[test]
    fn unproject_roundtrips_through_projection() {
        let cam = PerspectiveCamera::new(16.0 / 9.0);
        let world = Vec3::new(10.0, -4.0, 20.0);
        let clip = cam.view_projection().project_point3(world);
        let back = cam.unproject(clip.x, clip.y, clip.z);
        assert!((back - world).length() < 1e-2);
    }

    #[test]
    fn uniform_is_pod_sized() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), (16 + 4) * 4);
    }
}

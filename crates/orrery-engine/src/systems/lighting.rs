/// Scene lighting state.
///
/// Lights are persistent: added once at scene construction and serialized
/// to flat buffers for the host's shading pass each frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A point light.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, intensity, r, g, b, range]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Falloff distance in world units.
    pub range: f32,
}

pub const POINT_LIGHT_FLOATS: usize = 8;

impl PointLight {
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            intensity,
            r: color[0],
            g: color[1],
            b: color[2],
            range,
        }
    }
}

/// A directional light. The direction is normalized at construction.
///
/// Wire format (8 floats / 32 bytes):
/// `[dx, dy, dz, intensity, r, g, b, pad]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DirectionalLight {
    pub dx: f32,
    pub dy: f32,
    pub dz: f32,
    pub intensity: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub _pad: f32,
}

pub const DIRECTIONAL_LIGHT_FLOATS: usize = 8;

impl DirectionalLight {
    pub fn new(dir: Vec3, color: [f32; 3], intensity: f32) -> Self {
        let dir = dir.normalize_or_zero();
        Self {
            dx: dir.x,
            dy: dir.y,
            dz: dir.z,
            intensity,
            r: color[0],
            g: color[1],
            b: color[2],
            _pad: 0.0,
        }
    }
}

/// Ambient color plus the scene's point and directional lights.
pub struct LightState {
    ambient: [f32; 3],
    points: Vec<PointLight>,
    directionals: Vec<DirectionalLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            ambient: [0.0, 0.0, 0.0],
            points: Vec::new(),
            directionals: Vec::new(),
        }
    }

    /// Set the ambient light color.
    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    pub fn add_point(&mut self, light: PointLight) {
        self.points.push(light);
    }

    pub fn add_directional(&mut self, light: DirectionalLight) {
        self.directionals.push(light);
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn directional_count(&self) -> usize {
        self.directionals.len()
    }

    /// Pointer to the point-light data for host reads.
    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }

    /// Pointer to the directional-light data for host reads.
    pub fn directionals_ptr(&self) -> *const f32 {
        self.directionals.as_ptr() as *const f32
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.directionals.clear();
        self.ambient = [0.0, 0.0, 0.0];
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

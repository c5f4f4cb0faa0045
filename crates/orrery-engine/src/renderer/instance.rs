use bytemuck::{Pod, Zeroable};
use glam::EulerRot;

use crate::assets::textures::TextureRegistry;
use crate::components::mesh::Shape;
use crate::core::scene::SceneGraph;

/// Shape discriminants in the wire format.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_RING: f32 = 1.0;

/// Per-instance render data read by the host renderer each frame.
/// 16 floats = 64 bytes stride.
///
/// `param_a` is the sphere radius or the ring outer radius; `param_b` is the
/// ring inner radius (unused for spheres). `texture` is the slot index of a
/// ready texture, or -1.0 while the slot is pending or failed.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub shape: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub param_a: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub param_b: f32,
    pub texture: f32,
    pub emissive: f32,
    pub shininess: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all mesh instances for one frame.
pub struct RenderBuffer {
    /// Instances ordered by pass: opaque first, translucent after
    /// `opaque_split`.
    pub instances: Vec<RenderInstance>,
    /// Index where the translucent pass begins.
    pub opaque_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            opaque_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.opaque_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild the render buffer from the propagated scene.
///
/// Opaque instances come first, translucent ones after the split so the host
/// can blend them over the spheres. Within a pass, scene spawn order is kept.
pub fn build_render_buffer(
    scene: &SceneGraph,
    textures: &TextureRegistry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let mut translucent: Vec<RenderInstance> = Vec::new();

    for node in scene.iter() {
        if !node.visible {
            continue;
        }
        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };

        let (scale, rotation, translation) = node.world.to_scale_rotation_translation();
        let (rot_x, rot_y, rot_z) = rotation.to_euler(EulerRot::XYZ);
        let uniform_scale = scale.x;

        let (shape, param_a, param_b) = match mesh.shape {
            Shape::Sphere { radius } => (SHAPE_SPHERE, radius * uniform_scale, 0.0),
            Shape::Ring { inner, outer } => {
                (SHAPE_RING, outer * uniform_scale, inner * uniform_scale)
            }
        };

        let instance = RenderInstance {
            x: translation.x,
            y: translation.y,
            z: translation.z,
            shape,
            rot_x,
            rot_y,
            rot_z,
            param_a,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            alpha: mesh.opacity,
            param_b,
            texture: textures.render_index(mesh.texture),
            emissive: mesh.emissive,
            shininess: mesh.shininess,
        };

        if mesh.is_translucent() {
            translucent.push(instance);
        } else {
            buffer.push(instance);
        }
    }

    buffer.opaque_split = buffer.instance_count();
    for instance in translucent {
        buffer.push(instance);
    }
}

use glam::{Vec2, Vec3};

use crate::api::types::{BodyId, NodeId};
use crate::components::mesh::Shape;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::PerspectiveCamera;

/// Map pointer screen coordinates to normalized device coordinates
/// (-1..1 on both axes, Y up).
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (x / width.max(1.0)) * 2.0 - 1.0,
        -(y / height.max(1.0)) * 2.0 + 1.0,
    )
}

/// A world-space ray cast from the camera through a screen point.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn from_camera(camera: &PerspectiveCamera, ndc: Vec2) -> Self {
        let point = camera.unproject(ndc.x, ndc.y, 0.5);
        Self {
            origin: camera.eye,
            dir: (point - camera.eye).normalize_or_zero(),
        }
    }

    /// Smallest non-negative ray parameter intersecting the sphere, if any.
    pub fn sphere_intersection(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            Some(near)
        } else {
            let far = -b + sqrt_d;
            (far >= 0.0).then_some(far)
        }
    }
}

/// A picked body: the intersected node, its registry id, and the ray
/// parameter at the hit.
#[derive(Debug, Clone, Copy)]
pub struct PickHit {
    pub node: NodeId,
    pub body: BodyId,
    pub distance: f32,
}

/// Cast a ray through `ndc` and return the nearest intersected body mesh.
///
/// Only sphere nodes carrying a body back-reference participate; orbit paths,
/// planetary rings and the starfield are never pickable. Ties resolve to the
/// earlier-spawned node (bodies are disjoint spheres, so ties do not occur in
/// practice).
pub fn pick(scene: &SceneGraph, camera: &PerspectiveCamera, ndc: Vec2) -> Option<PickHit> {
    let ray = Ray::from_camera(camera, ndc);

    let mut best: Option<PickHit> = None;
    for node in scene.iter() {
        let Some(body) = node.body else { continue };
        let Some(mesh) = &node.mesh else { continue };
        let Shape::Sphere { radius } = mesh.shape else { continue };

        let center = node.world_translation();
        let world_radius = radius * node.world_scale();
        if let Some(distance) = ray.sphere_intersection(center, world_radius) {
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(PickHit {
                    node: node.id,
                    body,
                    distance,
                });
            }
        }
    }
    best
}

/// Last pointer position and the body it hovers, recomputed on every
/// pointer-move event.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverState {
    pub pointer: Vec2,
    pub body: Option<BodyId>,
}

impl HoverState {
    pub fn update(&mut self, pointer: Vec2, hit: Option<&PickHit>) {
        self.pointer = pointer;
        self.body = hit.map(|h| h.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Color, MeshComponent};
    use crate::core::scene::{Node, Transform};

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(16.0 / 9.0) // eye (0, 0, 100), looking at origin
    }

    fn sphere_node(id: u32, body: BodyId, pos: Vec3, radius: f32) -> Node {
        Node::new(NodeId(id))
            .with_local(Transform::new().with_translation(pos))
            .with_mesh(MeshComponent::sphere(radius, Color::default()))
            .with_body(body)
    }

    #[test]
    fn screen_center_maps_to_ndc_origin() {
        let ndc = screen_to_ndc(640.0, 360.0, 1280.0, 720.0);
        assert!(ndc.length() < 1e-6);
    }

    #[test]
    fn screen_top_left_maps_to_upper_left_ndc() {
        let ndc = screen_to_ndc(0.0, 0.0, 1280.0, 720.0);
        assert_eq!(ndc, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn ray_hits_sphere_dead_ahead() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 100.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = ray.sphere_intersection(Vec3::ZERO, 5.0).unwrap();
        assert!((t - 95.0).abs() < 1e-3);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 100.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(ray.sphere_intersection(Vec3::new(10.0, 0.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn ray_inside_sphere_hits_forward() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = ray.sphere_intersection(Vec3::ZERO, 5.0).unwrap();
        assert!((t - 5.0).abs() < 1e-3);
    }

    #[test]
    fn pick_resolves_body_at_center() {
        let mut scene = SceneGraph::new();
        scene.spawn(sphere_node(1, 0, Vec3::ZERO, 5.0));
        scene.propagate();

        let hit = pick(&scene, &camera(), Vec2::ZERO).expect("sphere at center");
        assert_eq!(hit.body, 0);
        assert!((hit.distance - 95.0).abs() < 0.1);
    }

    #[test]
    fn pick_empty_space_returns_none() {
        let mut scene = SceneGraph::new();
        scene.spawn(sphere_node(1, 0, Vec3::ZERO, 5.0));
        scene.propagate();

        assert!(pick(&scene, &camera(), Vec2::new(0.0, 0.9)).is_none());
    }

    #[test]
    fn pick_prefers_nearest_along_ray() {
        let mut scene = SceneGraph::new();
        scene.spawn(sphere_node(1, 0, Vec3::new(0.0, 0.0, -50.0), 5.0));
        scene.spawn(sphere_node(2, 1, Vec3::new(0.0, 0.0, 20.0), 5.0));
        scene.propagate();

        let hit = pick(&scene, &camera(), Vec2::ZERO).unwrap();
        assert_eq!(hit.body, 1);
    }

    #[test]
    fn nodes_without_body_are_not_pickable() {
        let mut scene = SceneGraph::new();
        scene.spawn(
            Node::new(NodeId(1)).with_mesh(MeshComponent::sphere(5.0, Color::default())),
        );
        scene.propagate();

        assert!(pick(&scene, &camera(), Vec2::ZERO).is_none());
    }

    #[test]
    fn hover_state_tracks_and_clears() {
        let mut hover = HoverState::default();
        let hit = PickHit {
            node: NodeId(1),
            body: 3,
            distance: 10.0,
        };
        hover.update(Vec2::new(5.0, 6.0), Some(&hit));
        assert_eq!(hover.body, Some(3));

        hover.update(Vec2::new(7.0, 8.0), None);
        assert_eq!(hover.body, None);
        assert_eq!(hover.pointer, Vec2::new(7.0, 8.0));
    }
}

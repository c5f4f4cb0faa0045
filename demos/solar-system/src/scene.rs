/// Scene construction: one orbit group + sphere mesh per body, orbit path
/// rings, the planetary ring system, and the lighting rig.

use glam::Vec3;
use orrery_engine::{
    Color, DirectionalLight, EngineContext, MeshComponent, Node, NodeId, PointLight, Transform,
};

use crate::bodies::CelestialBody;

// ── Lighting rig ─────────────────────────────────────────────────────

const AMBIENT: (f32, f32, f32) = (0.27, 0.27, 0.27);
const SUN_LIGHT_INTENSITY: f32 = 50.0;
const SUN_LIGHT_RANGE: f32 = 500.0;
const FILL_LIGHT_INTENSITY: f32 = 5.0;

// ── Materials ────────────────────────────────────────────────────────

/// Self-luminance of the sun's surface (renders unlit).
const SUN_EMISSIVE: f32 = 1.0;
/// Specular exponent for lit planet surfaces.
const PLANET_SHININESS: f32 = 8.0;

// ── Orbit path rings ─────────────────────────────────────────────────

const ORBIT_PATH_HALF_WIDTH: f32 = 0.05;
const ORBIT_PATH_COLOR: (f32, f32, f32) = (0.27, 0.27, 0.27);

/// Node ids for one body: the orbit group and the sphere mesh nested in it.
/// Rotating the group sweeps the orbit; rotating the mesh spins the body.
#[derive(Debug, Clone, Copy)]
pub struct BodyNodes {
    pub group: NodeId,
    pub mesh: NodeId,
}

/// Build the whole scene from the registry. Returns the per-body node ids in
/// registry order for the animation driver.
pub fn build_scene(ctx: &mut EngineContext, registry: &[CelestialBody]) -> Vec<BodyNodes> {
    add_lights(ctx);
    registry
        .iter()
        .enumerate()
        .map(|(index, body)| build_body(ctx, index, body))
        .collect()
}

fn add_lights(ctx: &mut EngineContext) {
    ctx.lights.set_ambient(AMBIENT.0, AMBIENT.1, AMBIENT.2);
    ctx.lights.add_point(PointLight::new(
        Vec3::ZERO,
        [1.0, 1.0, 1.0],
        SUN_LIGHT_INTENSITY,
        SUN_LIGHT_RANGE,
    ));
    ctx.lights.add_directional(DirectionalLight::new(
        Vec3::Z,
        [1.0, 1.0, 1.0],
        FILL_LIGHT_INTENSITY,
    ));
}

fn build_body(ctx: &mut EngineContext, index: usize, body: &CelestialBody) -> BodyNodes {
    let texture = ctx.textures.slot_for(body.texture);
    let tint = Color::new(body.color.0, body.color.1, body.color.2);

    let surface = MeshComponent::sphere(body.radius, tint).with_texture(texture);
    let surface = if body.orbit_radius == 0.0 {
        surface.with_emissive(SUN_EMISSIVE)
    } else {
        surface.with_shininess(PLANET_SHININESS)
    };

    let group_id = ctx.next_id();
    let group = ctx.scene.spawn(Node::new(group_id));

    let mesh_id = ctx.next_id();
    let mesh = ctx.scene.spawn_child(
        Node::new(mesh_id)
            .with_tag(body.name)
            .with_local(Transform::new().with_translation(Vec3::new(body.orbit_radius, 0.0, 0.0)))
            .with_mesh(surface)
            .with_body(index),
        group,
    );

    if body.orbit_radius > 0.0 {
        add_orbit_path(ctx, group, body.orbit_radius);
    }
    if let Some(ring) = &body.ring {
        // Attached to the mesh, not the group: the ring system spins with
        // the planet instead of sweeping around the sun.
        let ring_texture = ctx.textures.slot_for(ring.texture);
        let ring_id = ctx.next_id();
        ctx.scene.spawn_child(
            Node::new(ring_id)
                .with_tag("ring")
                .with_local(Transform::new().with_rotation(Vec3::new(ring.tilt, 0.0, 0.0)))
                .with_mesh(
                    MeshComponent::ring(
                        body.radius * ring.inner_factor,
                        body.radius * ring.outer_factor,
                        tint,
                    )
                    .with_texture(ring_texture)
                    .with_opacity(ring.opacity),
                ),
            mesh,
        );
    }

    BodyNodes { group, mesh }
}

/// Thin flat ring at the orbit radius, laid into the orbital plane.
fn add_orbit_path(ctx: &mut EngineContext, group: NodeId, orbit_radius: f32) {
    let id = ctx.next_id();
    ctx.scene.spawn_child(
        Node::new(id)
            .with_tag("orbit-path")
            .with_local(
                Transform::new().with_rotation(Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0)),
            )
            .with_mesh(MeshComponent::ring(
                orbit_radius - ORBIT_PATH_HALF_WIDTH,
                orbit_radius + ORBIT_PATH_HALF_WIDTH,
                Color::new(ORBIT_PATH_COLOR.0, ORBIT_PATH_COLOR.1, ORBIT_PATH_COLOR.2),
            )),
        group,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{registry, BODY_COUNT, SUN};
    use orrery_engine::Shape;

    fn built() -> (EngineContext, Vec<BodyNodes>) {
        let mut ctx = EngineContext::new();
        let nodes = build_scene(&mut ctx, &registry());
        ctx.scene.propagate();
        (ctx, nodes)
    }

    #[test]
    fn every_body_gets_a_pickable_mesh() {
        let (ctx, _) = built();
        let pickable = ctx.scene.iter().filter(|n| n.body.is_some()).count();
        assert_eq!(pickable, BODY_COUNT);
    }

    #[test]
    fn exactly_one_ring_system_under_saturn() {
        let (ctx, _) = built();
        let rings: Vec<_> = ctx
            .scene
            .iter()
            .filter(|n| {
                matches!(n.mesh.as_ref().map(|m| m.shape), Some(Shape::Ring { .. }))
                    && n.parent()
                        .and_then(|p| ctx.scene.get(p))
                        .map_or(false, |p| p.body.is_some())
            })
            .collect();
        assert_eq!(rings.len(), 1);

        let parent = ctx.scene.get(rings[0].parent().unwrap()).unwrap();
        assert_eq!(parent.tag, "Saturn");
        // The ring inherits the planet's spin, so its own yaw stays zero.
        assert_eq!(rings[0].local.rotation.y, 0.0);
        assert!(rings[0].local.rotation.x > 0.0);
    }

    #[test]
    fn orbiting_bodies_get_orbit_paths() {
        let (ctx, _) = built();
        let paths = ctx.scene.iter().filter(|n| n.tag == "orbit-path").count();
        assert_eq!(paths, BODY_COUNT - 1);
    }

    #[test]
    fn sun_is_emissive_and_planets_are_lit() {
        let (ctx, nodes) = built();
        let sun = ctx.scene.get(nodes[SUN].mesh).unwrap();
        assert!(sun.mesh.as_ref().unwrap().emissive > 0.0);

        for body in nodes.iter().skip(1) {
            let mesh = ctx.scene.get(body.mesh).unwrap().mesh.as_ref().unwrap();
            assert_eq!(mesh.emissive, 0.0);
        }
    }

    #[test]
    fn meshes_are_offset_by_their_orbit_radius() {
        let (ctx, nodes) = built();
        for (body, ids) in registry().iter().zip(&nodes) {
            let mesh = ctx.scene.get(ids.mesh).unwrap();
            assert_eq!(mesh.local.translation.x, body.orbit_radius);
            assert_eq!(mesh.parent(), Some(ids.group));
        }
    }

    #[test]
    fn every_texture_gets_a_slot() {
        let (ctx, _) = built();
        // Nine surface textures plus the ring overlay.
        assert_eq!(ctx.textures.len(), BODY_COUNT + 1);
    }

    #[test]
    fn lighting_rig_is_installed() {
        let (ctx, _) = built();
        assert_eq!(ctx.lights.point_count(), 1);
        assert_eq!(ctx.lights.directional_count(), 1);
        assert_eq!(ctx.lights.ambient(), [0.27, 0.27, 0.27]);
    }
}

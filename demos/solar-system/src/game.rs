/// Solar System: animated, interactive 3D orrery.
///
/// The per-step driver advances every body's spin, and every orbiting body's
/// orbit group, by its hand-tuned speed times the shared multiplier. Paused
/// steps touch nothing; the camera rig and renderer keep running either way.

use orrery_engine::{App, AppConfig, EngineContext};

use crate::bodies::{self, CelestialBody, BODY_COUNT};
use crate::scene::{self, BodyNodes};

/// Starfield backdrop parameters.
const STAR_COUNT: usize = 50_000;
const STAR_EXTENT: f32 = 2000.0;

pub struct SolarSystem {
    registry: [CelestialBody; BODY_COUNT],
    nodes: Vec<BodyNodes>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            registry: bodies::registry(),
            nodes: Vec::new(),
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SolarSystem {
    fn config(&self) -> AppConfig {
        AppConfig {
            star_count: STAR_COUNT,
            star_extent: STAR_EXTENT,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.nodes = scene::build_scene(ctx, &self.registry);
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        if !ctx.animation.running {
            return;
        }
        let multiplier = ctx.animation.speed_multiplier;

        for (body, ids) in self.registry.iter().zip(&self.nodes) {
            if let Some(mesh) = ctx.scene.get_mut(ids.mesh) {
                mesh.local.rotation.y += body.rotation_speed * multiplier;
            }
            if body.orbit_speed > 0.0 {
                if let Some(group) = ctx.scene.get_mut(ids.group) {
                    group.local.rotation.y += body.orbit_speed * multiplier;
                }
            }
        }
    }
}

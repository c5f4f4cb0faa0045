use crate::api::types::NodeId;
use crate::assets::textures::TextureRegistry;
use crate::core::animation::AnimationState;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::controls::OrbitController;
use crate::systems::lighting::LightState;
use crate::systems::starfield::Starfield;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Number of backdrop stars (default: 50 000).
    pub star_count: usize,
    /// Side of the cube the stars are hashed into.
    pub star_extent: f32,
    /// Render-surface size before the first resize event.
    pub surface_width: f32,
    pub surface_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_instances: 64,
            star_count: 50_000,
            star_extent: 2000.0,
            surface_width: 1280.0,
            surface_height: 720.0,
        }
    }
}

/// The contract a visualization fulfills.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the scene: spawn nodes, register textures, add lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One animation step, invoked per display refresh before the frame's
    /// render buffers are rebuilt. Honors `ctx.animation`.
    fn update(&mut self, ctx: &mut EngineContext);
}

/// Mutable engine state, passed to `App::init` and `App::update`.
pub struct EngineContext {
    pub scene: SceneGraph,
    pub camera: PerspectiveCamera,
    pub controls: OrbitController,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub starfield: Starfield,
    pub animation: AnimationState,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        let camera = PerspectiveCamera::new(16.0 / 9.0);
        let controls = OrbitController::from_camera(&camera);
        Self {
            scene: SceneGraph::new(),
            camera,
            controls,
            lights: LightState::new(),
            textures: TextureRegistry::new(),
            starfield: Starfield::empty(),
            animation: AnimationState::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b, NodeId(2));
    }

    #[test]
    fn context_starts_with_default_view() {
        let ctx = EngineContext::new();
        assert_eq!(ctx.camera.eye, Vec3::new(0.0, 0.0, 100.0));
        assert!(ctx.animation.running);
        assert!(ctx.scene.is_empty());
    }
}

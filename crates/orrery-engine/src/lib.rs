pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod picking;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext};
pub use api::types::{BodyId, NodeId};
pub use assets::manifest::TextureManifest;
pub use assets::textures::{TextureId, TextureRegistry, TextureState};
pub use components::mesh::{Color, MeshComponent, Shape};
pub use crate::core::animation::AnimationState;
pub use crate::core::scene::{Node, SceneGraph, Transform};
pub use input::queue::{InputEvent, InputQueue, KEY_SPACE};
pub use picking::{pick, screen_to_ndc, HoverState, PickHit, Ray};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::controls::OrbitController;
pub use renderer::instance::{build_render_buffer, RenderBuffer, RenderInstance};
pub use systems::lighting::{DirectionalLight, LightState, PointLight};
pub use systems::starfield::Starfield;

use glam::Vec2;
use orrery_engine::{
    build_render_buffer, pick, screen_to_ndc, App, CameraUniform, EngineContext, HoverState,
    InputEvent, InputQueue, RenderBuffer, Starfield, TextureId, TextureManifest, KEY_SPACE,
};

/// Multiplicative dolly per wheel tick.
const DOLLY_STEP: f32 = 1.05;
/// Seed for the backdrop starfield.
const STAR_SEED: u32 = 42;

/// Generic app runner that wires up the frame loop.
///
/// Each concrete visualization creates a `thread_local!` AppRunner and exports
/// free functions via `#[wasm_bindgen]` (see `export_app!`), because
/// wasm-bindgen cannot export generic structs directly.
///
/// Pointer-move picking and viewport resizes are handled synchronously inside
/// their exports; drag/wheel/key events queue up and are consumed at the next
/// `tick`. Every tick the runner steps the app, damps the camera, propagates
/// the scene and rebuilds the render buffers, in that order, so a frame
/// never sees a half-updated hierarchy.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera_uniform: CameraUniform,
    hover: HoverState,
    surface_width: f32,
    surface_height: f32,
    dragging: bool,
    last_pointer: Vec2,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let ctx = EngineContext::new();
        let camera_uniform = ctx.camera.uniform();
        Self {
            app,
            ctx,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            camera_uniform,
            hover: HoverState::default(),
            surface_width: config.surface_width,
            surface_height: config.surface_height,
            dragging: false,
            last_pointer: Vec2::ZERO,
            initialized: false,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        let config = self.app.config();
        self.ctx.camera.resize(config.surface_width, config.surface_height);
        self.ctx.starfield = Starfield::generate(config.star_count, config.star_extent, STAR_SEED);
        self.app.init(&mut self.ctx);
        self.ctx.scene.propagate();
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Run one frame: consume queued input, step the app, damp the camera,
    /// propagate transforms, rebuild the render buffers.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        for event in self.input.drain() {
            self.handle_event(event);
        }

        self.app.update(&mut self.ctx);

        // Camera damping runs paused or not.
        let ctx = &mut self.ctx;
        ctx.controls.update(&mut ctx.camera);

        self.ctx.scene.propagate();
        build_render_buffer(&self.ctx.scene, &self.ctx.textures, &mut self.render_buffer);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.last_pointer = Vec2::new(x, y);
            }
            InputEvent::PointerUp { .. } => {
                self.dragging = false;
            }
            InputEvent::PointerMove { x, y } => {
                if self.dragging {
                    let height = self.surface_height.max(1.0);
                    let dx = x - self.last_pointer.x;
                    let dy = y - self.last_pointer.y;
                    self.ctx.controls.rotate(
                        std::f32::consts::TAU * dx / height,
                        std::f32::consts::TAU * dy / height,
                    );
                }
                self.last_pointer = Vec2::new(x, y);
            }
            InputEvent::Wheel { delta } => {
                let step = if delta > 0.0 { DOLLY_STEP } else { 1.0 / DOLLY_STEP };
                self.ctx.controls.dolly(step);
            }
            InputEvent::KeyDown { key_code } => {
                if key_code == KEY_SPACE {
                    let ctx = &mut self.ctx;
                    ctx.controls.reset(&mut ctx.camera);
                }
            }
        }
    }

    // ---- Event entry points (called from the exports) ----

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.input.push(InputEvent::PointerDown { x, y });
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.input.push(InputEvent::PointerUp { x, y });
    }

    /// Pointer moved: queue the event for camera dragging and resolve the
    /// hover synchronously. Returns the hovered body's display name for the
    /// tooltip, or `None` to clear it.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<String> {
        self.input.push(InputEvent::PointerMove { x, y });

        let ndc = screen_to_ndc(x, y, self.surface_width, self.surface_height);
        let hit = pick(&self.ctx.scene, &self.ctx.camera, ndc);
        self.hover.update(Vec2::new(x, y), hit.as_ref());
        hit.and_then(|h| self.ctx.scene.get(h.node))
            .map(|node| node.tag.clone())
    }

    pub fn wheel(&mut self, delta: f32) {
        self.input.push(InputEvent::Wheel { delta });
    }

    pub fn key_down(&mut self, key_code: u32) {
        self.input.push(InputEvent::KeyDown { key_code });
    }

    /// Viewport resized: handled synchronously. The camera keeps its field of
    /// view and adopts the new aspect ratio; the surface adopts the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface_width = width;
        self.surface_height = height;
        self.ctx.camera.resize(width, height);
    }

    // ---- Control panel entry points ----

    pub fn set_speed(&mut self, multiplier: f32) {
        self.ctx.animation.set_speed(multiplier);
    }

    pub fn readout(&self) -> String {
        self.ctx.animation.readout()
    }

    /// Flip pause/resume; returns the new button label.
    pub fn toggle_animation(&mut self) -> &'static str {
        self.ctx.animation.toggle()
    }

    // ---- Texture pipeline ----

    /// Apply a texture manifest JSON. A malformed manifest is logged and
    /// skipped; the scene keeps rendering untextured.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => self.ctx.textures.apply_manifest(&manifest),
            Err(err) => log::warn!("texture manifest rejected: {err}"),
        }
    }

    pub fn texture_loaded(&mut self, slot: u32) {
        self.ctx.textures.mark_ready(TextureId(slot));
    }

    pub fn texture_failed(&mut self, slot: u32) {
        self.ctx.textures.mark_failed(TextureId(slot));
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn opaque_split(&self) -> u32 {
        self.render_buffer.opaque_split
    }

    pub fn star_positions_ptr(&self) -> *const f32 {
        self.ctx.starfield.positions_ptr()
    }

    pub fn star_vertex_count(&self) -> u32 {
        self.ctx.starfield.vertex_count() as u32
    }

    pub fn point_lights_ptr(&self) -> *const f32 {
        self.ctx.lights.points_ptr()
    }

    pub fn point_light_count(&self) -> u32 {
        self.ctx.lights.point_count() as u32
    }

    pub fn directional_lights_ptr(&self) -> *const f32 {
        self.ctx.lights.directionals_ptr()
    }

    pub fn directional_light_count(&self) -> u32 {
        self.ctx.lights.directional_count() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    pub fn camera_uniform_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn surface_width(&self) -> f32 {
        self.surface_width
    }

    pub fn surface_height(&self) -> f32 {
        self.surface_height
    }

    // ---- Texture source accessors (host image loader) ----

    pub fn texture_source_count(&self) -> u32 {
        self.ctx.textures.sources().len() as u32
    }

    pub fn texture_source_slot(&self, index: u32) -> u32 {
        self.ctx
            .textures
            .sources()
            .get(index as usize)
            .map(|(slot, _)| *slot)
            .unwrap_or(u32::MAX)
    }

    pub fn texture_source_path(&self, index: u32) -> String {
        self.ctx
            .textures
            .sources()
            .get(index as usize)
            .map(|(_, path)| path.clone())
            .unwrap_or_default()
    }

    // ---- Test access ----

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }
}

pub mod dom;
pub mod runner;

pub use runner::AppRunner;

/// Generate all `#[wasm_bindgen]` exports for a visualization.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - a `with_runner()` helper
/// - `app_init()`, which installs logging, builds the runner and wires the
///   DOM (speed panel, toggle button, tooltip, window listeners)
/// - the frame tick, input, texture and buffer-accessor exports
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::SolarSystem;
///
/// orrery_web::export_app!(SolarSystem, "solar-system");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `orrery_engine::App`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn app_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());

            $crate::dom::install_ui($crate::dom::UiHandlers {
                on_speed_change: Box::new(|value| {
                    with_runner(|r| {
                        r.set_speed(value);
                        r.readout()
                    })
                }),
                on_toggle: Box::new(|| with_runner(|r| r.toggle_animation())),
                on_pointer_move: Box::new(|x, y| with_runner(|r| r.pointer_move(x, y))),
                on_pointer_down: Box::new(|x, y| with_runner(|r| r.pointer_down(x, y))),
                on_pointer_up: Box::new(|x, y| with_runner(|r| r.pointer_up(x, y))),
                on_wheel: Box::new(|delta| with_runner(|r| r.wheel(delta))),
                on_key_down: Box::new(|code| with_runner(|r| r.key_down(code))),
                on_resize: Box::new(|w, h| with_runner(|r| r.resize(w, h))),
            });

            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn app_tick() {
            with_runner(|r| r.tick());
        }

        // ---- Input entry points (for hosts that drive events themselves) ----

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.pointer_down(x, y));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.pointer_up(x, y));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) -> Option<String> {
            with_runner(|r| r.pointer_move(x, y))
        }

        #[wasm_bindgen]
        pub fn app_wheel(delta: f32) {
            with_runner(|r| r.wheel(delta));
        }

        #[wasm_bindgen]
        pub fn app_key_down(key_code: u32) {
            with_runner(|r| r.key_down(key_code));
        }

        #[wasm_bindgen]
        pub fn app_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        // ---- Control panel ----

        #[wasm_bindgen]
        pub fn app_set_speed(multiplier: f32) -> String {
            with_runner(|r| {
                r.set_speed(multiplier);
                r.readout()
            })
        }

        #[wasm_bindgen]
        pub fn app_toggle_animation() -> String {
            with_runner(|r| r.toggle_animation().to_string())
        }

        // ---- Texture pipeline ----

        #[wasm_bindgen]
        pub fn app_load_textures(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn app_texture_loaded(slot: u32) {
            with_runner(|r| r.texture_loaded(slot));
        }

        #[wasm_bindgen]
        pub fn app_texture_failed(slot: u32) {
            with_runner(|r| r.texture_failed(slot));
        }

        #[wasm_bindgen]
        pub fn get_texture_source_count() -> u32 {
            with_runner(|r| r.texture_source_count())
        }

        #[wasm_bindgen]
        pub fn get_texture_source_slot(index: u32) -> u32 {
            with_runner(|r| r.texture_source_slot(index))
        }

        #[wasm_bindgen]
        pub fn get_texture_source_path(index: u32) -> String {
            with_runner(|r| r.texture_source_path(index))
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_opaque_split() -> u32 {
            with_runner(|r| r.opaque_split())
        }

        #[wasm_bindgen]
        pub fn get_star_positions_ptr() -> *const f32 {
            with_runner(|r| r.star_positions_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_vertex_count() -> u32 {
            with_runner(|r| r.star_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_point_lights_ptr() -> *const f32 {
            with_runner(|r| r.point_lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_point_light_count() -> u32 {
            with_runner(|r| r.point_light_count())
        }

        #[wasm_bindgen]
        pub fn get_directional_lights_ptr() -> *const f32 {
            with_runner(|r| r.directional_lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_directional_light_count() -> u32 {
            with_runner(|r| r.directional_light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient()[0])
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient()[1])
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient()[2])
        }

        #[wasm_bindgen]
        pub fn get_camera_uniform_ptr() -> *const f32 {
            with_runner(|r| r.camera_uniform_ptr())
        }

        #[wasm_bindgen]
        pub fn get_surface_width() -> f32 {
            with_runner(|r| r.surface_width())
        }

        #[wasm_bindgen]
        pub fn get_surface_height() -> f32 {
            with_runner(|r| r.surface_height())
        }
    };
}

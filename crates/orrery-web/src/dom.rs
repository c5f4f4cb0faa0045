//! Browser UI layer: the speed-control panel the core owns, plus the
//! pre-existing toggle button, tooltip and canvas it consumes.
//!
//! Event listeners are attached once at startup and live for the process
//! lifetime (`Closure::forget`), matching the host page's lifecycle.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent,
    WheelEvent, Window,
};

use orrery_engine::core::animation::{SPEED_DEFAULT, SPEED_MAX, SPEED_MIN, SPEED_STEP};

/// Canvas the host page provides as the render surface.
pub const CANVAS_ID: &str = "solar-system";
/// Pre-existing pause/resume button.
pub const TOGGLE_BUTTON_ID: &str = "toggle-animation";
/// Pre-existing tooltip element.
pub const TOOLTIP_ID: &str = "planet-tooltip";

/// Pixels between the pointer and the tooltip's top-left corner.
const TOOLTIP_OFFSET_PX: f32 = 10.0;

/// Callbacks from the DOM into the runner. Each returns whatever the DOM
/// needs to reflect back (readout text, button label, hovered body name).
pub struct UiHandlers {
    pub on_speed_change: Box<dyn FnMut(f32) -> String>,
    pub on_toggle: Box<dyn FnMut() -> &'static str>,
    pub on_pointer_move: Box<dyn FnMut(f32, f32) -> Option<String>>,
    pub on_pointer_down: Box<dyn FnMut(f32, f32)>,
    pub on_pointer_up: Box<dyn FnMut(f32, f32)>,
    pub on_wheel: Box<dyn FnMut(f32)>,
    pub on_key_down: Box<dyn FnMut(u32)>,
    pub on_resize: Box<dyn FnMut(f32, f32)>,
}

/// Build the control panel, wire the toggle button, find the tooltip and
/// canvas, size everything to the current viewport and attach the window
/// event listeners.
pub fn install_ui(handlers: UiHandlers) {
    let UiHandlers {
        on_speed_change,
        on_toggle,
        on_pointer_move,
        on_pointer_down,
        on_pointer_up,
        on_wheel,
        on_key_down,
        mut on_resize,
    } = handlers;

    let Some(window) = web_sys::window() else {
        log::warn!("no window object; UI not installed");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; UI not installed");
        return;
    };

    create_speed_panel(&document, on_speed_change);
    wire_toggle_button(&document, on_toggle);

    let tooltip = Tooltip::find(&document);
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

    // Initial sizing, then reactively on every resize event.
    let (width, height) = viewport_size(&window);
    size_canvas(canvas.as_ref(), width, height);
    on_resize(width, height);

    attach_window_events(
        &window,
        tooltip,
        canvas,
        on_pointer_move,
        on_pointer_down,
        on_pointer_up,
        on_wheel,
        on_key_down,
        on_resize,
    );
}

/// The hover tooltip: visibility, text and position written synchronously
/// from the pointer-move handler.
pub struct Tooltip {
    el: Option<HtmlElement>,
}

impl Tooltip {
    pub fn find(document: &Document) -> Self {
        let el = document
            .get_element_by_id(TOOLTIP_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if el.is_none() {
            log::warn!("tooltip element #{TOOLTIP_ID} not found; hover names disabled");
        }
        Self { el }
    }

    pub fn show(&self, text: &str, x: f32, y: f32) {
        if let Some(el) = &self.el {
            el.set_text_content(Some(text));
            let style = el.style();
            let _ = style.set_property("display", "block");
            let _ = style.set_property("left", &format!("{}px", x + TOOLTIP_OFFSET_PX));
            let _ = style.set_property("top", &format!("{}px", y + TOOLTIP_OFFSET_PX));
        }
    }

    pub fn hide(&self) {
        if let Some(el) = &self.el {
            let _ = el.style().set_property("display", "none");
        }
    }
}

fn viewport_size(window: &Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0) as f32;
    (width, height)
}

fn size_canvas(canvas: Option<&HtmlCanvasElement>, width: f32, height: f32) {
    if let Some(canvas) = canvas {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

fn create_div(document: &Document) -> Option<HtmlElement> {
    document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Build the speed-control panel and append it to the document body.
fn create_speed_panel(document: &Document, mut on_change: Box<dyn FnMut(f32) -> String>) {
    let (Some(panel), Some(label), Some(readout)) = (
        create_div(document),
        create_div(document),
        create_div(document),
    ) else {
        log::warn!("could not create speed panel elements");
        return;
    };
    let Some(slider) = document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("could not create speed slider");
        return;
    };

    set_styles(
        &panel,
        &[
            ("position", "fixed"),
            ("bottom", "20px"),
            ("left", "20px"),
            ("background-color", "rgba(0, 0, 0, 0.7)"),
            ("padding", "15px"),
            ("border-radius", "8px"),
            ("color", "white"),
            ("font-family", "Arial, sans-serif"),
            ("z-index", "1000"),
        ],
    );

    label.set_text_content(Some("Animation Speed"));
    set_styles(&label, &[("margin-bottom", "10px")]);

    let _ = slider.set_attribute("type", "range");
    let _ = slider.set_attribute("min", &SPEED_MIN.to_string());
    let _ = slider.set_attribute("max", &SPEED_MAX.to_string());
    let _ = slider.set_attribute("step", &SPEED_STEP.to_string());
    let _ = slider.set_attribute("value", &SPEED_DEFAULT.to_string());
    set_styles(&slider, &[("width", "200px")]);

    readout.set_text_content(Some(&format!("{SPEED_DEFAULT:.1}x")));
    set_styles(&readout, &[("margin-top", "5px"), ("text-align", "center")]);

    let readout_sink = readout.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let value = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.value().parse::<f32>().ok());
        if let Some(value) = value {
            let text = on_change(value);
            readout_sink.set_text_content(Some(&text));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();

    let _ = panel.append_child(&label);
    let _ = panel.append_child(&slider);
    let _ = panel.append_child(&readout);
    if let Some(body) = document.body() {
        let _ = body.append_child(&panel);
    }
}

/// Wire the pre-existing pause/resume button; its label always reflects the
/// state after the click.
fn wire_toggle_button(document: &Document, mut on_click: Box<dyn FnMut() -> &'static str>) {
    let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) else {
        log::warn!("toggle button #{TOGGLE_BUTTON_ID} not found; pause control disabled");
        return;
    };

    let sink = button.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let label = on_click();
        sink.set_text_content(Some(label));
    }) as Box<dyn FnMut(_)>);
    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[allow(clippy::too_many_arguments)]
fn attach_window_events(
    window: &Window,
    tooltip: Tooltip,
    canvas: Option<HtmlCanvasElement>,
    mut on_pointer_move: Box<dyn FnMut(f32, f32) -> Option<String>>,
    mut on_pointer_down: Box<dyn FnMut(f32, f32)>,
    mut on_pointer_up: Box<dyn FnMut(f32, f32)>,
    mut on_wheel: Box<dyn FnMut(f32)>,
    mut on_key_down: Box<dyn FnMut(u32)>,
    mut on_resize: Box<dyn FnMut(f32, f32)>,
) {
    let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
        let (x, y) = (event.client_x() as f32, event.client_y() as f32);
        match on_pointer_move(x, y) {
            Some(name) => tooltip.show(&name, x, y),
            None => tooltip.hide(),
        }
    }) as Box<dyn FnMut(_)>);
    let _ =
        window.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
    mousemove.forget();

    let mousedown = Closure::wrap(Box::new(move |event: MouseEvent| {
        on_pointer_down(event.client_x() as f32, event.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ =
        window.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());
    mousedown.forget();

    let mouseup = Closure::wrap(Box::new(move |event: MouseEvent| {
        on_pointer_up(event.client_x() as f32, event.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());
    mouseup.forget();

    let wheel = Closure::wrap(Box::new(move |event: WheelEvent| {
        on_wheel(event.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
    wheel.forget();

    let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        on_key_down(event.key_code());
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let resize_window = window.clone();
    let resize = Closure::wrap(Box::new(move |_: Event| {
        let (width, height) = viewport_size(&resize_window);
        size_canvas(canvas.as_ref(), width, height);
        on_resize(width, height);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
    resize.forget();
}

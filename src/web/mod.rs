//! Browser entry points: the `#[wasm_bindgen(start)]` hook and the handles
//! JavaScript uses to mount a shader canvas or a scroll-jack controller.

use crate::canvas::ShaderCanvas;
use crate::config::{CanvasConfig, ScrollJackConfig, ShaderSources};
use crate::scroll_jack::ScrollJack;
use crate::uniforms::UniformValue;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod gl;

use dom::{EventListener, WindowScroll};
use events::WebScrollJack;
use frame::AnimationLoop;
use gl::WebGl;

pub(crate) type WebCanvas = ShaderCanvas<WebGl, web::HtmlCanvasElement>;

// Canvas auto-mounted at start-up when the page provides one
const AUTO_CANVAS_ID: &str = "shader-canvas";

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<ShaderCanvasHandle>> = const { RefCell::new(None) };
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shader-canvas starting");

    let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(AUTO_CANVAS_ID)) else {
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("#shader-canvas is not a canvas"))?;
    let handle = mount_canvas(canvas, ShaderSources::bundled(), CanvasConfig::default()).map_err(js_err)?;
    handle.ready();
    AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}

fn mount_canvas(
    element: web::HtmlCanvasElement,
    sources: ShaderSources,
    config: CanvasConfig,
) -> anyhow::Result<ShaderCanvasHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctx: web::WebGlRenderingContext = element
        .get_context("webgl")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("WebGL not supported"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("context is not a WebGlRenderingContext"))?;

    let mut shader_canvas = ShaderCanvas::new(config, std::iter::empty());
    // A failed build leaves an inert canvas; the error is already logged.
    _ = shader_canvas.mount(WebGl::new(ctx), element.clone(), &sources);
    let canvas = Rc::new(RefCell::new(shader_canvas));

    let listeners = events::wire_canvas_events(&window, &element, &canvas)?;
    let frame_loop = {
        let canvas = canvas.clone();
        AnimationLoop::start(move |ts| {
            canvas.borrow_mut().frame(ts);
            true
        })
    };

    Ok(ShaderCanvasHandle {
        canvas,
        listeners,
        frame_loop: Some(frame_loop),
    })
}

/// A mounted shader canvas. Call `ready()` once the element has layout.
#[wasm_bindgen]
pub struct ShaderCanvasHandle {
    canvas: Rc<RefCell<WebCanvas>>,
    listeners: Vec<EventListener>,
    frame_loop: Option<AnimationLoop>,
}

#[wasm_bindgen]
impl ShaderCanvasHandle {
    /// Mount on `canvas`. Missing sources fall back to the bundled shaders.
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        vertex: Option<String>,
        fragment: Option<String>,
        use_device_pixel_ratio: bool,
    ) -> Result<ShaderCanvasHandle, JsValue> {
        let bundled = ShaderSources::bundled();
        let sources = ShaderSources::new(
            vertex.unwrap_or(bundled.vertex),
            fragment.unwrap_or(bundled.fragment),
        );
        let config = CanvasConfig {
            use_device_pixel_ratio,
            ..CanvasConfig::default()
        };
        mount_canvas(canvas, sources, config).map_err(js_err)
    }

    pub fn ready(&self) {
        self.canvas.borrow_mut().ready();
    }

    #[wasm_bindgen(js_name = setUniformF32)]
    pub fn set_uniform_f32(&self, name: &str, value: f32) -> Result<(), JsValue> {
        self.canvas
            .borrow_mut()
            .set_uniform(name, UniformValue::Float(value))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setUniformVec2)]
    pub fn set_uniform_vec2(&self, name: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.canvas
            .borrow_mut()
            .set_uniform(name, UniformValue::Vec2(Vec2::new(x, y)))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn destroy(&mut self) {
        self.release();
    }
}

impl ShaderCanvasHandle {
    fn release(&mut self) {
        self.frame_loop.take();
        self.listeners.clear();
        // A handle dropped from inside a frame callback skips GL teardown;
        // the context goes away with the canvas.
        let Ok(mut canvas) = self.canvas.try_borrow_mut() else {
            return;
        };
        if canvas.teardown() {
            log::info!("shader canvas destroyed");
        }
    }
}

impl Drop for ShaderCanvasHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Scroll-jacking over `num_items` full-viewport sections.
#[wasm_bindgen]
pub struct ScrollJackHandle {
    jack: Rc<RefCell<WebScrollJack>>,
    snap_loop: Rc<RefCell<Option<AnimationLoop>>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ScrollJackHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(
        num_items: usize,
        active_index: usize,
        on_scroll: js_sys::Function,
        on_index_change: js_sys::Function,
    ) -> Result<ScrollJackHandle, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let config = ScrollJackConfig::default();
        let throttle = config.throttle;
        let jack = ScrollJack::with_config(
            config,
            num_items,
            active_index,
            move || {
                if let Err(e) = on_scroll.call0(&JsValue::NULL) {
                    log::warn!("onScroll threw: {:?}", e);
                }
            },
            move |index| {
                if let Err(e) = on_index_change.call1(&JsValue::NULL, &JsValue::from(index as u32)) {
                    log::warn!("onIndexChange threw: {:?}", e);
                }
            },
            WindowScroll::new(window.clone()),
        );
        let jack = Rc::new(RefCell::new(jack));
        let snap_loop = Rc::new(RefCell::new(None));
        let listeners = events::wire_scroll_events(&window, &jack, &snap_loop, throttle).map_err(js_err)?;
        Ok(ScrollJackHandle {
            jack,
            snap_loop,
            listeners,
        })
    }

    /// Index changed by navigation (menu, router, ...).
    #[wasm_bindgen(js_name = setActiveIndex)]
    pub fn set_active_index(&self, index: usize) {
        let applied = match self.jack.try_borrow_mut() {
            Ok(mut j) => j.set_active_index(index),
            Err(_) => {
                log::debug!("[scroll] setActiveIndex({}) during callback ignored", index);
                false
            }
        };
        if applied {
            events::ensure_snap_loop(&self.jack, &self.snap_loop);
        }
    }

    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.jack.borrow().current_index()
    }

    pub fn destroy(&mut self) {
        self.release();
    }
}

impl ScrollJackHandle {
    fn release(&mut self) {
        self.listeners.clear();
        if let Ok(mut snap_loop) = self.snap_loop.try_borrow_mut() {
            snap_loop.take();
        }
        if let Ok(mut j) = self.jack.try_borrow_mut() {
            j.cancel();
        }
    }
}

impl Drop for ScrollJackHandle {
    fn drop(&mut self) {
        self.release();
    }
}

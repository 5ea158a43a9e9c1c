use crate::resize::{CanvasSurface, LayoutBounds, ViewportSize};
use crate::scroll_jack::ScrollHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

impl CanvasSurface for web::HtmlCanvasElement {
    fn layout_bounds(&self) -> LayoutBounds {
        let rect = self.get_bounding_client_rect();
        LayoutBounds {
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn device_pixel_ratio(&self) -> f64 {
        web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
    }

    fn set_backing_size(&self, size: ViewportSize) {
        self.set_width(size.width);
        self.set_height(size.height);
    }
}

/// The document scroll position of a browser window.
pub struct WindowScroll {
    window: web::Window,
}

impl WindowScroll {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl ScrollHost for WindowScroll {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// A registered DOM listener. Dropping it removes exactly the closure that
/// was added.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

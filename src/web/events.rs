use super::dom::{EventListener, WindowScroll};
use super::frame::AnimationLoop;
use super::WebCanvas;
use crate::input::css_to_canvas_px;
use crate::scroll_jack::ScrollJack;
use crate::throttle::Throttle;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebScrollJack = ScrollJack<WindowScroll>;

/// Window resize and pointer-move listeners for the shader canvas.
pub fn wire_canvas_events(
    window: &web::Window,
    element: &web::HtmlCanvasElement,
    canvas: &Rc<RefCell<WebCanvas>>,
) -> anyhow::Result<Vec<EventListener>> {
    let on_resize = {
        let canvas = canvas.clone();
        EventListener::new(window, "resize", move |_ev| {
            canvas.borrow_mut().resize();
        })?
    };

    let on_pointer = {
        let canvas = canvas.clone();
        let element = element.clone();
        EventListener::new(window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let x_css = ev.client_x() as f32 - rect.left() as f32;
            let y_css = ev.client_y() as f32 - rect.top() as f32;
            let mut c = canvas.borrow_mut();
            let px = css_to_canvas_px(x_css, y_css, rect.width() as f32, rect.height() as f32, c.size());
            c.pointer_move(px.x, px.y);
        })?
    };

    Ok(vec![on_resize, on_pointer])
}

/// Start (or restart) the per-frame snap loop if the controller is animating.
pub fn ensure_snap_loop(jack: &Rc<RefCell<WebScrollJack>>, snap_loop: &Rc<RefCell<Option<AnimationLoop>>>) {
    if !jack.borrow().is_animating() {
        return;
    }
    let jack = jack.clone();
    let next = AnimationLoop::start(move |_ts| match jack.try_borrow_mut() {
        Ok(mut j) => j.tick(),
        // Busy in a callback; try again next frame.
        Err(_) => true,
    });
    *snap_loop.borrow_mut() = Some(next);
}

/// Throttled wheel and resize listeners for the scroll-jack controller.
pub fn wire_scroll_events(
    window: &web::Window,
    jack: &Rc<RefCell<WebScrollJack>>,
    snap_loop: &Rc<RefCell<Option<AnimationLoop>>>,
    throttle: Duration,
) -> anyhow::Result<Vec<EventListener>> {
    let on_wheel = {
        let jack = jack.clone();
        let snap_loop = snap_loop.clone();
        let mut gate = Throttle::new(throttle);
        EventListener::new(window, "wheel", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            if !gate.ready() {
                return;
            }
            let started = match jack.try_borrow_mut() {
                Ok(mut j) => j.on_wheel(ev.delta_y()),
                Err(_) => false,
            };
            if started {
                ensure_snap_loop(&jack, &snap_loop);
            }
        })?
    };

    let on_resize = {
        let jack = jack.clone();
        let mut gate = Throttle::new(throttle);
        EventListener::new(window, "resize", move |_ev| {
            if !gate.ready() {
                return;
            }
            if let Ok(mut j) = jack.try_borrow_mut() {
                j.on_resize();
            }
        })?
    };

    Ok(vec![on_wheel, on_resize])
}

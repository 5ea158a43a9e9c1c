use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    request_id: Cell<Option<i32>>,
    running: Cell<bool>,
}

/// A `requestAnimationFrame` loop. The step closure receives the frame
/// timestamp (ms) and returns whether to keep going. Dropping the handle
/// cancels the pending request.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(LoopState {
            tick: RefCell::new(None),
            request_id: Cell::new(None),
            running: Cell::new(true),
        });
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request_id.set(None);
            if !state.running.get() {
                return;
            }
            if step(timestamp) {
                request(&state);
            } else {
                state.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>));
        request(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn cancel(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(state: &LoopState) {
    let Some(w) = web::window() else {
        state.running.set(false);
        return;
    };
    if let Some(tick) = state.tick.borrow().as_ref() {
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => state.request_id.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                state.running.set(false);
            }
        }
    }
}

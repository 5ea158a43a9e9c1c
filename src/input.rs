use crate::resize::ViewportSize;
use glam::Vec2;

/// Pointer position in canvas pixel space with the y component negated,
/// which is the convention the shaders read `uMouse` in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub moved: bool,
}

impl PointerState {
    /// Seed from a normalized default (e.g. `(0.5, 0.5)` = centre).
    pub fn from_default(size: Vec2, normalized: Vec2) -> Self {
        Self {
            position: initial_pointer(size, normalized),
            moved: false,
        }
    }

    pub fn move_to(&mut self, x_px: f32, y_px: f32) {
        self.position = pointer_from_canvas_px(x_px, y_px);
        self.moved = true;
    }
}

#[inline]
pub fn initial_pointer(size: Vec2, normalized: Vec2) -> Vec2 {
    Vec2::new(size.x * normalized.x, size.y * -normalized.y)
}

/// Canvas pixel (origin top-left) -> uniform space.
#[inline]
pub fn pointer_from_canvas_px(x_px: f32, y_px: f32) -> Vec2 {
    Vec2::new(x_px, -y_px)
}

/// Map a point relative to the element's layout box onto backing-store
/// pixels. Degenerate boxes map to the origin.
#[inline]
pub fn css_to_canvas_px(x_css: f32, y_css: f32, css_w: f32, css_h: f32, backing: ViewportSize) -> Vec2 {
    if css_w <= 0.0 || css_h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x_css / css_w) * backing.width as f32,
        (y_css / css_h) * backing.height as f32,
    )
}

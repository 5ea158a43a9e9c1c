//! Keeps the canvas backing store, the resolution uniform and the GL viewport
//! in agreement with the element's layout box.

use crate::constants::RESOLUTION_UNIFORM;
use crate::gl::GlContext;
use crate::uniforms::{UniformRegistry, UniformValue};
use glam::Vec2;

/// Layout box of the host element in CSS (logical) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBounds {
    pub width: f64,
    pub height: f64,
}

/// Backing-store size in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Outcome of one synchronization pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeUpdate {
    pub size: ViewportSize,
    pub pixel_ratio: f64,
}

/// What the synchronizer needs from the drawing surface.
pub trait CanvasSurface {
    fn layout_bounds(&self) -> LayoutBounds;
    fn device_pixel_ratio(&self) -> f64;
    fn set_backing_size(&self, size: ViewportSize);
}

/// Scale `bounds` by `pixel_ratio` and truncate to whole pixels, the way a
/// canvas `width`/`height` assignment does.
#[inline]
pub fn viewport_for(bounds: LayoutBounds, pixel_ratio: f64) -> ViewportSize {
    let w = (bounds.width * pixel_ratio).max(0.0);
    let h = (bounds.height * pixel_ratio).max(0.0);
    ViewportSize {
        width: w as u32,
        height: h as u32,
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResizeSynchronizer {
    use_device_pixel_ratio: bool,
    size: ViewportSize,
}

impl ResizeSynchronizer {
    pub fn new(use_device_pixel_ratio: bool, initial: ViewportSize) -> Self {
        Self {
            use_device_pixel_ratio,
            size: initial,
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn uses_device_pixel_ratio(&self) -> bool {
        self.use_device_pixel_ratio
    }

    /// Re-measure the surface and push the new size everywhere it is used.
    /// Returns `None` without side effects while canvas or context is missing.
    pub fn synchronize<G: GlContext, S: CanvasSurface>(
        &mut self,
        canvas: Option<&S>,
        gl: Option<&G>,
        registry: &mut UniformRegistry,
    ) -> Option<SizeUpdate> {
        let (canvas, gl) = match (canvas, gl) {
            (Some(c), Some(g)) => (c, g),
            _ => {
                log::debug!("[resize] surface not ready; skipped");
                return None;
            }
        };
        let pixel_ratio = if self.use_device_pixel_ratio {
            canvas.device_pixel_ratio()
        } else {
            1.0
        };
        let size = viewport_for(canvas.layout_bounds(), pixel_ratio);
        self.size = size;
        canvas.set_backing_size(size);
        if let Err(e) = registry.set_owned(RESOLUTION_UNIFORM, UniformValue::Vec2(size.as_vec2())) {
            log::warn!("[resize] {}", e);
        }
        gl.viewport(0, 0, size.width as i32, size.height as i32);
        Some(SizeUpdate { size, pixel_ratio })
    }
}

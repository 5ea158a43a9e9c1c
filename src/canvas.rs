//! The full-viewport shader canvas: owns the GL pipeline, the uniform
//! registry, the viewport size and the pointer, and exposes one method per
//! lifecycle event the host forwards (mount, ready, resize, pointer, frame,
//! teardown).

use crate::config::{CanvasConfig, ShaderSources};
use crate::constants::{DEFAULT_MOUSE, MOUSE_UNIFORM, RESOLUTION_UNIFORM, TIME_UNIFORM};
use crate::frame::{render_step, FrameClock};
use crate::gl::{GlContext, GlError, GlPipeline};
use crate::input::PointerState;
use crate::resize::{CanvasSurface, ResizeSynchronizer, SizeUpdate, ViewportSize};
use crate::uniforms::{UniformDescriptor, UniformError, UniformRegistry, UniformValue};
use glam::Vec2;

pub struct ShaderCanvas<G: GlContext, S: CanvasSurface> {
    config: CanvasConfig,
    gl: Option<G>,
    surface: Option<S>,
    pipeline: Option<GlPipeline<G>>,
    registry: UniformRegistry,
    resize: ResizeSynchronizer,
    pointer: PointerState,
    clock: FrameClock,
}

impl<G: GlContext, S: CanvasSurface> ShaderCanvas<G, S> {
    /// Registry = base uniforms + `uniforms`. The initial viewport size comes
    /// from the resolution default and seeds the pointer position.
    pub fn new(config: CanvasConfig, uniforms: impl IntoIterator<Item = UniformDescriptor>) -> Self {
        let registry = UniformRegistry::with_base(uniforms);
        let resolution = registry
            .get(RESOLUTION_UNIFORM)
            .and_then(|d| d.default_value.as_vec2())
            .unwrap_or(Vec2::ONE);
        let mouse_default = registry
            .get(MOUSE_UNIFORM)
            .and_then(|d| d.default_value.as_vec2())
            .unwrap_or(Vec2::from(DEFAULT_MOUSE));
        let initial = ViewportSize {
            width: resolution.x.max(0.0) as u32,
            height: resolution.y.max(0.0) as u32,
        };
        Self {
            resize: ResizeSynchronizer::new(config.use_device_pixel_ratio, initial),
            config,
            gl: None,
            surface: None,
            pipeline: None,
            registry,
            pointer: PointerState::from_default(initial.as_vec2(), mouse_default),
            clock: FrameClock::new(),
        }
    }

    /// Attach the context and surface and build the pipeline.
    ///
    /// On failure the context and surface stay attached (resizing still
    /// works) but nothing is ever drawn.
    pub fn mount(&mut self, gl: G, surface: S, sources: &ShaderSources) -> Result<(), GlError> {
        let result = GlPipeline::initialize(
            &gl,
            &sources.vertex,
            &sources.fragment,
            self.config.mesh,
            self.config.position_attribute,
            &self.registry,
        );
        self.gl = Some(gl);
        self.surface = Some(surface);
        match result {
            Ok(p) => {
                self.pipeline = Some(p);
                Ok(())
            }
            Err(e) => {
                log::error!("[canvas] initialization failed: {}", e);
                self.pipeline = None;
                Err(e)
            }
        }
    }

    /// Host signal that layout is measurable; performs the first resize.
    pub fn ready(&mut self) -> Option<SizeUpdate> {
        let update = self.resize();
        if let Some(u) = update {
            log::info!("[canvas] ready at {}x{}", u.size.width, u.size.height);
        }
        update
    }

    pub fn resize(&mut self) -> Option<SizeUpdate> {
        self.resize
            .synchronize(self.surface.as_ref(), self.gl.as_ref(), &mut self.registry)
    }

    /// Pointer position in backing-store pixels, origin top-left.
    pub fn pointer_move(&mut self, x_px: f32, y_px: f32) {
        self.pointer.move_to(x_px, y_px);
    }

    /// One display refresh. Frames arriving before initialization are dropped.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if self.pipeline.is_none() {
            return false;
        }
        let time = self.clock.advance(timestamp_ms);
        if let Err(e) = self.registry.set_owned(TIME_UNIFORM, UniformValue::Float(time)) {
            log::warn!("[canvas] {}", e);
        }
        if let Err(e) = self
            .registry
            .set_owned(MOUSE_UNIFORM, UniformValue::Vec2(self.pointer.position))
        {
            log::warn!("[canvas] {}", e);
        }
        render_step(self.gl.as_ref(), self.pipeline.as_ref(), &self.registry)
    }

    /// External uniform write; pipeline-owned uniforms are rejected.
    pub fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<(), UniformError> {
        self.registry.set(name, value)
    }

    /// Release GPU resources and detach the context and surface.
    /// Safe to call more than once; returns whether a pipeline was released.
    pub fn teardown(&mut self) -> bool {
        let released = match (self.gl.as_ref(), self.pipeline.take()) {
            (Some(gl), Some(p)) => {
                p.release(gl);
                true
            }
            _ => false,
        };
        self.gl = None;
        self.surface = None;
        released
    }

    pub fn is_initialized(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn registry(&self) -> &UniformRegistry {
        &self.registry
    }

    pub fn size(&self) -> ViewportSize {
        self.resize.size()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.position
    }

    pub fn pipeline(&self) -> Option<&GlPipeline<G>> {
        self.pipeline.as_ref()
    }

    pub fn gl(&self) -> Option<&G> {
        self.gl.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }
}

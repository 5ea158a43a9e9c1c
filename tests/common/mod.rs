// Recording fakes for the GL context, canvas surface and page scroll.
#![allow(dead_code)]

use shader_canvas::gl::{DrawMode, GlContext, ShaderStage};
use shader_canvas::resize::{CanvasSurface, LayoutBounds, ViewportSize};
use shader_canvas::scroll_jack::ScrollHost;
use std::cell::{Cell, RefCell};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CompileShader(ShaderStage),
    LinkProgram(u32, u32),
    DeleteShader(u32),
    DeleteProgram(u32),
    UseProgram(u32),
    UniformLocation(String),
    UploadVertexBuffer(Vec<u8>),
    DeleteBuffer(u32),
    BindAttribute(String, i32),
    Viewport(i32, i32, i32, i32),
    Uniform1f(String, f32),
    Uniform1i(String, i32),
    Uniform2f(String, f32, f32),
    Uniform3f(String, f32, f32, f32),
    Uniform4f(String, f32, f32, f32, f32),
    ActiveTexture(u32),
    DrawArrays(DrawMode, i32, i32),
}

/// Fake GL context. Handles are sequential ids; a uniform location is the
/// uniform's own name so assertions can read it back.
#[derive(Default)]
pub struct MockGl {
    pub calls: RefCell<Vec<Call>>,
    pub next_id: Cell<u32>,
    pub vertex_error: Option<String>,
    pub fragment_error: Option<String>,
    pub link_error: Option<String>,
    pub buffer_error: Option<String>,
    pub inactive_uniforms: Vec<String>,
    pub missing_attribute: bool,
}

impl MockGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl GlContext for MockGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type Location = String;

    fn compile_shader(&self, stage: ShaderStage, _source: &str) -> Result<u32, String> {
        self.record(Call::CompileShader(stage));
        let err = match stage {
            ShaderStage::Vertex => &self.vertex_error,
            ShaderStage::Fragment => &self.fragment_error,
        };
        match err {
            Some(log) => Err(log.clone()),
            None => Ok(self.id()),
        }
    }

    fn link_program(&self, vertex: &u32, fragment: &u32) -> Result<u32, String> {
        self.record(Call::LinkProgram(*vertex, *fragment));
        match &self.link_error {
            Some(log) => Err(log.clone()),
            None => Ok(self.id()),
        }
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(Call::DeleteShader(*shader));
    }

    fn delete_program(&self, program: &u32) {
        self.record(Call::DeleteProgram(*program));
    }

    fn use_program(&self, program: &u32) {
        self.record(Call::UseProgram(*program));
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        self.record(Call::UniformLocation(name.to_string()));
        if self.inactive_uniforms.iter().any(|n| n == name) {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn upload_vertex_buffer(&self, data: &[u8]) -> Result<u32, String> {
        self.record(Call::UploadVertexBuffer(data.to_vec()));
        match &self.buffer_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.id()),
        }
    }

    fn delete_buffer(&self, buffer: &u32) {
        self.record(Call::DeleteBuffer(*buffer));
    }

    fn bind_float_attribute(&self, _program: &u32, name: &str, components: i32) -> bool {
        self.record(Call::BindAttribute(name.to_string(), components));
        !self.missing_attribute
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn uniform1f(&self, location: &String, x: f32) {
        self.record(Call::Uniform1f(location.clone(), x));
    }

    fn uniform1i(&self, location: &String, x: i32) {
        self.record(Call::Uniform1i(location.clone(), x));
    }

    fn uniform2f(&self, location: &String, x: f32, y: f32) {
        self.record(Call::Uniform2f(location.clone(), x, y));
    }

    fn uniform3f(&self, location: &String, x: f32, y: f32, z: f32) {
        self.record(Call::Uniform3f(location.clone(), x, y, z));
    }

    fn uniform4f(&self, location: &String, x: f32, y: f32, z: f32, w: f32) {
        self.record(Call::Uniform4f(location.clone(), x, y, z, w));
    }

    fn active_texture(&self, unit: u32) {
        self.record(Call::ActiveTexture(unit));
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.record(Call::DrawArrays(mode, first, count));
    }
}

/// Fake canvas element with a settable layout box.
pub struct MockSurface {
    pub bounds: Cell<LayoutBounds>,
    pub pixel_ratio: f64,
    pub backing: Cell<Option<ViewportSize>>,
}

impl MockSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_ratio(width, height, 1.0)
    }

    pub fn with_ratio(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            bounds: Cell::new(LayoutBounds { width, height }),
            pixel_ratio,
            backing: Cell::new(None),
        }
    }
}

impl CanvasSurface for MockSurface {
    fn layout_bounds(&self) -> LayoutBounds {
        self.bounds.get()
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn set_backing_size(&self, size: ViewportSize) {
        self.backing.set(Some(size));
    }
}

/// Fake page: `scroll_to` moves `y` and is recorded.
pub struct MockScroll {
    pub y: Cell<f64>,
    pub height: f64,
    pub scrolls: RefCell<Vec<f64>>,
}

impl MockScroll {
    pub fn new(height: f64) -> Self {
        Self {
            y: Cell::new(0.0),
            height,
            scrolls: RefCell::new(Vec::new()),
        }
    }
}

impl ScrollHost for MockScroll {
    fn scroll_y(&self) -> f64 {
        self.y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_to(&self, y: f64) {
        self.y.set(y);
        self.scrolls.borrow_mut().push(y);
    }
}

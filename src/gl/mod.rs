//! Thin seam over the WebGL calls the pipeline needs.
//!
//! Everything above this trait (initialization, resize, render step) is
//! target-independent; `web::gl` implements it for `WebGlRenderingContext`.

use crate::constants::QUAD_VERTEX_COUNT;
use bytemuck::{Pod, Zeroable};
use std::fmt;
use thiserror::Error;

mod pipeline;

pub use pipeline::{GlPipeline, UniformLocations};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Mesh selector for initialization. Only the full-screen quad exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeshType {
    #[default]
    BaseTriangleStrip,
}

impl MeshType {
    pub fn vertices(&self) -> &'static [QuadVertex] {
        match self {
            MeshType::BaseTriangleStrip => &FULL_SCREEN_QUAD,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

/// Clip-space quad, strip order: bottom-left, bottom-right, top-left, top-right.
pub const FULL_SCREEN_QUAD: [QuadVertex; QUAD_VERTEX_COUNT as usize] = [
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [-1.0, 1.0] },
    QuadVertex { position: [1.0, 1.0] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    TriangleStrip,
}

#[derive(Debug, Error)]
pub enum GlError {
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to link shader program: {0}")]
    Link(String),
    #[error("failed to upload mesh geometry: {0}")]
    Geometry(String),
}

/// The GL surface area used by the pipeline. Handles are opaque to callers.
pub trait GlContext {
    type Shader;
    type Program;
    type Buffer;
    type Location;

    /// Compile one stage; on failure returns the info log.
    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;
    /// Attach both stages and link; on failure returns the info log.
    fn link_program(&self, vertex: &Self::Shader, fragment: &Self::Shader) -> Result<Self::Program, String>;
    fn delete_shader(&self, shader: &Self::Shader);
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);

    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Location>;

    /// Create an array buffer, bind it and upload `data` as static draw.
    fn upload_vertex_buffer(&self, data: &[u8]) -> Result<Self::Buffer, String>;
    fn delete_buffer(&self, buffer: &Self::Buffer);
    /// Point `name` at the bound array buffer as tightly packed floats.
    /// Returns false when the attribute is not active in the program.
    fn bind_float_attribute(&self, program: &Self::Program, name: &str, components: i32) -> bool;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn uniform1f(&self, location: &Self::Location, x: f32);
    fn uniform1i(&self, location: &Self::Location, x: i32);
    fn uniform2f(&self, location: &Self::Location, x: f32, y: f32);
    fn uniform3f(&self, location: &Self::Location, x: f32, y: f32, z: f32);
    fn uniform4f(&self, location: &Self::Location, x: f32, y: f32, z: f32, w: f32);

    fn active_texture(&self, unit: u32);
    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32);
}

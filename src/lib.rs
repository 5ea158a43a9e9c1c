//! Full-viewport WebGL shader canvas and a scroll-jacking section controller.
//!
//! The GL pipeline, resize synchronization, frame clock and scroll state
//! machine are target-independent and tested on the host; browser wiring
//! lives in `web` and is only compiled for `wasm32`.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod easing;
pub mod frame;
pub mod gl;
pub mod input;
pub mod resize;
pub mod scroll_jack;
pub mod throttle;
pub mod uniforms;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{ScrollJackHandle, ShaderCanvasHandle};

pub use canvas::ShaderCanvas;
pub use config::{CanvasConfig, ScrollJackConfig, ShaderSources};
pub use gl::{GlContext, GlError, GlPipeline, MeshType};
pub use resize::{CanvasSurface, LayoutBounds, ResizeSynchronizer, SizeUpdate, ViewportSize};
pub use scroll_jack::{ScrollHost, ScrollJack, ScrollPhase};
pub use uniforms::{UniformDescriptor, UniformError, UniformKind, UniformRegistry, UniformValue};

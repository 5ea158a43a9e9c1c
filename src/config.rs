//! Runtime configuration for the canvas component and the scroll-jack
//! controller. Defaults mirror the constants in `constants.rs`.

use crate::constants::*;
use crate::gl::MeshType;
use std::time::Duration;

/// Shader sources handed to GL initialization. Treated as opaque text.
#[derive(Clone, Debug)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// The bundled pass-through vertex shader and gradient fragment shader.
    pub fn bundled() -> Self {
        Self::new(BASE_VERT, BASE_FRAG)
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::bundled()
    }
}

// Shaders bundled as string constants
pub static BASE_VERT: &str = include_str!("../shaders/base.vert");
pub static BASE_FRAG: &str = include_str!("../shaders/base.frag");

#[derive(Clone, Debug)]
pub struct CanvasConfig {
    /// Scale layout bounds by `devicePixelRatio` when sizing the backing store.
    /// The canvas component renders at logical resolution unless asked otherwise.
    pub use_device_pixel_ratio: bool,
    pub mesh: MeshType,
    pub position_attribute: &'static str,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            use_device_pixel_ratio: false,
            mesh: MeshType::BaseTriangleStrip,
            position_attribute: POSITION_ATTRIBUTE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollJackConfig {
    pub snap_duration: u32,
    pub wheel_threshold: f64,
    pub throttle: Duration,
}

impl Default for ScrollJackConfig {
    fn default() -> Self {
        Self {
            snap_duration: SNAP_DURATION_TICKS,
            wheel_threshold: WHEEL_DELTA_THRESHOLD,
            throttle: Duration::from_millis(INPUT_THROTTLE_MS),
        }
    }
}

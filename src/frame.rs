use crate::constants::ACTIVE_TEXTURE_UNIT;
use crate::gl::{DrawMode, GlContext, GlPipeline};
use crate::uniforms::UniformRegistry;

/// Turns display-refresh timestamps (ms) into seconds since the first frame.
/// Never goes backwards, even if the host hands out an older timestamp.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    last_sec: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let t = ((timestamp_ms - origin) / 1000.0) as f32;
        if t > self.last_sec {
            self.last_sec = t;
        }
        self.last_sec
    }

    pub fn elapsed(&self) -> f32 {
        self.last_sec
    }
}

/// Upload uniforms and draw the full-screen quad.
///
/// A missing context or pipeline (initialization pending or failed) makes
/// this a no-op; returns whether a draw was issued.
pub fn render_step<G: GlContext>(
    gl: Option<&G>,
    pipeline: Option<&GlPipeline<G>>,
    registry: &UniformRegistry,
) -> bool {
    let (Some(gl), Some(pipeline)) = (gl, pipeline) else {
        return false;
    };
    pipeline.upload_uniforms(gl, registry);
    gl.active_texture(ACTIVE_TEXTURE_UNIT);
    gl.draw_arrays(DrawMode::TriangleStrip, 0, pipeline.vertex_count());
    true
}

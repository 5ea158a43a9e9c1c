// Host-side tests for constants and configuration defaults.

use shader_canvas::config::{CanvasConfig, ScrollJackConfig, ShaderSources};
use shader_canvas::constants::*;
use shader_canvas::gl::MeshType;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(SNAP_DURATION_TICKS > 0);
    assert!(WHEEL_DELTA_THRESHOLD > 0.0);
    assert!(INPUT_THROTTLE_MS > 0);
    assert_eq!(QUAD_VERTEX_COUNT, 4);
    assert!(DEFAULT_RESOLUTION[0] > 0.0 && DEFAULT_RESOLUTION[1] > 0.0);
    assert!(DEFAULT_MOUSE.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn canvas_defaults_render_at_logical_resolution() {
    let c = CanvasConfig::default();
    assert!(!c.use_device_pixel_ratio);
    assert_eq!(c.mesh, MeshType::BaseTriangleStrip);
    assert_eq!(c.position_attribute, POSITION_ATTRIBUTE);
}

#[test]
fn scroll_defaults_match_constants() {
    let c = ScrollJackConfig::default();
    assert_eq!(c.snap_duration, 20);
    assert_eq!(c.wheel_threshold, 20.0);
    assert_eq!(c.throttle, Duration::from_millis(20));
}

#[test]
fn bundled_shaders_declare_base_uniforms() {
    let s = ShaderSources::bundled();
    assert!(s.vertex.contains(POSITION_ATTRIBUTE));
    for name in [RESOLUTION_UNIFORM, TIME_UNIFORM, MOUSE_UNIFORM] {
        assert!(s.fragment.contains(name), "fragment shader lacks {}", name);
    }
}

// Shared tuning constants for the shader canvas and the scroll-jack controller.

// Base uniform names (must match the identifiers declared by the shaders)
pub const RESOLUTION_UNIFORM: &str = "uResolution";
pub const TIME_UNIFORM: &str = "uTime";
pub const MOUSE_UNIFORM: &str = "uMouse";

// Vertex attribute fed by the full-screen quad
pub const POSITION_ATTRIBUTE: &str = "aPosition";

// Backing-store size used before the first resize (HTML canvas default)
pub const DEFAULT_RESOLUTION: [f32; 2] = [300.0, 150.0];

// Normalized pointer position used until the first pointer move
pub const DEFAULT_MOUSE: [f32; 2] = [0.5, 0.5];

// Full-screen quad drawn as a triangle strip
pub const QUAD_VERTEX_COUNT: i32 = 4;
pub const QUAD_COMPONENTS: i32 = 2;

// Scroll-jack
pub const SNAP_DURATION_TICKS: u32 = 20; // animation length in display frames
pub const WHEEL_DELTA_THRESHOLD: f64 = 20.0; // ignore |deltaY| below this
pub const INPUT_THROTTLE_MS: u64 = 20; // min spacing between handled wheel/resize events

// Texture unit selected before each draw
pub const ACTIVE_TEXTURE_UNIT: u32 = 0;

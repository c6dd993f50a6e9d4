use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

// Tuning constants for the flight path and the page carousels.

// Flight path: the scroll range is split into equal segments and the model
// zig-zags between these lateral waypoints (one more waypoint than segments).
pub const SEGMENT_COUNT: usize = 6;
pub const SEGMENT_WIDTH: f32 = 1.0 / SEGMENT_COUNT as f32;
pub const LATERAL_WAYPOINTS: [f32; SEGMENT_COUNT + 1] = [0.0, -2.0, 2.0, -2.0, 2.0, -2.0, 0.0];

pub const DESCENT_PER_PROGRESS: f32 = 0.5; // y drops by this much over the full page
pub const RECESSION_PER_PROGRESS: f32 = 2.0; // z recedes by this much over the full page
pub const PITCH_BASE: f32 = 0.02; // nose pitch at the top of the page
pub const PITCH_PER_PROGRESS: f32 = 0.15;

// Scroll follow tween
pub const SCROLL_TWEEN_SEC: f32 = 0.5;

// Entrance glide: model starts off-screen left, banked and side-on
pub const ENTRANCE_START_POSITION: Vec3 = Vec3::new(-12.0, 1.2, 0.0);
pub const ENTRANCE_START_ROTATION: Vec3 = Vec3::new(0.05, FRAC_PI_2, 0.05);
pub const ENTRANCE_REST_X: f32 = 0.0;
pub const ENTRANCE_REST_ROTATION: Vec3 = Vec3::new(0.02, 0.0, -0.02);
pub const ENTRANCE_TWEEN_SEC: f32 = 3.2;
pub const ENTRANCE_DELAY_SEC: f32 = 0.2;

// Model loading
pub const MODEL_TARGET_SIZE: f32 = 2.0; // largest bounding dimension after scaling
pub const MODEL_CANDIDATES: [&str; 5] = [
    "img/stylized_ww1_plane.glb",
    "img/wwii_cartoon_plane_free.glb",
    "img/sukhoi_su-75.glb",
    "img/c17__transport_aircraft.glb",
    "img/cargo_aircraft.glb",
];

// Carousels
pub const SLIDE_SETTLE_MS: u64 = 800; // must outlive the CSS slide transition
pub const AUTOPLAY_PERIOD_MS: u64 = 2000;
pub const SLIDE_STEP_PERCENT: f32 = 100.0;
pub const DOT_ACTIVE_CLASS: &str = "active";

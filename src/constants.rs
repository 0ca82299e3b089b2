/// Page wiring and browser-side tuning constants.
///
/// Element ids must match `index.html`; everything that shapes the effects
/// themselves lives in `hands_core::constants`.
// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const VIDEO_ID: &str = "app-video";
pub const STATUS_ID: &str = "status-overlay";
pub const HINT_ID: &str = "hint-overlay";
pub const CONFIG_SCRIPT_ID: &str = "app-config"; // <script type="application/json">

// Landmark model assets
pub const MEDIAPIPE_CDN: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/hands/";

// Frame loop
pub const FPS_LOG_INTERVAL_SEC: f32 = 10.0; // how often the loop reports its rate
pub const DT_CLAMP_SEC: f32 = 0.25; // ignore longer stalls (tab in background)

// HUD text
pub const LABEL_FONT: &str = "bold 18px system-ui, sans-serif";
pub const LABEL_SHADOW_PX: f64 = 8.0;
pub const LABEL_OFFSET_PX: f64 = 12.0;
pub const HALO_SHADOW_PX: f32 = 20.0; // shadowBlur around landmark halos

// Snapshot encoding
pub const SNAPSHOT_QUALITY_MIN: f64 = 0.1;
pub const SNAPSHOT_QUALITY_MAX: f64 = 1.0;

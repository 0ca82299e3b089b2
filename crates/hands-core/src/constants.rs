// Shared gesture and effect tuning constants used by the core and the web frontend.
//
// Positions and radii are in normalized frame units (x by width, y by height);
// lifetimes are in render ticks.

// Gesture geometry
pub const FIST_TIP_TO_WRIST_MAX: f32 = 0.15; // every tip closer than this to the wrist
pub const SPHERE_SPREAD_MIN: f32 = 0.05; // mean pairwise tip distance, exclusive
pub const SPHERE_SPREAD_MAX: f32 = 0.15;
pub const FINGER_UP_EPSILON: f32 = 0.02; // tip must be this much higher than its base
pub const HEART_TIP_DISTANCE_MAX: f32 = 0.06; // thumb tip to index tip

// Particles
pub const PARTICLE_SPEED_MIN: f32 = 0.002;
pub const PARTICLE_SPEED_MAX: f32 = 0.010;
pub const PARTICLE_LIFE_MIN: u32 = 30;
pub const PARTICLE_LIFE_MAX: u32 = 60;
pub const PARTICLE_SIZE_MIN: f32 = 0.003;
pub const PARTICLE_SIZE_MAX: f32 = 0.008;
pub const HEART_BURST_PARTICLES: usize = 30;

// Sphere charge
pub const SPHERE_INITIAL_RADIUS: f32 = 0.01;
pub const SPHERE_GROWTH_PER_TICK: f32 = 0.003;
pub const SPHERE_RADIUS_CEILING: f32 = 0.12;

// Lightning
pub const LIGHTNING_LIFE: u32 = 10;
pub const LIGHTNING_SEGMENTS: usize = 10;
pub const LIGHTNING_JITTER: f32 = 0.03;
pub const LIGHTNING_FAR_SIDE_MIN: f32 = 0.7; // end x lands in [min, 1] on the far half
pub const LIGHTNING_VERTICAL_SPREAD: f32 = 0.35;

// Arrow
pub const ARROW_LIFE: u32 = 20;
pub const ARROW_VERTICAL_DEVIATION: f32 = 0.05;
pub const ARROW_HEAD_LENGTH: f32 = 0.03;

// Trails
pub const TRAIL_POINT_LIFE: u32 = 18;
pub const TRAIL_POINT_SIZE: f32 = 0.006;

// Configurable effect sizes, upper bounds
pub const MAX_BOLTS_PER_BURST: usize = 20;
pub const MAX_SPHERE_BURST_PARTICLES: usize = 500;
pub const MAX_TRAIL_CAPACITY: usize = 128;

// Overlay sizing (pixels)
pub const CONNECTOR_WIDTH_PX: f32 = 4.0;
pub const LANDMARK_RADIUS_PX: f32 = 6.0;
pub const LANDMARK_GLOW_RADIUS_PX: f32 = 15.0;
pub const EFFECT_LINE_WIDTH_PX: f32 = 3.0;

// Hand slots
pub const MAX_HANDS_LIMIT: usize = 4;

// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hands_core::constants as fx;

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_sane() {
    assert!(MEDIAPIPE_CDN.starts_with("https://"));
    assert!(MEDIAPIPE_CDN.ends_with('/'));
    assert!(FPS_LOG_INTERVAL_SEC > 0.0);
    assert!(DT_CLAMP_SEC > 0.0 && DT_CLAMP_SEC < FPS_LOG_INTERVAL_SEC);
    assert!(SNAPSHOT_QUALITY_MIN > 0.0 && SNAPSHOT_QUALITY_MIN < SNAPSHOT_QUALITY_MAX);
    assert!(SNAPSHOT_QUALITY_MAX <= 1.0);
}

#[test]
fn element_ids_are_distinct() {
    let mut ids = vec![CANVAS_ID, VIDEO_ID, STATUS_ID, HINT_ID, CONFIG_SCRIPT_ID];
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_ordered() {
    assert!(fx::SPHERE_SPREAD_MIN < fx::SPHERE_SPREAD_MAX);
    assert!(fx::FINGER_UP_EPSILON > 0.0);
    assert!(fx::HEART_TIP_DISTANCE_MAX < fx::FIST_TIP_TO_WRIST_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_ranges_are_ordered() {
    assert!(fx::PARTICLE_SPEED_MIN < fx::PARTICLE_SPEED_MAX);
    assert!(fx::PARTICLE_LIFE_MIN > 0 && fx::PARTICLE_LIFE_MIN <= fx::PARTICLE_LIFE_MAX);
    assert!(fx::PARTICLE_SIZE_MIN < fx::PARTICLE_SIZE_MAX);
    assert!(fx::SPHERE_INITIAL_RADIUS < fx::SPHERE_RADIUS_CEILING);
    assert!(fx::SPHERE_GROWTH_PER_TICK > 0.0);
    assert!(fx::LIGHTNING_FAR_SIDE_MIN > 0.5 && fx::LIGHTNING_FAR_SIDE_MIN <= 1.0);
    assert!(fx::LIGHTNING_SEGMENTS >= 2);
    assert!(fx::ARROW_LIFE > 0 && fx::TRAIL_POINT_LIFE > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_wraps_landmark_dots() {
    assert!(fx::LANDMARK_GLOW_RADIUS_PX > fx::LANDMARK_RADIUS_PX);
    assert!(fx::CONNECTOR_WIDTH_PX > 0.0);
}

// Host-side tests for the flat landmark bridge.

mod support;

use hands_core::landmarks::{parse_flat_hands, Hand, HAND_CONNECTIONS, LANDMARK_COUNT, WRIST};
use hands_core::{Error, Recovery};
use support::*;

#[test]
fn flat_buffer_round_trips_hands() {
    let hands = [peace_hand(), fist_hand()];
    let parsed = parse_flat_hands(&flatten(&hands), 2, 4).unwrap();
    assert_eq!(parsed.as_slice(), &hands);
}

#[test]
fn extra_hands_beyond_max_are_dropped() {
    let hands = [peace_hand(), fist_hand(), open_hand()];
    let parsed = parse_flat_hands(&flatten(&hands), 3, 2).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1], fist_hand());
}

#[test]
fn short_buffer_is_a_skippable_error() {
    let mut data = flatten(&[peace_hand()]);
    data.pop();
    let err = parse_flat_hands(&data, 1, 2).unwrap_err();
    assert!(matches!(err, Error::LandmarkCount { expected: 63, got: 62 }));
    assert_eq!(err.recovery(), Recovery::SkipFrame);
    assert!(Hand::from_flat(&data).is_err());
}

#[test]
fn no_hands_is_empty_not_an_error() {
    assert!(parse_flat_hands(&[], 0, 2).unwrap().is_empty());
}

#[test]
fn mirroring_flips_x_only() {
    let hand = peace_hand();
    let m = hand.mirrored();
    for (a, b) in hand.landmarks.iter().zip(m.landmarks.iter()) {
        assert!((a.x + b.x - 1.0).abs() < 1e-6);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn skeleton_connects_every_landmark() {
    let mut seen = [false; LANDMARK_COUNT];
    for &(a, b) in HAND_CONNECTIONS.iter() {
        assert!(a < LANDMARK_COUNT && b < LANDMARK_COUNT && a != b);
        seen[a] = true;
        seen[b] = true;
    }
    assert!(seen.iter().all(|&s| s));
    assert!(HAND_CONNECTIONS.iter().any(|&(a, _)| a == WRIST));
}

// Synthetic hands for host-side tests. Coordinates are normalized with y
// growing downward, so a raised finger has a smaller y than its base joint.

#![allow(dead_code)]
use hands_core::landmarks::*;
use hands_core::{Hand, HandSet, Landmark};

pub const WRIST_AT: (f32, f32) = (0.5, 0.8);

/// Every finger bent: tips sit at or below their base joints, spread wide
/// enough not to read as a cupped hand.
pub fn curled_hand() -> Hand {
    let mut lms = [Landmark::default(); LANDMARK_COUNT];
    lms[WRIST] = Landmark::new(WRIST_AT.0, WRIST_AT.1, 0.0);
    for finger in 0..5 {
        let x = 0.34 + 0.08 * finger as f32;
        let first = 1 + 4 * finger;
        for (j, y) in [0.6, 0.55, 0.57, 0.6].iter().enumerate() {
            lms[first + j] = Landmark::new(x, *y, 0.0);
        }
    }
    Hand::new(lms)
}

pub fn raise(hand: &mut Hand, tip: usize, base: usize) {
    hand.landmarks[tip].y = hand.landmarks[base].y - 0.1;
}

pub fn peace_hand() -> Hand {
    let mut h = curled_hand();
    raise(&mut h, INDEX_TIP, INDEX_PIP);
    raise(&mut h, MIDDLE_TIP, MIDDLE_PIP);
    h
}

pub fn open_hand() -> Hand {
    let mut h = curled_hand();
    for (&tip, &base) in FINGERTIPS.iter().zip(FINGER_BASES.iter()) {
        raise(&mut h, tip, base);
    }
    h
}

/// All five tips exactly `radius` from the wrist.
pub fn fist_hand_at(radius: f32) -> Hand {
    let mut h = curled_hand();
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        let angle = -std::f32::consts::FRAC_PI_2 + (i as f32 - 2.0) * 0.3;
        h.landmarks[tip] = Landmark::new(
            WRIST_AT.0 + radius * angle.cos(),
            WRIST_AT.1 + radius * angle.sin(),
            0.0,
        );
    }
    h
}

pub fn fist_hand() -> Hand {
    fist_hand_at(0.05)
}

/// Fingers bent with the five tips in an evenly spaced row above the palm.
/// Collinear tips at step `s` have a mean pairwise distance of `2 * s`.
pub fn cupped_hand(spread: f32) -> Hand {
    let step = spread / 2.0;
    let mut h = curled_hand();
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        h.landmarks[tip] = Landmark::new(0.5 + step * (i as f32 - 2.0), 0.6, 0.0);
    }
    h
}

/// Four bent tips stacked on one point and the pinky tip `offset` to its
/// right. The mean spread is `0.4 * offset`, exact in f32 for dyadic offsets.
pub fn pinched_hand(offset: f32) -> Hand {
    let mut h = curled_hand();
    let (x, y) = (0.625 - offset, 0.625);
    for &tip in &FINGERTIPS[..4] {
        h.landmarks[tip] = Landmark::new(x, y, 0.0);
    }
    h.landmarks[PINKY_TIP] = Landmark::new(0.625, y, 0.0);
    h
}

pub fn sphere_hand() -> Hand {
    cupped_hand(0.08)
}

/// Thumb and index raised with their tips touching.
pub fn heart_hand() -> Hand {
    let mut h = curled_hand();
    raise(&mut h, THUMB_TIP, THUMB_MCP);
    raise(&mut h, INDEX_TIP, INDEX_PIP);
    h.landmarks[INDEX_TIP].x = h.landmarks[THUMB_TIP].x + 0.04;
    h
}

pub fn hand_set(hands: &[Hand]) -> HandSet {
    hands.iter().copied().collect()
}

/// Flat x,y,z buffer in the layout the landmark bridge produces.
pub fn flatten(hands: &[Hand]) -> Vec<f32> {
    hands
        .iter()
        .flat_map(|h| h.landmarks.iter().flat_map(|l| [l.x, l.y, l.z]))
        .collect()
}

//! Static gesture classification from one hand's landmark geometry.
//!
//! The classifier is a fixed threshold heuristic evaluated in priority order;
//! the first rule that matches wins. "Finger up" compares a fingertip with its
//! base joint in image space only, so a correctly posed hand seen at an
//! oblique angle can be misread. That is accepted behavior.

use crate::constants::{
    FINGER_UP_EPSILON, FIST_TIP_TO_WRIST_MAX, HEART_TIP_DISTANCE_MAX, SPHERE_SPREAD_MAX,
    SPHERE_SPREAD_MIN,
};
use crate::landmarks::{
    Hand, FINGERTIPS, FINGER_BASES, INDEX_PIP, INDEX_TIP, THUMB_MCP, THUMB_TIP, WRIST,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Fist,
    Sphere,
    Peace,
    Open,
    Three,
    Four,
    MiddleFinger,
    Heart,
}

impl Gesture {
    pub const ALL: [Gesture; 8] = [
        Gesture::Fist,
        Gesture::Sphere,
        Gesture::Peace,
        Gesture::Open,
        Gesture::Three,
        Gesture::Four,
        Gesture::MiddleFinger,
        Gesture::Heart,
    ];

    /// Short label for the on-screen HUD.
    pub fn label(self) -> &'static str {
        match self {
            Gesture::Fist => "Fist",
            Gesture::Sphere => "Sphere",
            Gesture::Peace => "Peace",
            Gesture::Open => "Open",
            Gesture::Three => "Three",
            Gesture::Four => "Four",
            Gesture::MiddleFinger => "Nope",
            Gesture::Heart => "Heart",
        }
    }
}

/// Which fingers are raised, thumb to pinky.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerStates(pub [bool; 5]);

impl FingerStates {
    pub fn of(hand: &Hand) -> Self {
        let mut up = [false; 5];
        for (finger, flag) in up.iter_mut().enumerate() {
            *flag = is_finger_up(hand, FINGERTIPS[finger], FINGER_BASES[finger]);
        }
        Self(up)
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&u| u)
    }

    #[inline]
    fn is(&self, pattern: [bool; 5]) -> bool {
        self.0 == pattern
    }
}

/// A finger is up when its tip sits measurably above its base joint.
#[inline]
pub fn is_finger_up(hand: &Hand, tip: usize, base: usize) -> bool {
    hand.landmarks[tip].y < hand.landmarks[base].y - FINGER_UP_EPSILON
}

/// Mean distance over the ten fingertip pairs.
pub fn mean_tip_spread(hand: &Hand) -> f32 {
    let mut sum = 0.0;
    let mut pairs = 0u32;
    for (i, &a) in FINGERTIPS.iter().enumerate() {
        for &b in &FINGERTIPS[i + 1..] {
            sum += hand.landmarks[a].distance_2d(&hand.landmarks[b]);
            pairs += 1;
        }
    }
    sum / pairs as f32
}

fn is_fist(hand: &Hand) -> bool {
    let wrist = &hand.landmarks[WRIST];
    FINGERTIPS
        .iter()
        .all(|&tip| hand.landmarks[tip].distance_2d(wrist) < FIST_TIP_TO_WRIST_MAX)
}

fn is_heart(hand: &Hand) -> bool {
    let thumb = &hand.landmarks[THUMB_TIP];
    let index = &hand.landmarks[INDEX_TIP];
    thumb.distance_2d(index) < HEART_TIP_DISTANCE_MAX
        && thumb.y < hand.landmarks[THUMB_MCP].y
        && index.y < hand.landmarks[INDEX_PIP].y
}

/// Classify one hand. Pure: the same landmarks always give the same answer.
pub fn classify(hand: &Hand) -> Option<Gesture> {
    if is_fist(hand) {
        return Some(Gesture::Fist);
    }

    let fingers = FingerStates::of(hand);

    if !fingers.any() {
        let spread = mean_tip_spread(hand);
        if spread > SPHERE_SPREAD_MIN && spread < SPHERE_SPREAD_MAX {
            return Some(Gesture::Sphere);
        }
    }

    //                 thumb  index  middle ring   pinky
    if fingers.is([false, true, true, false, false]) {
        return Some(Gesture::Peace);
    }
    if fingers.is([true, true, true, true, true]) {
        return Some(Gesture::Open);
    }
    if fingers.is([true, true, true, false, false]) {
        return Some(Gesture::Three);
    }
    if fingers.is([false, true, true, true, true]) {
        return Some(Gesture::Four);
    }
    if fingers.is([false, false, true, false, false]) {
        return Some(Gesture::MiddleFinger);
    }
    if is_heart(hand) {
        return Some(Gesture::Heart);
    }
    None
}

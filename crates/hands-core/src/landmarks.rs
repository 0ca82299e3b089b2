//! Hand skeleton types shared by the classifier, the effects and the renderer.
//!
//! Coordinates are normalized to the frame: `x` grows to the right, `y` grows
//! downward, both in `[0, 1]`. `z` is the model's relative depth and is not
//! used by the 2D heuristics.

use crate::error::{Error, Result};
use glam::Vec2;
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;
/// Floats per landmark in a flat `x, y, z` buffer.
pub const FLOATS_PER_LANDMARK: usize = 3;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertips, thumb to pinky.
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
/// Joint each fingertip is compared against for the "finger up" test.
pub const FINGER_BASES: [usize; 5] = [THUMB_MCP, INDEX_PIP, MIDDLE_PIP, RING_PIP, PINKY_PIP];

/// Skeleton connections drawn by the overlay (same topology as the model's
/// own connection list).
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP),
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Planar distance, ignoring depth.
    #[inline]
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        self.xy().distance(other.xy())
    }
}

/// One detected hand: exactly [`LANDMARK_COUNT`] points in model order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand {
    pub landmarks: [Landmark; LANDMARK_COUNT],
}

impl Hand {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Build a hand from one `x, y, z` triple per landmark.
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        let expected = LANDMARK_COUNT * FLOATS_PER_LANDMARK;
        if data.len() != expected {
            return Err(Error::LandmarkCount {
                expected,
                got: data.len(),
            });
        }
        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (i, lm) in landmarks.iter_mut().enumerate() {
            let base = i * FLOATS_PER_LANDMARK;
            *lm = Landmark::new(data[base], data[base + 1], data[base + 2]);
        }
        Ok(Self { landmarks })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.landmarks[index].xy()
    }

    /// Flip horizontally so the overlay matches a mirrored video draw.
    pub fn mirrored(&self) -> Self {
        let mut out = *self;
        for lm in &mut out.landmarks {
            lm.x = 1.0 - lm.x;
        }
        out
    }
}

/// Hands detected in one frame, in the order the model reported them.
pub type HandSet = SmallVec<[Hand; 4]>;

/// Slot identity for per-hand bookkeeping. Positional by default: the model
/// gives no stable tracking id, so slot `i` this frame is taken to be slot `i`
/// last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandId(pub usize);

/// Parse `num_hands` consecutive hands from a flat buffer, keeping at most
/// `max_hands`.
pub fn parse_flat_hands(data: &[f32], num_hands: usize, max_hands: usize) -> Result<HandSet> {
    let stride = LANDMARK_COUNT * FLOATS_PER_LANDMARK;
    let expected = num_hands * stride;
    if data.len() != expected {
        return Err(Error::LandmarkCount {
            expected,
            got: data.len(),
        });
    }
    data.chunks_exact(stride)
        .take(max_hands)
        .map(Hand::from_flat)
        .collect()
}

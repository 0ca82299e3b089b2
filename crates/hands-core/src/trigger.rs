//! Rising-edge mapping from gestures to effect spawns.
//!
//! A held pose produces one spawn when it first appears, not one per frame.

use crate::gesture::Gesture;
use crate::landmarks::{Hand, HandId, INDEX_TIP, MIDDLE_MCP, THUMB_TIP, WRIST};
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// Landmark-derived points effects are anchored to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAnchors {
    pub wrist: Vec2,
    pub palm: Vec2,
    pub pinch: Vec2,
}

impl HandAnchors {
    pub fn of(hand: &Hand) -> Self {
        Self {
            wrist: hand.point(WRIST),
            palm: hand.point(MIDDLE_MCP),
            pinch: (hand.point(THUMB_TIP) + hand.point(INDEX_TIP)) * 0.5,
        }
    }
}

/// Declarative spawn request. Randomized details (bolt end points, particle
/// velocities) are filled in when the effect state applies it.
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnCommand {
    LightningBurst { origin: Vec2 },
    Arrow { origin: Vec2 },
    SphereCharge { center: Vec2, owner: HandId },
    HeartBurst { center: Vec2 },
    CyclePalette,
}

pub type Spawns = SmallVec<[SpawnCommand; 2]>;

/// Spawns for one hand given its current and previous gesture.
pub fn on_frame(
    hand: HandId,
    current: Option<Gesture>,
    previous: Option<Gesture>,
    anchors: &HandAnchors,
) -> Spawns {
    let mut out = Spawns::new();
    let gesture = match current {
        Some(g) if previous != Some(g) => g,
        _ => return out,
    };
    match gesture {
        Gesture::Fist => out.push(SpawnCommand::LightningBurst {
            origin: anchors.wrist,
        }),
        Gesture::Peace => out.push(SpawnCommand::Arrow {
            origin: anchors.wrist,
        }),
        Gesture::Sphere => out.push(SpawnCommand::SphereCharge {
            center: anchors.palm,
            owner: hand,
        }),
        Gesture::Open => out.push(SpawnCommand::CyclePalette),
        Gesture::Heart => out.push(SpawnCommand::HeartBurst {
            center: anchors.pinch,
        }),
        Gesture::Three | Gesture::Four | Gesture::MiddleFinger => {}
    }
    out
}

/// Last observed gesture per hand slot.
#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    previous: FnvHashMap<HandId, Gesture>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self, hand: HandId) -> Option<Gesture> {
        self.previous.get(&hand).copied()
    }

    /// Record this frame's gesture for `hand`, returning what it replaced.
    /// Always updates, whether or not anything spawned.
    pub fn observe(&mut self, hand: HandId, current: Option<Gesture>) -> Option<Gesture> {
        match current {
            Some(g) => self.previous.insert(hand, g),
            None => self.previous.remove(&hand),
        }
    }

    /// Reset every slot not present this frame.
    pub fn retain_present(&mut self, present: usize) {
        self.previous.retain(|id, _| id.0 < present);
    }

    pub fn clear(&mut self) {
        self.previous.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> HandAnchors {
        HandAnchors {
            wrist: Vec2::new(0.2, 0.8),
            palm: Vec2::new(0.25, 0.6),
            pinch: Vec2::new(0.3, 0.5),
        }
    }

    #[test]
    fn held_gesture_fires_once() {
        let mut tracker = GestureTracker::new();
        let mut fired = 0;
        for _ in 0..30 {
            let prev = tracker.observe(HandId(0), Some(Gesture::Peace));
            fired += on_frame(HandId(0), Some(Gesture::Peace), prev, &anchors()).len();
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn unwatched_gestures_spawn_nothing() {
        for g in [Gesture::Three, Gesture::Four, Gesture::MiddleFinger] {
            assert!(on_frame(HandId(0), Some(g), None, &anchors()).is_empty());
        }
    }

    #[test]
    fn retain_present_drops_missing_slots() {
        let mut tracker = GestureTracker::new();
        tracker.observe(HandId(0), Some(Gesture::Fist));
        tracker.observe(HandId(1), Some(Gesture::Open));
        tracker.retain_present(1);
        assert_eq!(tracker.previous(HandId(0)), Some(Gesture::Fist));
        assert_eq!(tracker.previous(HandId(1)), None);
    }
}

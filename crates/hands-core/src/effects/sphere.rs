use crate::constants::{SPHERE_GROWTH_PER_TICK, SPHERE_INITIAL_RADIUS, SPHERE_RADIUS_CEILING};
use crate::landmarks::HandId;
use glam::Vec2;

/// Charge that grows in place, then bursts into particles.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereCharge {
    pub center: Vec2,
    pub radius: f32,
    pub active: bool,
    pub owner: HandId,
}

impl SphereCharge {
    pub fn new(center: Vec2, owner: HandId) -> Self {
        Self {
            center,
            radius: SPHERE_INITIAL_RADIUS,
            active: true,
            owner,
        }
    }

    /// Grow one tick. Returns `true` exactly once: on the tick the radius
    /// first exceeds the ceiling, when the charge deactivates.
    pub fn grow(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.radius += SPHERE_GROWTH_PER_TICK;
        if self.radius > SPHERE_RADIUS_CEILING {
            self.active = false;
            return true;
        }
        false
    }

    /// Growth fraction toward the ceiling.
    #[inline]
    pub fn charge(&self) -> f32 {
        (self.radius / SPHERE_RADIUS_CEILING).clamp(0.0, 1.0)
    }
}

use crate::constants::{
    LIGHTNING_FAR_SIDE_MIN, LIGHTNING_JITTER, LIGHTNING_LIFE, LIGHTNING_SEGMENTS,
    LIGHTNING_VERTICAL_SPREAD,
};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct LightningBolt {
    pub start: Vec2,
    pub end: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl LightningBolt {
    pub fn new(start: Vec2, end: Vec2, life: u32) -> Self {
        Self {
            start,
            end,
            life,
            max_life: life.max(1),
        }
    }

    /// Bolt from `origin` to a random point on the opposite half of the frame.
    pub fn toward_far_side<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let reach = rng.gen_range(LIGHTNING_FAR_SIDE_MIN..=1.0);
        let x = if origin.x < 0.5 { reach } else { 1.0 - reach };
        let y = (origin.y + rng.gen_range(-LIGHTNING_VERTICAL_SPREAD..=LIGHTNING_VERTICAL_SPREAD))
            .clamp(0.0, 1.0);
        Self::new(origin, Vec2::new(x, y), LIGHTNING_LIFE)
    }

    #[inline]
    pub fn step(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    #[inline]
    pub fn fade(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }

    /// Fresh jagged path for one draw. Called per draw so the bolt flickers.
    pub fn path<R: Rng + ?Sized>(&self, rng: &mut R) -> SmallVec<[Vec2; 16]> {
        jagged_path(self.start, self.end, LIGHTNING_SEGMENTS, LIGHTNING_JITTER, rng)
    }
}

/// Polyline from `start` to `end` with interior points pushed sideways by up
/// to `jitter`. Endpoints are exact.
pub fn jagged_path<R: Rng + ?Sized>(
    start: Vec2,
    end: Vec2,
    segments: usize,
    jitter: f32,
    rng: &mut R,
) -> SmallVec<[Vec2; 16]> {
    let segments = segments.max(1);
    let normal = (end - start).perp().normalize_or_zero();
    let mut points = SmallVec::with_capacity(segments + 1);
    points.push(start);
    for i in 1..segments {
        let t = i as f32 / segments as f32;
        let offset = if jitter > 0.0 {
            rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };
        points.push(start.lerp(end, t) + normal * offset);
    }
    points.push(end);
    points
}

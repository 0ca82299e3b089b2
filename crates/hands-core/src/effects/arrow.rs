use crate::constants::{ARROW_LIFE, ARROW_VERTICAL_DEVIATION};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct ArrowShot {
    pub start: Vec2,
    pub end: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl ArrowShot {
    pub fn new(start: Vec2, end: Vec2, life: u32) -> Self {
        Self {
            start,
            end,
            life,
            max_life: life.max(1),
        }
    }

    /// Aim horizontally at the far edge with a small vertical wobble.
    pub fn aimed_across<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let x = if origin.x < 0.5 { 1.0 } else { 0.0 };
        let dy = rng.gen_range(-ARROW_VERTICAL_DEVIATION..=ARROW_VERTICAL_DEVIATION);
        Self::new(origin, Vec2::new(x, (origin.y + dy).clamp(0.0, 1.0)), ARROW_LIFE)
    }

    #[inline]
    pub fn step(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Flight progress in `(0, 1]`; reaches 1 on the last live tick.
    #[inline]
    pub fn progress(&self) -> f32 {
        (self.max_life - self.life + 1) as f32 / self.max_life as f32
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.start.lerp(self.end, self.progress().min(1.0))
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }
}

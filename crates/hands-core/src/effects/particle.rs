use crate::constants::{
    PARTICLE_LIFE_MAX, PARTICLE_LIFE_MIN, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN,
    PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};
use crate::palette::Rgba;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, life: u32, size: f32, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            life,
            max_life: life.max(1),
            size,
            color,
        }
    }

    /// Random direction, speed, life and size around `center`.
    pub fn scattered<R: Rng + ?Sized>(center: Vec2, color: Rgba, rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        let life = rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX);
        let size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        Self::new(
            center,
            Vec2::new(angle.cos(), angle.sin()) * speed,
            life,
            size,
            color,
        )
    }

    #[inline]
    pub fn step(&mut self) {
        self.position += self.velocity;
        self.life = self.life.saturating_sub(1);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remaining life as a fraction, used for alpha.
    #[inline]
    pub fn fade(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

pub fn burst<R: Rng + ?Sized>(
    center: Vec2,
    count: usize,
    color: Rgba,
    rng: &mut R,
) -> impl Iterator<Item = Particle> + '_ {
    (0..count).map(move |_| Particle::scattered(center, color, &mut *rng))
}

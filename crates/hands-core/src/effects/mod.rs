//! Transient animated entities driven by gesture spawns.
//!
//! Every collection is advanced once per render tick. Drawing reads the
//! post-advance state and never mutates it.

mod arrow;
mod lightning;
mod particle;
mod sphere;
mod trail;

pub use arrow::ArrowShot;
pub use lightning::{jagged_path, LightningBolt};
pub use particle::{burst, Particle};
pub use sphere::SphereCharge;
pub use trail::{Trail, TrailPoint};

use crate::constants::HEART_BURST_PARTICLES;
use crate::landmarks::HandId;
use crate::palette::{Palette, HEART_PINK};
use crate::trigger::SpawnCommand;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Sizes that depend on the device profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectSettings {
    pub bolts_per_burst: usize,
    pub sphere_burst_particles: usize,
    pub trail_capacity: usize,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            bolts_per_burst: 5,
            sphere_burst_particles: 100,
            trail_capacity: 35,
        }
    }
}

/// What one advance step did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub expired: usize,
    pub sphere_bursts: usize,
}

#[derive(Clone, Debug)]
pub struct EffectState {
    pub settings: EffectSettings,
    pub particles: Vec<Particle>,
    pub bolts: Vec<LightningBolt>,
    pub arrows: Vec<ArrowShot>,
    pub spheres: Vec<SphereCharge>,
    pub trail: Trail,
}

impl EffectState {
    pub fn new(settings: EffectSettings) -> Self {
        Self {
            settings,
            particles: Vec::new(),
            bolts: Vec::new(),
            arrows: Vec::new(),
            spheres: Vec::new(),
            trail: Trail::new(settings.trail_capacity),
        }
    }

    /// One tick: age and filter, then resolve sphere bursts, then append the
    /// trail samples taken from this frame's hands.
    pub fn advance<R, I>(
        &mut self,
        trail_samples: I,
        burst_palette: &Palette,
        rng: &mut R,
    ) -> AdvanceReport
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Vec2>,
    {
        let mut report = AdvanceReport::default();

        let aged = self.particles.len() + self.bolts.len() + self.arrows.len() + self.trail.len();
        for p in &mut self.particles {
            p.step();
        }
        self.particles.retain(Particle::is_alive);
        for b in &mut self.bolts {
            b.step();
        }
        self.bolts.retain(LightningBolt::is_alive);
        for a in &mut self.arrows {
            a.step();
        }
        self.arrows.retain(ArrowShot::is_alive);
        self.trail.age();
        report.expired =
            aged - (self.particles.len() + self.bolts.len() + self.arrows.len() + self.trail.len());

        let mut burst_centers: SmallVec<[Vec2; 4]> = SmallVec::new();
        for s in &mut self.spheres {
            if s.grow() {
                burst_centers.push(s.center);
            }
        }
        self.spheres.retain(|s| s.active);
        let count = self.settings.sphere_burst_particles;
        for center in burst_centers {
            self.particles
                .extend(burst(center, count, burst_palette.particle, rng));
            report.sphere_bursts += 1;
            log::debug!("[effects] sphere burst at ({:.2},{:.2})", center.x, center.y);
        }

        for sample in trail_samples {
            self.trail.push(sample);
        }

        report
    }

    /// Turn a spawn command into entities. Returns `false` when the command
    /// was refused or is not an effect (palette changes belong to the session).
    pub fn apply<R: Rng + ?Sized>(&mut self, command: &SpawnCommand, rng: &mut R) -> bool {
        match *command {
            SpawnCommand::LightningBurst { origin } => {
                for _ in 0..self.settings.bolts_per_burst {
                    self.bolts.push(LightningBolt::toward_far_side(origin, rng));
                }
                true
            }
            SpawnCommand::Arrow { origin } => {
                self.arrows.push(ArrowShot::aimed_across(origin, rng));
                true
            }
            SpawnCommand::SphereCharge { center, owner } => {
                if self.sphere_active_for(owner) {
                    log::debug!("[effects] hand {} already charging", owner.0);
                    return false;
                }
                self.spheres.push(SphereCharge::new(center, owner));
                true
            }
            SpawnCommand::HeartBurst { center } => {
                self.particles
                    .extend(burst(center, HEART_BURST_PARTICLES, HEART_PINK, rng));
                true
            }
            SpawnCommand::CyclePalette => false,
        }
    }

    pub fn sphere_active_for(&self, owner: HandId) -> bool {
        self.spheres.iter().any(|s| s.active && s.owner == owner)
    }

    /// Keep an owner's growing charge centered on its hand.
    pub fn follow_anchor(&mut self, owner: HandId, center: Vec2) {
        for s in self.spheres.iter_mut().filter(|s| s.active && s.owner == owner) {
            s.center = center;
        }
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
            + self.bolts.len()
            + self.arrows.len()
            + self.spheres.len()
            + self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.bolts.clear();
        self.arrows.clear();
        self.spheres.clear();
        self.trail.clear();
    }
}

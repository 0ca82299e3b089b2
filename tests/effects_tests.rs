// Host-side tests for effect lifetimes, sphere bursts and the trail buffer.

use glam::Vec2;
use hands_core::constants::*;
use hands_core::effects::*;
use hands_core::landmarks::HandId;
use hands_core::palette::{palette, Rgba};
use hands_core::SpawnCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn state() -> EffectState {
    EffectState::new(EffectSettings::default())
}

fn tick(state: &mut EffectState, rng: &mut StdRng) -> AdvanceReport {
    state.advance(std::iter::empty(), palette(0), rng)
}

#[test]
fn particle_is_present_for_exactly_its_life() {
    for life in [1u32, 2, 30, 60] {
        let mut fx = state();
        let mut r = rng();
        fx.particles.push(Particle::new(
            Vec2::splat(0.5),
            Vec2::ZERO,
            life,
            0.005,
            Rgba::rgb(255, 255, 255),
        ));
        // Spawn tick counts as the first.
        let mut present = 1;
        for _ in 0..(life + 20) {
            tick(&mut fx, &mut r);
            if !fx.particles.is_empty() {
                present += 1;
            }
        }
        assert_eq!(present, life, "life {}", life);
    }
}

#[test]
fn sphere_grows_monotonically_and_bursts_once() {
    let mut fx = state();
    let mut r = rng();
    assert!(fx.apply(
        &SpawnCommand::SphereCharge {
            center: Vec2::new(0.4, 0.4),
            owner: HandId(0),
        },
        &mut r,
    ));

    let mut last_radius = SPHERE_INITIAL_RADIUS;
    let mut bursts = 0;
    let mut burst_tick = None;
    for t in 0..200 {
        let radius = fx.spheres.first().map(|s| s.radius);
        let report = tick(&mut fx, &mut r);
        if let (Some(before), Some(after)) = (radius, fx.spheres.first().map(|s| s.radius)) {
            assert!(after > before);
            last_radius = after;
        }
        if report.sphere_bursts > 0 {
            bursts += report.sphere_bursts;
            burst_tick.get_or_insert(t);
            assert_eq!(fx.particles.len(), EffectSettings::default().sphere_burst_particles);
        }
    }
    assert_eq!(bursts, 1);
    assert!(fx.spheres.is_empty());
    assert!(last_radius <= SPHERE_RADIUS_CEILING);
    let growth = SPHERE_RADIUS_CEILING - SPHERE_INITIAL_RADIUS;
    let expected = (growth / SPHERE_GROWTH_PER_TICK).floor() as usize;
    let t = burst_tick.expect("sphere never burst");
    assert!(t == expected || t == expected + 1, "burst at {}", t);
}

#[test]
fn one_active_charge_per_hand() {
    let mut fx = state();
    let mut r = rng();
    let charge = |owner| SpawnCommand::SphereCharge {
        center: Vec2::splat(0.5),
        owner,
    };
    assert!(fx.apply(&charge(HandId(0)), &mut r));
    assert!(!fx.apply(&charge(HandId(0)), &mut r));
    assert!(fx.apply(&charge(HandId(1)), &mut r));
    assert_eq!(fx.spheres.len(), 2);
    fx.follow_anchor(HandId(0), Vec2::new(0.1, 0.2));
    assert_eq!(fx.spheres[0].center, Vec2::new(0.1, 0.2));
    assert_eq!(fx.spheres[1].center, Vec2::splat(0.5));
}

#[test]
fn lightning_burst_reaches_the_far_side() {
    let mut fx = state();
    let mut r = rng();
    fx.apply(
        &SpawnCommand::LightningBurst {
            origin: Vec2::new(0.2, 0.5),
        },
        &mut r,
    );
    assert_eq!(fx.bolts.len(), EffectSettings::default().bolts_per_burst);
    for b in &fx.bolts {
        assert!(b.end.x >= LIGHTNING_FAR_SIDE_MIN);
        assert_eq!(b.life, LIGHTNING_LIFE);
    }
    for _ in 0..LIGHTNING_LIFE {
        tick(&mut fx, &mut r);
    }
    assert!(fx.bolts.is_empty());
}

#[test]
fn jagged_path_keeps_exact_endpoints() {
    let mut r = rng();
    let start = Vec2::new(0.1, 0.5);
    let end = Vec2::new(0.9, 0.3);
    let path = jagged_path(start, end, LIGHTNING_SEGMENTS, LIGHTNING_JITTER, &mut r);
    assert_eq!(path.len(), LIGHTNING_SEGMENTS + 1);
    assert_eq!(path[0], start);
    assert_eq!(path[LIGHTNING_SEGMENTS], end);
    let straight = jagged_path(start, end, 4, 0.0, &mut r);
    assert!((straight[2] - start.lerp(end, 0.5)).length() < 1e-6);
}

#[test]
fn arrow_flies_across_and_expires() {
    let mut r = rng();
    let mut arrow = ArrowShot::aimed_across(Vec2::new(0.3, 0.5), &mut r);
    assert_eq!(arrow.end.x, 1.0);
    assert!((arrow.end.y - 0.5).abs() <= ARROW_VERTICAL_DEVIATION + 1e-6);
    let mut last = 0.0;
    while arrow.is_alive() {
        let p = arrow.progress();
        assert!(p > last && p <= 1.0);
        last = p;
        arrow.step();
    }
    assert_eq!(last, 1.0);
}

#[test]
fn heart_burst_uses_fixed_count() {
    let mut fx = state();
    let mut r = rng();
    fx.apply(
        &SpawnCommand::HeartBurst {
            center: Vec2::splat(0.5),
        },
        &mut r,
    );
    assert_eq!(fx.particles.len(), HEART_BURST_PARTICLES);
    assert!(!fx.apply(&SpawnCommand::CyclePalette, &mut r));
}

#[test]
fn trail_evicts_by_capacity_or_expiry() {
    let mut trail = Trail::new(3);
    for i in 0..5 {
        trail.push(Vec2::new(i as f32 * 0.1, 0.5));
    }
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.iter().next().map(|p| p.position.x), Some(0.2));

    let mut aging = Trail::new(100);
    aging.push(Vec2::ZERO);
    for _ in 1..TRAIL_POINT_LIFE {
        aging.age();
        assert_eq!(aging.len(), 1);
    }
    aging.age();
    assert!(aging.is_empty());
    assert_eq!(aging.capacity(), 100);
}

#[test]
fn advance_reports_expired_entities() {
    let mut fx = state();
    let mut r = rng();
    fx.bolts.push(LightningBolt::new(Vec2::ZERO, Vec2::ONE, 1));
    fx.arrows.push(ArrowShot::new(Vec2::ZERO, Vec2::ONE, 2));
    let report = fx.advance([Vec2::splat(0.5)], palette(0), &mut r);
    assert_eq!(report.expired, 1);
    assert_eq!(fx.live_count(), 2);
    fx.clear();
    assert!(fx.is_empty());
}

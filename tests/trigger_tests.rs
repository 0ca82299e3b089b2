// Host-side tests for rising-edge spawn triggering.

mod support;

use hands_core::landmarks::{HandId, WRIST};
use hands_core::trigger::{on_frame, GestureTracker, HandAnchors};
use hands_core::{classify, Gesture, SpawnCommand};
use support::*;

fn step(
    tracker: &mut GestureTracker,
    id: HandId,
    current: Option<Gesture>,
    anchors: &HandAnchors,
) -> usize {
    let previous = tracker.observe(id, current);
    on_frame(id, current, previous, anchors).len()
}

#[test]
fn fist_fires_lightning_once_then_nothing() {
    let hand = fist_hand();
    let anchors = HandAnchors::of(&hand);
    let first = on_frame(HandId(0), Some(Gesture::Fist), None, &anchors);
    assert_eq!(
        first.as_slice(),
        &[SpawnCommand::LightningBurst {
            origin: hand.point(WRIST)
        }]
    );
    let next = on_frame(HandId(0), Some(Gesture::Fist), Some(Gesture::Fist), &anchors);
    assert!(next.is_empty());
}

#[test]
fn held_pose_spawns_exactly_once_for_any_duration() {
    let anchors = HandAnchors::of(&peace_hand());
    for frames in [1, 2, 30, 240] {
        let mut tracker = GestureTracker::new();
        let fired: usize = (0..frames)
            .map(|_| step(&mut tracker, HandId(0), Some(Gesture::Peace), &anchors))
            .sum();
        assert_eq!(fired, 1, "held for {} frames", frames);
    }
}

#[test]
fn releasing_and_repeating_fires_again() {
    let anchors = HandAnchors::of(&fist_hand());
    let mut tracker = GestureTracker::new();
    let pattern = [
        Some(Gesture::Fist),
        Some(Gesture::Fist),
        None,
        Some(Gesture::Fist),
        Some(Gesture::Open),
        Some(Gesture::Fist),
    ];
    let fired: Vec<usize> = pattern
        .iter()
        .map(|&g| step(&mut tracker, HandId(0), g, &anchors))
        .collect();
    assert_eq!(fired, vec![1, 0, 0, 1, 1, 1]);
}

#[test]
fn peace_aims_an_arrow_from_the_wrist() {
    let hand = peace_hand();
    let spawns = on_frame(HandId(0), classify(&hand), None, &HandAnchors::of(&hand));
    assert_eq!(
        spawns.as_slice(),
        &[SpawnCommand::Arrow {
            origin: hand.point(WRIST)
        }]
    );
}

#[test]
fn sphere_charge_is_owned_by_its_hand() {
    let hand = sphere_hand();
    let anchors = HandAnchors::of(&hand);
    match on_frame(HandId(1), Some(Gesture::Sphere), None, &anchors).as_slice() {
        [SpawnCommand::SphereCharge { center, owner }] => {
            assert_eq!(*owner, HandId(1));
            assert_eq!(*center, anchors.palm);
        }
        other => panic!("unexpected spawns {:?}", other),
    }
}

#[test]
fn open_and_heart_map_to_palette_and_burst() {
    let anchors = HandAnchors::of(&heart_hand());
    assert_eq!(
        on_frame(HandId(0), Some(Gesture::Open), None, &anchors).as_slice(),
        &[SpawnCommand::CyclePalette]
    );
    assert_eq!(
        on_frame(HandId(0), Some(Gesture::Heart), None, &anchors).as_slice(),
        &[SpawnCommand::HeartBurst {
            center: anchors.pinch
        }]
    );
}

#[test]
fn hands_keep_independent_history() {
    let anchors = HandAnchors::of(&fist_hand());
    let mut tracker = GestureTracker::new();
    assert_eq!(step(&mut tracker, HandId(0), Some(Gesture::Fist), &anchors), 1);
    assert_eq!(step(&mut tracker, HandId(1), Some(Gesture::Fist), &anchors), 1);
    assert_eq!(step(&mut tracker, HandId(0), Some(Gesture::Fist), &anchors), 0);
    assert_eq!(tracker.previous(HandId(1)), Some(Gesture::Fist));
    tracker.clear();
    assert_eq!(tracker.previous(HandId(0)), None);
}

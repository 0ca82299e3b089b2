use crate::constants::{TRAIL_POINT_LIFE, TRAIL_POINT_SIZE};
use glam::Vec2;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub life: u32,
    pub size: f32,
}

impl TrailPoint {
    #[inline]
    pub fn fade(&self) -> f32 {
        self.life as f32 / TRAIL_POINT_LIFE as f32
    }
}

/// Bounded motion trail. A point leaves when its life runs out or when newer
/// samples push it past `capacity`, whichever happens first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: Vec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint {
            position,
            life: TRAIL_POINT_LIFE,
            size: TRAIL_POINT_SIZE,
        });
    }

    pub fn age(&mut self) {
        for p in &mut self.points {
            p.life = p.life.saturating_sub(1);
        }
        self.points.retain(|p| p.life > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

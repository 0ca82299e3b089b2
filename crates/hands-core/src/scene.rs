//! Read-only conversion of a session into draw operations.
//!
//! Positions stay normalized; the renderer scales them to the canvas. Sizes
//! named `*_px` are absolute pixels, everything else is a fraction of the
//! frame height.

use crate::constants::{
    ARROW_HEAD_LENGTH, CONNECTOR_WIDTH_PX, EFFECT_LINE_WIDTH_PX, LANDMARK_GLOW_RADIUS_PX,
    LANDMARK_RADIUS_PX,
};
use crate::landmarks::{HAND_CONNECTIONS, WRIST};
use crate::palette::Rgba;
use crate::session::RenderSession;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line {
        from: Vec2,
        to: Vec2,
        width_px: f32,
        color: Rgba,
    },
    Polyline {
        points: SmallVec<[Vec2; 16]>,
        width_px: f32,
        color: Rgba,
        glow_px: f32,
    },
    /// Filled circle with radius in pixels.
    Dot {
        at: Vec2,
        radius_px: f32,
        color: Rgba,
    },
    /// Radial gradient halo around a point.
    Halo {
        at: Vec2,
        radius_px: f32,
        inner: Rgba,
        outer: Rgba,
    },
    /// Filled circle with radius relative to frame height.
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow_px: f32,
    },
    Ring {
        center: Vec2,
        radius: f32,
        width_px: f32,
        color: Rgba,
        glow_px: f32,
    },
    Label {
        at: Vec2,
        text: &'static str,
        color: Rgba,
    },
}

const GLOW_PX: f32 = 20.0;

/// Build the frame's draw list: hand overlay first, then effects on top.
/// `jitter` only feeds drawing-time randomness (lightning flicker).
pub fn build<R: Rng + ?Sized>(session: &RenderSession, jitter: &mut R) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let palette = session.palette();
    let glow = if session.glow() { GLOW_PX } else { 0.0 };

    if session.overlay_visible() {
        for (slot, hand) in session.hands().iter().enumerate() {
            for &(a, b) in HAND_CONNECTIONS.iter() {
                ops.push(DrawOp::Line {
                    from: hand.point(a),
                    to: hand.point(b),
                    width_px: CONNECTOR_WIDTH_PX,
                    color: palette.connector,
                });
            }
            for lm in hand.landmarks.iter() {
                ops.push(DrawOp::Dot {
                    at: lm.xy(),
                    radius_px: LANDMARK_RADIUS_PX,
                    color: palette.landmark,
                });
                if session.glow() {
                    ops.push(DrawOp::Halo {
                        at: lm.xy(),
                        radius_px: LANDMARK_GLOW_RADIUS_PX,
                        inner: palette.glow.with_alpha(0.8),
                        outer: palette.connector.with_alpha(0.0),
                    });
                }
            }
            if let Some(Some(gesture)) = session.gestures().get(slot) {
                ops.push(DrawOp::Label {
                    at: hand.point(WRIST) + Vec2::new(0.0, 0.04),
                    text: gesture.label(),
                    color: palette.connector,
                });
            }
        }
    }

    let effects = session.effects();

    for p in effects.trail.iter() {
        ops.push(DrawOp::Disc {
            center: p.position,
            radius: p.size * p.fade(),
            color: palette.trail.with_alpha(p.fade()),
            glow_px: 0.0,
        });
    }

    for s in &effects.spheres {
        ops.push(DrawOp::Disc {
            center: s.center,
            radius: s.radius,
            color: palette.sphere.with_alpha(0.15 + 0.35 * s.charge()),
            glow_px: glow,
        });
        ops.push(DrawOp::Ring {
            center: s.center,
            radius: s.radius,
            width_px: EFFECT_LINE_WIDTH_PX,
            color: palette.sphere,
            glow_px: glow,
        });
    }

    for b in &effects.bolts {
        ops.push(DrawOp::Polyline {
            points: b.path(jitter),
            width_px: EFFECT_LINE_WIDTH_PX,
            color: palette.lightning.with_alpha(b.fade()),
            glow_px: glow,
        });
    }

    for a in &effects.arrows {
        let head = a.head();
        let dir = a.direction();
        let tail = head - dir * ARROW_HEAD_LENGTH * 3.0;
        let barb = dir.perp() * ARROW_HEAD_LENGTH * 0.5;
        let back = head - dir * ARROW_HEAD_LENGTH;
        ops.push(DrawOp::Line {
            from: tail,
            to: head,
            width_px: EFFECT_LINE_WIDTH_PX,
            color: palette.arrow,
        });
        let mut barbs = SmallVec::new();
        barbs.push(back + barb);
        barbs.push(head);
        barbs.push(back - barb);
        ops.push(DrawOp::Polyline {
            points: barbs,
            width_px: EFFECT_LINE_WIDTH_PX,
            color: palette.arrow,
            glow_px: glow,
        });
    }

    for p in &effects.particles {
        ops.push(DrawOp::Disc {
            center: p.position,
            radius: p.size,
            color: p.color.with_alpha(p.fade()),
            glow_px: 0.0,
        });
    }

    ops
}

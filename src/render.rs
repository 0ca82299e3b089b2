//! Canvas2D backend: draws the mirrored camera frame and executes the
//! [`DrawOp`] list built by `hands_core::scene`.

use crate::constants::{HALO_SHADOW_PX, LABEL_FONT, LABEL_OFFSET_PX, LABEL_SHADOW_PX};
use glam::Vec2;
use hands_core::palette::Rgba;
use hands_core::DrawOp;
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: 1.0,
            height: 1.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1) as f64;
        self.height = height.max(1) as f64;
    }

    #[inline]
    fn px(&self, p: Vec2) -> (f64, f64) {
        (p.x as f64 * self.width, p.y as f64 * self.height)
    }

    /// Camera frame, flipped horizontally when `mirror` is set.
    pub fn draw_video(&self, video: &web::HtmlVideoElement, mirror: bool) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        if mirror {
            _ = ctx.translate(self.width, 0.0);
            _ = ctx.scale(-1.0, 1.0);
        }
        if let Err(e) = ctx.draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            self.width,
            self.height,
        ) {
            log::debug!("[render] video frame not ready: {:?}", e);
        }
        ctx.restore();
    }

    pub fn draw(&self, ops: &[DrawOp]) {
        for op in ops {
            self.ctx.save();
            self.draw_op(op);
            self.ctx.restore();
        }
    }

    fn glow(&self, color: &Rgba, blur_px: f32) {
        if blur_px > 0.0 {
            self.ctx.set_shadow_color(&color.to_css());
            self.ctx.set_shadow_blur(blur_px as f64);
        }
    }

    fn draw_op(&self, op: &DrawOp) {
        let ctx = &self.ctx;
        match op {
            DrawOp::Line {
                from,
                to,
                width_px,
                color,
            } => {
                let (x0, y0) = self.px(*from);
                let (x1, y1) = self.px(*to);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width_px as f64);
                ctx.set_line_cap("round");
                ctx.begin_path();
                ctx.move_to(x0, y0);
                ctx.line_to(x1, y1);
                ctx.stroke();
            }
            DrawOp::Polyline {
                points,
                width_px,
                color,
                glow_px,
            } => {
                let mut it = points.iter();
                let Some(first) = it.next() else { return };
                self.glow(color, *glow_px);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width_px as f64);
                ctx.set_line_join("round");
                ctx.begin_path();
                let (x, y) = self.px(*first);
                ctx.move_to(x, y);
                for p in it {
                    let (x, y) = self.px(*p);
                    ctx.line_to(x, y);
                }
                ctx.stroke();
            }
            DrawOp::Dot {
                at,
                radius_px,
                color,
            } => {
                let (x, y) = self.px(*at);
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                _ = ctx.arc(x, y, *radius_px as f64, 0.0, TAU);
                ctx.fill();
            }
            DrawOp::Halo {
                at,
                radius_px,
                inner,
                outer,
            } => {
                let (x, y) = self.px(*at);
                let r = *radius_px as f64;
                let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
                    return;
                };
                _ = gradient.add_color_stop(0.0, &inner.to_css());
                _ = gradient.add_color_stop(1.0, &outer.to_css());
                ctx.set_fill_style_canvas_gradient(&gradient);
                self.glow(inner, HALO_SHADOW_PX);
                ctx.begin_path();
                _ = ctx.arc(x, y, r, 0.0, TAU);
                ctx.fill();
            }
            DrawOp::Disc {
                center,
                radius,
                color,
                glow_px,
            } => {
                let (x, y) = self.px(*center);
                self.glow(color, *glow_px);
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                _ = ctx.arc(x, y, (*radius as f64 * self.height).max(0.5), 0.0, TAU);
                ctx.fill();
            }
            DrawOp::Ring {
                center,
                radius,
                width_px,
                color,
                glow_px,
            } => {
                let (x, y) = self.px(*center);
                self.glow(color, *glow_px);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width_px as f64);
                ctx.begin_path();
                _ = ctx.arc(x, y, (*radius as f64 * self.height).max(0.5), 0.0, TAU);
                ctx.stroke();
            }
            DrawOp::Label { at, text, color } => {
                let (x, y) = self.px(*at);
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align("center");
                ctx.set_shadow_color(&color.to_css());
                ctx.set_shadow_blur(LABEL_SHADOW_PX);
                ctx.set_fill_style_str(&color.to_css());
                _ = ctx.fill_text(text, x, y + LABEL_OFFSET_PX);
            }
        }
    }
}

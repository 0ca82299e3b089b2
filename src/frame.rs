use crate::constants::{DT_CLAMP_SEC, FPS_LOG_INTERVAL_SEC};
use crate::hands::HandTracker;
use crate::render::CanvasRenderer;
use crate::{dom, overlay};
use hands_core::{scene, HandInput, LatestSlot, RenderSession};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: RenderSession,
    pub renderer: CanvasRenderer,
    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
    pub mirror: bool,

    /// `None` when the model failed to load; the loop then shows the raw feed.
    pub tracker: Option<HandTracker>,
    pub results: LatestSlot<HandInput>,
    pub jitter: StdRng,

    pub last_instant: Instant,
    pub fps_window_sec: f32,
    pub fps_frames: u32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(DT_CLAMP_SEC);
        self.last_instant = now;
        self.report_rate(dt_sec);

        if dom::sync_canvas_to_video(&self.canvas, &self.video) {
            self.renderer.resize(self.canvas.width(), self.canvas.height());
            log::info!(
                "[frame] canvas {}x{}",
                self.canvas.width(),
                self.canvas.height()
            );
        }
        self.renderer.draw_video(&self.video, self.mirror);

        let Some(tracker) = &self.tracker else {
            return;
        };
        tracker.submit(&self.video);

        let input = self.results.take().unwrap_or(HandInput::Pending);
        let report = self.session.tick(input);
        if !report.spawned.is_empty() {
            log::info!("[frame] spawned {:?}", report.spawned);
        }
        if report.advance.sphere_bursts > 0 {
            log::debug!("[frame] {} sphere burst(s)", report.advance.sphere_bursts);
        }

        let ops = scene::build(&self.session, &mut self.jitter);
        self.renderer.draw(&ops);
    }

    fn report_rate(&mut self, dt_sec: f32) {
        self.fps_window_sec += dt_sec;
        self.fps_frames += 1;
        if self.fps_window_sec >= FPS_LOG_INTERVAL_SEC {
            log::info!(
                "[frame] {:.1} fps, {} live effects",
                self.fps_frames as f32 / self.fps_window_sec,
                self.session.effects().live_count()
            );
            self.fps_window_sec = 0.0;
            self.fps_frames = 0;
        }
    }

    pub fn cycle_palette(&mut self) {
        self.session.cycle_palette();
        if let Some(document) = dom::window_document() {
            overlay::update_hint(&document, self.session.palette().name);
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        log::info!("[frame] session reset");
    }
}

/// Handle to a running animation-frame loop. Dropping it stops the loop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's self-reference so it can be freed.
        self._tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    let handle = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));

    FrameLoop {
        running,
        handle,
        _tick: tick,
    }
}

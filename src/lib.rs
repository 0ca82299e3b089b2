#![cfg(target_arch = "wasm32")]
use hands_core::{AppConfig, HandInput, LatestSlot, RenderSession, SessionSettings, SnapshotTarget};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod hands;
mod overlay;
mod render;
mod snapshot;

use constants::{CANVAS_ID, CONFIG_SCRIPT_ID, VIDEO_ID};

/// Everything that must be released when the page goes away.
struct App {
    frame_loop: frame::FrameLoop,
    snapshots: Option<snapshot::SnapshotTimer>,
    camera: camera::CameraStream,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
}

impl App {
    /// Stop drawing, close the model, stop uploads, then release the camera.
    fn shutdown(self) {
        let App {
            frame_loop,
            snapshots,
            camera,
            frame_ctx,
        } = self;
        drop(frame_loop);
        // The tracker closes its model on drop.
        frame_ctx.borrow_mut().tracker.take();
        drop(snapshots);
        drop(camera);
        log::info!(
            "[app] shut down after {} ticks",
            frame_ctx.borrow().session.ticks()
        );
    }
}

fn load_config(window: &web::Window, document: &web::Document) -> AppConfig {
    let profile = dom::detect_profile(window);
    let json = dom::config_json(document, CONFIG_SCRIPT_ID);
    match AppConfig::resolve(profile, json.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using {:?} defaults", e, profile);
            AppConfig::for_profile(profile)
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-hands starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let video: web::HtmlVideoElement = dom::element_by_id(&document, VIDEO_ID)?;
    let config = load_config(&window, &document);
    log::info!(
        "[config] {:?} {}x{}@{} hands={} uploads={}",
        config.profile,
        config.capture_width,
        config.capture_height,
        config.capture_fps,
        config.max_hands,
        config.upload_enabled()
    );

    let camera = match camera::open(&window, &video, &config).await {
        Ok(c) => c,
        Err(e) => {
            overlay::show_status(&document, &e.user_message());
            log::error!("[camera] {} ({:?})", e, e.recovery());
            return Ok(());
        }
    };
    overlay::hide_status(&document);

    let results: LatestSlot<HandInput> = LatestSlot::new();
    let tracker = match hands::HandTracker::new(&config, results.clone()) {
        Ok(t) => Some(t),
        Err(e) => {
            overlay::show_status(&document, &e.user_message());
            log::warn!("[hands] {} ({:?})", e, e.recovery());
            None
        }
    };

    let session = RenderSession::new(SessionSettings::from(&config), rand::random());
    overlay::update_hint(&document, session.palette().name);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        renderer: render::CanvasRenderer::new(dom::context_2d(&canvas)?),
        canvas: canvas.clone(),
        video: camera.video().clone(),
        mirror: config.mirror,
        tracker,
        results,
        jitter: StdRng::from_entropy(),
        last_instant: Instant::now(),
        fps_window_sec: 0.0,
        fps_frames: 0,
    }));
    let frame_loop = frame::start_loop(frame_ctx.clone());

    let snapshots = match SnapshotTarget::from_config(&config) {
        Some(target) => {
            log::info!("[snapshot] posting to {}", target.redacted_url());
            match snapshot::start(
                &window,
                canvas,
                target,
                config.upload_period_ms,
                config.jpeg_quality,
            ) {
                Ok(timer) => Some(timer),
                Err(e) => {
                    log::warn!("[snapshot] disabled: {:?}", e);
                    None
                }
            }
        }
        None => {
            log::info!("[snapshot] no bot token/chat id; uploads off");
            None
        }
    };

    let app = Rc::new(RefCell::new(Some(App {
        frame_loop,
        snapshots,
        camera,
        frame_ctx: frame_ctx.clone(),
    })));
    let stop = {
        let app = app.clone();
        move || {
            if let Some(app) = app.borrow_mut().take() {
                app.shutdown();
            }
        }
    };
    events::wire_global_keydown(frame_ctx, {
        let stop = stop.clone();
        move || {
            stop();
            if let Some(document) = dom::window_document() {
                overlay::show_status(&document, "Stopped. Reload to start again.");
            }
        }
    });
    events::wire_pagehide(stop);

    Ok(())
}

//! Periodic JPEG snapshots of the composited canvas, posted as multipart
//! form data. Uploads are fire-and-forget: failures are logged and the next
//! period simply tries again.

use crate::constants::{SNAPSHOT_QUALITY_MAX, SNAPSHOT_QUALITY_MIN};
use hands_core::upload::{CHAT_FIELD, PHOTO_FIELD, SNAPSHOT_FILENAME, SNAPSHOT_MIME};
use hands_core::{Error, SnapshotTarget, UploadStats};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Interval timer handle. Dropping it clears the interval.
pub struct SnapshotTimer {
    interval_id: i32,
    stats: Rc<UploadStats>,
    _tick: Closure<dyn FnMut()>,
}

impl Drop for SnapshotTimer {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.interval_id);
        }
        log::info!(
            "[snapshot] stopped: {} sent, {} ok, {} failed, {} in flight",
            self.stats.started(),
            self.stats.succeeded(),
            self.stats.failed(),
            self.stats.in_flight()
        );
    }
}

pub fn start(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    target: SnapshotTarget,
    period_ms: u32,
    quality: f32,
) -> anyhow::Result<SnapshotTimer> {
    let target = Rc::new(target);
    let stats = Rc::new(UploadStats::new());
    let quality = (quality as f64).clamp(SNAPSHOT_QUALITY_MIN, SNAPSHOT_QUALITY_MAX);
    let timeout = i32::try_from(period_ms)
        .map_err(|_| anyhow::anyhow!("snapshot period {} ms out of range", period_ms))?;

    let tick = {
        let stats = stats.clone();
        Closure::wrap(Box::new(move || {
            capture(&canvas, quality, target.clone(), stats.clone());
        }) as Box<dyn FnMut()>)
    };
    let interval_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            timeout,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    log::info!("[snapshot] every {} ms", period_ms);

    Ok(SnapshotTimer {
        interval_id,
        stats,
        _tick: tick,
    })
}

/// Encode the canvas asynchronously; the blob callback starts the upload.
fn capture(
    canvas: &web::HtmlCanvasElement,
    quality: f64,
    target: Rc<SnapshotTarget>,
    stats: Rc<UploadStats>,
) {
    let on_blob = Closure::once_into_js(move |blob: Option<web::Blob>| {
        let Some(blob) = blob else {
            log::warn!("[snapshot] canvas produced no image");
            return;
        };
        spawn_local(async move {
            let id = stats.begin();
            let result = upload(&target, &blob).await;
            stats.finish(result.is_ok());
            if let Err(e) = result {
                log::warn!("[snapshot] #{} {}", id, e);
            } else {
                log::debug!("[snapshot] #{} delivered", id);
            }
        });
    });
    if let Err(e) = canvas.to_blob_with_type_and_encoder_options(
        on_blob.unchecked_ref(),
        SNAPSHOT_MIME,
        &JsValue::from_f64(quality),
    ) {
        // Tainted canvases refuse to encode.
        log::warn!("[snapshot] encode failed: {:?}", e);
    }
}

async fn upload(target: &SnapshotTarget, blob: &web::Blob) -> hands_core::Result<()> {
    let err = |e: JsValue| Error::Upload(format!("{:?}", e));
    let window = web::window().ok_or_else(|| Error::Upload("no window".into()))?;

    let form = web::FormData::new().map_err(err)?;
    form.append_with_str(CHAT_FIELD, &target.chat_id)
        .map_err(err)?;
    form.append_with_blob_and_filename(PHOTO_FIELD, blob, SNAPSHOT_FILENAME)
        .map_err(err)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let response: web::Response = JsFuture::from(
        window.fetch_with_str_and_init(&target.send_photo_url(), &init),
    )
    .await
    .map_err(err)?
    .dyn_into()
    .map_err(err)?;

    if !response.ok() {
        return Err(Error::Upload(format!(
            "{} answered {}",
            target.redacted_url(),
            response.status()
        )));
    }
    Ok(())
}

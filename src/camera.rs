use hands_core::{AppConfig, Error};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Live webcam stream attached to the hidden video element. Dropping it
/// stops every track and releases the camera.
pub struct CameraStream {
    stream: web::MediaStream,
    video: web::HtmlVideoElement,
}

impl CameraStream {
    pub fn video(&self) -> &web::HtmlVideoElement {
        &self.video
    }

    pub fn stop(&self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                track.stop();
            }
        }
        self.video.set_src_object(None);
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        self.stop();
        log::info!("[camera] stopped");
    }
}

fn capture(e: JsValue) -> Error {
    Error::CaptureUnavailable(format!("{:?}", e))
}

fn video_constraints(config: &AppConfig) -> Result<JsValue, JsValue> {
    let ideal = |v: u32| -> Result<JsValue, JsValue> {
        let o = Object::new();
        Reflect::set(&o, &"ideal".into(), &JsValue::from(v))?;
        Ok(o.into())
    };
    let video = Object::new();
    Reflect::set(&video, &"width".into(), &ideal(config.capture_width)?)?;
    Reflect::set(&video, &"height".into(), &ideal(config.capture_height)?)?;
    Reflect::set(&video, &"frameRate".into(), &ideal(config.capture_fps)?)?;
    Reflect::set(&video, &"facingMode".into(), &"user".into())?;
    Ok(video.into())
}

/// Ask for the camera and start playback into `video`. Permission denial or
/// a missing device surfaces as [`Error::CaptureUnavailable`].
pub async fn open(
    window: &web::Window,
    video: &web::HtmlVideoElement,
    config: &AppConfig,
) -> hands_core::Result<CameraStream> {
    let devices = window.navigator().media_devices().map_err(capture)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    constraints.set_video(&video_constraints(config).map_err(capture)?);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(capture)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(capture)?
        .dyn_into()
        .map_err(capture)?;

    video.set_muted(true);
    _ = video.set_attribute("playsinline", "");
    video.set_src_object(Some(&stream));
    let camera = CameraStream {
        stream,
        video: video.clone(),
    };
    // Drop on the error path releases the tracks.
    let play = camera.video.play().map_err(capture)?;
    JsFuture::from(play).await.map_err(capture)?;
    log::info!(
        "[camera] streaming {}x{}",
        camera.video.video_width(),
        camera.video.video_height()
    );
    Ok(camera)
}

use hands_core::DeviceProfile;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Text of the inline JSON config block, if the page has one.
pub fn config_json(document: &web::Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|el| el.text_content())
}

pub fn detect_profile(window: &web::Window) -> DeviceProfile {
    let navigator = window.navigator();
    let cores = navigator.hardware_concurrency() as u32;
    let ua = navigator.user_agent().unwrap_or_default();
    DeviceProfile::detect(cores, &ua)
}

/// Match the canvas backing store to the video's native resolution so
/// landmark coordinates map 1:1 onto captured pixels. Returns true when the
/// size changed.
pub fn sync_canvas_to_video(
    canvas: &web::HtmlCanvasElement,
    video: &web::HtmlVideoElement,
) -> bool {
    let (w, h) = (video.video_width(), video.video_height());
    if w == 0 || h == 0 || (canvas.width() == w && canvas.height() == h) {
        return false;
    }
    canvas.set_width(w);
    canvas.set_height(h);
    true
}

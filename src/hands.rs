//! Bindings to the MediaPipe Hands solution loaded from the CDN script tag.
//!
//! Results arrive on a JS callback; they are flattened, parsed into
//! [`HandSet`]s and dropped into a [`LatestSlot`] that the frame loop drains.

use crate::constants::MEDIAPIPE_CDN;
use hands_core::landmarks::{FLOATS_PER_LANDMARK, LANDMARK_COUNT};
use hands_core::{parse_flat_hands, AppConfig, Error, HandInput, HandSet, LatestSlot};
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Hands)]
    type MpHands;

    #[wasm_bindgen(constructor, js_class = "Hands", catch)]
    fn new(config: &JsValue) -> Result<MpHands, JsValue>;

    #[wasm_bindgen(method, js_name = setOptions)]
    fn set_options(this: &MpHands, options: &JsValue);

    #[wasm_bindgen(method, js_name = onResults)]
    fn on_results(this: &MpHands, callback: &js_sys::Function);

    #[wasm_bindgen(method, catch)]
    fn send(this: &MpHands, inputs: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &MpHands) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackerOptions {
    max_num_hands: usize,
    model_complexity: u8,
    min_detection_confidence: f32,
    min_tracking_confidence: f32,
    self_mode: bool,
}

impl From<&AppConfig> for TrackerOptions {
    fn from(c: &AppConfig) -> Self {
        Self {
            max_num_hands: c.max_hands,
            model_complexity: c.model_complexity,
            min_detection_confidence: c.min_detection_confidence,
            min_tracking_confidence: c.min_tracking_confidence,
            // Mirroring is applied to landmarks on our side.
            self_mode: false,
        }
    }
}

pub struct HandTracker {
    hands: MpHands,
    busy: Rc<Cell<bool>>,
    slot: LatestSlot<HandInput>,
    _locate: Closure<dyn Fn(String) -> String>,
    _results: Closure<dyn FnMut(JsValue)>,
}

fn tracker_err(e: JsValue) -> Error {
    Error::TrackerUnavailable(format!("{:?}", e))
}

impl HandTracker {
    /// Construct the model. Fails with [`Error::TrackerUnavailable`] when the
    /// script never loaded or the constructor throws.
    pub fn new(config: &AppConfig, slot: LatestSlot<HandInput>) -> hands_core::Result<Self> {
        let locate = Closure::wrap(
            Box::new(|file: String| format!("{}{}", MEDIAPIPE_CDN, file))
                as Box<dyn Fn(String) -> String>,
        );
        let init = Object::new();
        Reflect::set(&init, &"locateFile".into(), locate.as_ref()).map_err(tracker_err)?;
        let hands = MpHands::new(&init).map_err(tracker_err)?;

        let options = serde_json::to_string(&TrackerOptions::from(config))
            .map_err(|e| Error::TrackerUnavailable(e.to_string()))?;
        hands.set_options(&js_sys::JSON::parse(&options).map_err(tracker_err)?);

        let busy = Rc::new(Cell::new(false));
        let results = {
            let slot = slot.clone();
            let busy = busy.clone();
            let max_hands = config.max_hands;
            let mirror = config.mirror;
            Closure::wrap(Box::new(move |results: JsValue| {
                busy.set(false);
                let input = match read_results(&results, max_hands, mirror) {
                    Ok(hands) => HandInput::Fresh(hands),
                    Err(e) => {
                        log::warn!("[hands] {}", e);
                        HandInput::Failed
                    }
                };
                if slot.put(input).is_some() {
                    log::debug!("[hands] result replaced before the frame loop read it");
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        hands.on_results(results.as_ref().unchecked_ref());

        log::info!(
            "[hands] model ready: max_hands={} complexity={}",
            config.max_hands,
            config.model_complexity
        );
        Ok(Self {
            hands,
            busy,
            slot,
            _locate: locate,
            _results: results,
        })
    }

    /// Submit the current video frame unless a detection is still running.
    /// Returns false when the frame was skipped.
    pub fn submit(&self, video: &web::HtmlVideoElement) -> bool {
        if self.busy.get() || video.video_width() == 0 {
            return false;
        }
        let inputs = Object::new();
        if Reflect::set(&inputs, &"image".into(), video).is_err() {
            return false;
        }
        let promise = match self.hands.send(&inputs) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[hands] send failed: {:?}", e);
                self.slot.put(HandInput::Failed);
                return false;
            }
        };
        self.busy.set(true);
        let busy = self.busy.clone();
        let slot = self.slot.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[hands] detection failed: {:?}", e);
                busy.set(false);
                slot.put(HandInput::Failed);
            }
        });
        true
    }
}

impl Drop for HandTracker {
    fn drop(&mut self) {
        if let Ok(p) = self.hands.close() {
            spawn_local(async move {
                _ = JsFuture::from(p).await;
            });
        }
        log::info!("[hands] closed");
    }
}

fn number(obj: &JsValue, key: &str) -> Option<f32> {
    Reflect::get(obj, &key.into()).ok()?.as_f64().map(|v| v as f32)
}

/// Flatten `results.multiHandLandmarks` into x,y,z triples and parse them.
fn read_results(results: &JsValue, max_hands: usize, mirror: bool) -> hands_core::Result<HandSet> {
    let list = Reflect::get(results, &"multiHandLandmarks".into())
        .map_err(|e| Error::FrameProcessing(format!("{:?}", e)))?;
    if list.is_undefined() || list.is_null() {
        return Ok(HandSet::new());
    }
    let list: Array = list
        .dyn_into()
        .map_err(|_| Error::FrameProcessing("multiHandLandmarks is not an array".into()))?;

    let num_hands = list.length() as usize;
    let mut flat = Vec::with_capacity(num_hands * LANDMARK_COUNT * FLOATS_PER_LANDMARK);
    for hand in list.iter() {
        let points: Array = hand
            .dyn_into()
            .map_err(|_| Error::FrameProcessing("hand landmarks are not an array".into()))?;
        for point in points.iter() {
            let (x, y) = match (number(&point, "x"), number(&point, "y")) {
                (Some(x), Some(y)) => (x, y),
                _ => return Err(Error::FrameProcessing("landmark without x/y".into())),
            };
            flat.extend_from_slice(&[x, y, number(&point, "z").unwrap_or(0.0)]);
        }
    }

    let hands = parse_flat_hands(&flat, num_hands, max_hands)?;
    Ok(if mirror {
        hands.iter().map(|h| h.mirrored()).collect()
    } else {
        hands
    })
}

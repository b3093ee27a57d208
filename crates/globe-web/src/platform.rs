use crate::constants::REDUCED_MOTION_QUERY;
use globe_core::Capabilities;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Reads the browser's capability hints.
///
/// `navigator.deviceMemory` is not in every engine (nor in web-sys), so it is
/// looked up reflectively.
pub fn probe_capabilities() -> Capabilities {
    let Some(window) = web::window() else {
        return Capabilities::default();
    };
    let navigator = window.navigator();

    let cores = Some(navigator.hardware_concurrency())
        .filter(|c| c.is_finite() && *c > 0.0)
        .map(|c| c as u32);

    let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|m| m as f32);

    let prefers_reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);

    Capabilities {
        cores,
        device_memory_gb,
        prefers_reduced_motion,
    }
}

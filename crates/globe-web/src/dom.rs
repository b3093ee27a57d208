use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use globe_core::{ScrollSample, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A window listener, detached again when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Viewport in CSS pixels, read fresh from the window.
pub fn viewport() -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    match web::window() {
        Some(w) => Viewport {
            width: read(w.inner_width()),
            height: read(w.inner_height()),
        },
        None => Viewport::default(),
    }
}

/// Current page scroll and header geometry.
pub fn scroll_sample(header: &web::HtmlElement) -> ScrollSample {
    let (scroll_y, viewport_height) = match web::window() {
        Some(w) => (
            w.scroll_y().unwrap_or(0.0) as f32,
            w.inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32,
        ),
        None => (0.0, 0.0),
    };
    let rect = header.get_bounding_client_rect();
    ScrollSample {
        scroll_y,
        header_bottom: rect.bottom() as f32,
        header_height: header.offset_height() as f32,
        viewport_height,
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

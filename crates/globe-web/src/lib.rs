#![cfg(target_arch = "wasm32")]
use globe_core::{
    resolve_point_count, Camera, FieldConfig, Lighting, ParticleField, ScrollConfig,
    ScrollTracker,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod platform;
mod render;
mod schedule;

thread_local! {
    // Keeps the auto-mounted globe (and its listener closures) alive
    static AUTO_MOUNTED: RefCell<Option<GlobeHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::CANVAS_ID))
        .is_some();
    if !has_canvas {
        log::info!(
            "no #{} on page; waiting for mount_globe()",
            constants::CANVAS_ID
        );
        return Ok(());
    }

    spawn_local(async move {
        match mount(constants::CANVAS_ID, constants::HEADER_ID).await {
            Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
    Ok(())
}

/// Mounts the globe on `canvas_id`, driven by scrolling past `header_id`.
#[wasm_bindgen]
pub async fn mount_globe(canvas_id: String, header_id: String) -> Result<GlobeHandle, JsValue> {
    mount(&canvas_id, &header_id)
        .await
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// A mounted globe; call `destroy()` (or `free()`) when the page section goes away.
#[wasm_bindgen]
pub struct GlobeHandle {
    frame_loop: Option<frame::FrameLoop>,
    listeners: Vec<dom::WindowListener>,
}

#[wasm_bindgen]
impl GlobeHandle {
    pub fn destroy(&mut self) {
        let was_mounted = self.frame_loop.is_some() || !self.listeners.is_empty();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        // listeners detach themselves on drop
        self.listeners.clear();
        if was_mounted {
            log::info!("[globe] destroyed");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(|l| l.is_running())
    }
}

impl Drop for GlobeHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

async fn mount(canvas_id: &str, header_id: &str) -> anyhow::Result<GlobeHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let header: web::HtmlElement = document
        .get_element_by_id(header_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{header_id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);

    let override_count =
        constants::parse_point_count(canvas.get_attribute(constants::POINT_COUNT_ATTR).as_deref());
    let caps = platform::probe_capabilities();
    let point_count = resolve_point_count(override_count, &caps);

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let config = FieldConfig::default()
        .with_point_count(point_count)
        .with_seed(seed);
    let field = ParticleField::new(config)?;

    let Some(gpu) = frame::init_gpu(&canvas, point_count, constants::CLEAR_COLOR).await else {
        log::warn!("[globe] no GPU; globe disabled");
        return Ok(GlobeHandle {
            frame_loop: None,
            listeners: Vec::new(),
        });
    };

    let scroll = Rc::new(RefCell::new(ScrollTracker::new(ScrollConfig::default())));
    let initial = scroll.borrow_mut().initial(dom::scroll_sample(&header));
    log::info!(
        "[globe] mounted on #{} points={} effect={:?}",
        canvas_id,
        point_count,
        initial.effect
    );

    let mut listeners = Vec::with_capacity(2);
    {
        let scroll = scroll.clone();
        let header = header.clone();
        listeners.extend(dom::WindowListener::add("scroll", move || {
            scroll.borrow_mut().update(dom::scroll_sample(&header));
        }));
    }
    {
        let scroll = scroll.clone();
        let canvas = canvas.clone();
        listeners.extend(dom::WindowListener::add("resize", move || {
            dom::sync_canvas_backing_size(&canvas);
            scroll.borrow_mut().update(dom::scroll_sample(&header));
        }));
    }

    let mut camera = Camera::default();
    camera.set_viewport(canvas.width(), canvas.height());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        scroll,
        canvas,
        gpu: Some(gpu),
        camera,
        lighting: Lighting::default(),
        last_instant: Instant::now(),
    }));

    Ok(GlobeHandle {
        frame_loop: Some(frame::start_loop(frame_ctx)),
        listeners,
    })
}

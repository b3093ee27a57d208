use crate::dom;
use crate::render;
use crate::schedule::LoopState;
use globe_core::{Camera, FrameInputs, Lighting, ParticleField, ScrollTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub scroll: Rc<RefCell<ScrollTracker>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub camera: Camera,
    pub lighting: Lighting,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_viewport(w, h);

        let scroll = self.scroll.borrow().state();
        let inputs = FrameInputs {
            effect: scroll.effect,
            scroll_progress: scroll.progress,
            scroll_offset: scroll.offset,
            viewport: dom::viewport(),
        };
        let out = self.field.step(dt_sec, &inputs);

        if let Some(g) = self.gpu.as_mut() {
            g.resize_if_needed(w, h);
            match g.render(&self.camera, &self.lighting, &out) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    point_count: usize,
    clear: [f64; 4],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, point_count, clear).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop; dropping it stops the loop.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
    tick: Tick,
}

impl FrameLoop {
    /// Cancels the pending frame and releases the self-referencing callback.
    pub fn stop(&self) {
        let pending = self.state.borrow_mut().stop();
        if let (Some(w), Some(id)) = (web::window(), pending) {
            let _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        !self.state.borrow().is_stopped()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(tick: &Tick, state: &Rc<RefCell<LoopState>>) {
    let Some(w) = web::window() else {
        return;
    };
    let Some(id) = tick
        .borrow()
        .as_ref()
        .and_then(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
    else {
        return;
    };
    if !state.borrow_mut().scheduled(id) {
        let _ = w.cancel_animation_frame(id);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let state = Rc::new(RefCell::new(LoopState::default()));

    let tick_clone = tick.clone();
    let state_tick = state.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !state_tick.borrow_mut().begin_tick() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &state_tick);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &state);

    FrameLoop { state, tick }
}

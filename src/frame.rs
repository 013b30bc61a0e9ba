use crate::dom;
use crate::render;
use folio_core::{Scene, SpriteInstance};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-canvas state advanced once per animation frame.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub instances: Vec<SpriteInstance>,
    pub last_instant: Instant,
    /// Payload to highlight, owned by a panel outside the scene.
    pub highlight: Option<Rc<Cell<Option<usize>>>>,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        gpu: Option<render::GpuState>,
        canvas: web::HtmlCanvasElement,
        highlight: Option<Rc<Cell<Option<usize>>>>,
    ) -> Self {
        Self {
            scene,
            gpu,
            canvas,
            instances: Vec::new(),
            last_instant: Instant::now(),
            highlight,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Container size can change without a window resize (reveal, layout)
        let size = dom::sync_canvas_backing_size(&self.canvas);
        {
            let mut scene = self.scene.borrow_mut();
            if let Some((w, h)) = size {
                scene.resize(w, h);
            }
            if let Some(h) = &self.highlight {
                scene.highlight_payload(h.get());
            }
            scene.tick(dt_sec);
            self.instances.clear();
            scene.write_instances(&mut self.instances);
        }

        // Hidden or collapsed container: keep simulating, skip drawing
        let Some((w, h)) = size else {
            return;
        };
        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(w, h);
        let scene = self.scene.borrow();
        match g.render(scene.camera(), &self.instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(wgpu::SurfaceError::Timeout) => log::debug!("[host] frame timeout"),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Drop GPU resources and per-frame buffers.
    pub fn release(&mut self) {
        self.gpu = None;
        self.instances = Vec::new();
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    dom::sync_canvas_backing_size(canvas);
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that can be cancelled from outside.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            frame_ctx.borrow_mut().frame();
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&tick));
        Self { handle, tick }
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Cancel the pending frame and drop the callback. No frame runs afterwards.
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference so it and its context can be freed
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let cb = guard.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

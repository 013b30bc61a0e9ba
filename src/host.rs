//! Scene Host: one canvas, one simulation and one frame loop bound to a container element.

use crate::dom::{self, EventListener};
use crate::events::{self, PickCallback, SceneWiring};
use crate::frame::{self, FrameContext, FrameLoop};
use folio_core::{Scene, SceneConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Optional page integration for a mounted scene.
#[derive(Default, Clone)]
pub struct Hooks {
    pub on_pick: Option<PickCallback>,
    pub highlight: Option<Rc<Cell<Option<usize>>>>,
}

pub struct SceneHost {
    container_id: String,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<EventListener>,
}

impl SceneHost {
    pub async fn mount(
        container: &web::Element,
        config: SceneConfig,
        hooks: Hooks,
    ) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let preset_objects = config.object_count;
        let scene = Rc::new(RefCell::new(Scene::new(config)));
        if let Some((w, h)) = dom::sync_canvas_backing_size(&canvas) {
            scene.borrow_mut().resize(w, h);
        }

        // No WebGPU: the scene still mounts and simulates, it just draws nothing
        let gpu = frame::init_gpu(&canvas).await;
        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
            scene.clone(),
            gpu,
            canvas.clone(),
            hooks.highlight,
        )));
        let listeners = events::wire_scene_events(&SceneWiring {
            canvas: canvas.clone(),
            scene,
            on_pick: hooks.on_pick,
        });
        let frame_loop = FrameLoop::start(frame_ctx.clone());

        log::info!(
            "[host] mounted #{} objects={} size={}x{}",
            container.id(),
            preset_objects,
            canvas.width(),
            canvas.height()
        );
        Ok(Self {
            container_id: container.id(),
            canvas,
            frame_ctx,
            frame_loop: Some(frame_loop),
            listeners,
        })
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn is_mounted(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Stop the loop, detach listeners, free GPU resources and remove the canvas.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        let Some(frame_loop) = self.frame_loop.take() else {
            return;
        };
        frame_loop.stop();
        self.listeners.clear();
        self.frame_ctx.borrow_mut().release();
        self.canvas.remove();
        log::info!("[host] unmounted #{}", self.container_id);
    }
}

impl Drop for SceneHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

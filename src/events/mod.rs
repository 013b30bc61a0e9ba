use crate::dom::{self, EventListener};
use folio_core::{PickEvent, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod pointer;

pub type PickCallback = Rc<dyn Fn(PickEvent)>;

#[derive(Clone)]
pub struct SceneWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub on_pick: Option<PickCallback>,
}

/// Register every listener one mounted scene needs. Dropping the returned
/// listeners detaches them.
pub fn wire_scene_events(w: &SceneWiring) -> Vec<EventListener> {
    let mut out = Vec::new();
    if let Some(window) = web::window() {
        out.extend(wire_pointermove(w, &window));
        out.extend(wire_resize(w, &window));
    }
    out.extend(wire_click(w));
    out.extend(wire_hover(w));
    out
}

fn wire_pointermove(w: &SceneWiring, window: &web::Window) -> Option<EventListener> {
    let scene = w.scene.clone();
    let win = window.clone();
    EventListener::new(window, "pointermove", move |ev| {
        if let Some(ndc) = pointer::window_ndc(&ev, &win) {
            scene.borrow_mut().pointer_moved(ndc);
        }
    })
}

fn wire_resize(w: &SceneWiring, window: &web::Window) -> Option<EventListener> {
    let w = w.clone();
    EventListener::new(window, "resize", move |_| {
        if let Some((width, height)) = dom::sync_canvas_backing_size(&w.canvas) {
            w.scene.borrow_mut().resize(width, height);
        }
    })
}

fn wire_click(w: &SceneWiring) -> Option<EventListener> {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "click", move |ev| {
        let Some(ndc) = pointer::event_ndc(&ev, &w.canvas) else {
            return;
        };
        // Scene borrow ends before the callback runs; it may touch the page
        let picked = w.scene.borrow_mut().click(ndc);
        if let (Some(pick), Some(cb)) = (picked, &w.on_pick) {
            cb(pick);
        }
    })
}

fn wire_hover(w: &SceneWiring) -> Vec<EventListener> {
    let enter = {
        let scene = w.scene.clone();
        EventListener::new(&w.canvas, "pointerenter", move |_| {
            scene.borrow_mut().set_hovered(true)
        })
    };
    let leave = {
        let scene = w.scene.clone();
        EventListener::new(&w.canvas, "pointerleave", move |_| {
            scene.borrow_mut().set_hovered(false)
        })
    };
    enter.into_iter().chain(leave).collect()
}

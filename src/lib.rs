#![cfg(target_arch = "wasm32")]
use crate::host::{Hooks, SceneHost};
use crate::options::{MountOptions, ENDPOINT_ATTR, SCENE_ATTR};
use crate::projects::ProjectsPanel;
use fnv::FnvHashMap;
use folio_core::{PickEvent, Preset};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod blog;
mod constants;
mod dom;
mod endpoint;
mod events;
mod frame;
mod host;
mod notify;
mod options;
mod projects;
mod render;
mod service;
mod viewport;

/// Everything mounted on the current page, keyed by container id.
#[derive(Default)]
struct Page {
    hosts: FnvHashMap<String, SceneHost>,
    projects: Option<Rc<ProjectsPanel>>,
}

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let projects = ProjectsPanel::attach(&document);
    PAGE.with(|p| p.borrow_mut().projects = projects);

    let endpoint = document
        .body()
        .and_then(|b| dom::data_attr(&b, ENDPOINT_ATTR))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| constants::DEFAULT_ENDPOINT.to_string());
    blog::wire_forms(&document, &endpoint);

    if let Some(l) = dom::EventListener::new(&window, "pagehide", |_| unmount_all()) {
        l.forget();
    }

    let containers = document
        .query_selector_all(&format!("[{}]", SCENE_ATTR))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..containers.length() {
        let Some(el) = containers
            .item(i)
            .and_then(|n| n.dyn_into::<web::Element>().ok())
        else {
            continue;
        };
        let opts = match MountOptions::from_attrs(|name| el.get_attribute(name)) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[host] skipping container: {}", e);
                continue;
            }
        };
        if let Err(e) = mount_element(el, opts).await {
            log::error!("[host] mount failed: {:?}", e);
        }
    }
    Ok(())
}

fn ensure_id(el: &web::Element) -> String {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
    let id = el.id();
    if !id.is_empty() {
        return id;
    }
    let id = format!("folio-scene-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed));
    el.set_id(&id);
    id
}

fn hooks_for(preset: Preset) -> Hooks {
    if preset != Preset::Projects {
        return Hooks::default();
    }
    let Some(panel) = PAGE.with(|p| p.borrow().projects.clone()) else {
        return Hooks::default();
    };
    let highlight = Some(panel.highlight());
    Hooks {
        on_pick: Some(Rc::new(move |ev: PickEvent| {
            if let Some(index) = ev.payload {
                log::info!("[pick] project {}", index);
                panel.select(index);
            }
        })),
        highlight,
    }
}

async fn mount_element(el: web::Element, opts: MountOptions) -> anyhow::Result<()> {
    let id = ensure_id(&el);
    let config = opts.config(rand::random())?;
    let host = SceneHost::mount(&el, config, hooks_for(opts.preset)).await?;
    log::info!("[host] #{} running {}", id, opts.preset.name());
    // A container mounted twice keeps only the newest host
    let replaced = PAGE.with(|p| p.borrow_mut().hosts.insert(id, host));
    drop(replaced);
    Ok(())
}

/// Mount a scene into the element with `element_id`. `preset` overrides the
/// element's `data-scene` attribute.
#[wasm_bindgen]
pub async fn mount(element_id: String, preset: Option<String>) -> Result<(), JsValue> {
    let el = dom::window_document()
        .and_then(|d| d.get_element_by_id(&element_id))
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", element_id)))?;
    let opts = match preset {
        Some(name) => {
            let preset: Preset = name
                .parse()
                .map_err(|e: folio_core::ConfigError| JsValue::from_str(&e.to_string()))?;
            MountOptions::with_overrides(preset, |n| el.get_attribute(n))
        }
        None => MountOptions::from_attrs(|n| el.get_attribute(n))
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
    };
    mount_element(el, opts)
        .await
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down the scene in `element_id`. Returns false when nothing was mounted there.
#[wasm_bindgen]
pub fn unmount(element_id: &str) -> bool {
    let host = PAGE.with(|p| p.borrow_mut().hosts.remove(element_id));
    match host {
        Some(mut h) => {
            h.unmount();
            true
        }
        None => false,
    }
}

#[wasm_bindgen]
pub fn unmount_all() {
    let hosts: Vec<SceneHost> =
        PAGE.with(|p| p.borrow_mut().hosts.drain().map(|(_, h)| h).collect());
    for mut h in hosts {
        h.unmount();
    }
}

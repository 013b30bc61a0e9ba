use crate::constants::*;
use crate::dom::{self, EventListener};
use folio_core::content::{self, Project, PROJECTS};
use folio_core::Selection;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Project list plus detail view. Selection comes from list buttons or from
/// picking a marker in a `projects` scene.
pub struct ProjectsPanel {
    document: web::Document,
    selection: RefCell<Selection>,
    highlight: Rc<Cell<Option<usize>>>,
    listener: RefCell<Option<EventListener>>,
}

impl ProjectsPanel {
    /// Build the panel when the page has a `#project-list`.
    pub fn attach(document: &web::Document) -> Option<Rc<Self>> {
        let list = document.get_element_by_id(PROJECT_LIST_ID)?;
        let selection = content::initial_project_selection();
        let panel = Rc::new(Self {
            document: document.clone(),
            selection: RefCell::new(selection),
            highlight: Rc::new(Cell::new(selection.current())),
            listener: RefCell::new(None),
        });
        panel.build_list(&list);

        let weak = Rc::downgrade(&panel);
        let listener = EventListener::new(&list, "click", move |ev| {
            let Some(panel) = weak.upgrade() else {
                return;
            };
            if let Some(index) = clicked_index(&ev) {
                panel.select(index);
            }
        });
        *panel.listener.borrow_mut() = listener;
        panel.render();
        log::info!("[host] projects panel with {} entries", PROJECTS.len());
        Some(panel)
    }

    /// Payload cell read by the scene each frame to highlight the selected marker.
    pub fn highlight(&self) -> Rc<Cell<Option<usize>>> {
        self.highlight.clone()
    }

    pub fn current(&self) -> Option<usize> {
        self.selection.borrow().current()
    }

    /// Select by index. Out-of-range indices and repeats are ignored.
    pub fn select(&self, index: usize) {
        if content::project(index).is_none() {
            log::warn!("[pick] no project at index {}", index);
            return;
        }
        if !self.selection.borrow_mut().select(index) {
            return;
        }
        self.highlight.set(Some(index));
        self.render();
    }

    fn build_list(&self, list: &web::Element) {
        if list.query_selector(&format!("[{}]", PROJECT_INDEX_ATTR)).ok().flatten().is_some() {
            return;
        }
        for (i, p) in PROJECTS.iter().enumerate() {
            let Ok(button) = self.document.create_element("button") else {
                continue;
            };
            _ = button.set_attribute("type", "button");
            _ = button.set_attribute(PROJECT_INDEX_ATTR, &i.to_string());
            button.set_text_content(Some(p.title));
            _ = list.append_child(&button);
        }
    }

    fn render(&self) {
        let Some(p) = self.current().and_then(content::project) else {
            return;
        };
        self.render_details(p);
        self.mark_active();
    }

    fn render_details(&self, p: &Project) {
        let d = &self.document;
        dom::set_text(d, PROJECT_TITLE_ID, p.title);
        dom::set_text(d, PROJECT_DESCRIPTION_ID, p.description);
        if let Some(img) = d.get_element_by_id(PROJECT_IMAGE_ID) {
            _ = img.set_attribute("src", p.image);
            _ = img.set_attribute("alt", p.title);
        }
        if let Some(tags) = d.get_element_by_id(PROJECT_TAGS_ID) {
            tags.set_text_content(None);
            for tag in p.tags {
                if let Ok(span) = d.create_element("span") {
                    span.set_text_content(Some(tag));
                    _ = span.set_attribute("class", "tag");
                    _ = tags.append_child(&span);
                }
            }
        }
        for (id, href) in [(PROJECT_LIVE_ID, p.live_url), (PROJECT_REPO_ID, p.repo_url)] {
            if let Some(a) = d.get_element_by_id(id) {
                _ = a.set_attribute("href", href);
            }
        }
    }

    fn mark_active(&self) {
        let current = self.current();
        let Ok(nodes) = self
            .document
            .query_selector_all(&format!("[{}]", PROJECT_INDEX_ATTR))
        else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let index = el
                .get_attribute(PROJECT_INDEX_ATTR)
                .and_then(|s| s.parse::<usize>().ok());
            let active = index.is_some() && index == current;
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
            _ = el.set_attribute("aria-pressed", if active { "true" } else { "false" });
        }
    }
}

fn clicked_index(ev: &web::Event) -> Option<usize> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let button = target
        .closest(&format!("[{}]", PROJECT_INDEX_ATTR))
        .ok()
        .flatten()?;
    button.get_attribute(PROJECT_INDEX_ATTR)?.parse().ok()
}

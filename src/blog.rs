use crate::constants::{FormIds, RANK_FORM, SUMMARY_FORM};
use crate::dom::{self, EventListener};
use crate::notify;
use crate::service::HttpTextService;
use folio_core::blog::{
    complete_rank_titles, complete_summary, FormPhase, FormState, RankTitlesForm, RankedTitle,
    SubmitError, SummaryForm,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Wire whichever blog forms the page contains. Listeners live as long as the page.
pub fn wire_forms(document: &web::Document, endpoint: &str) {
    let service = Rc::new(HttpTextService::new(endpoint));
    if let Some(l) = wire_rank_form(document, service.clone()) {
        l.forget();
    }
    if let Some(l) = wire_summary_form(document, service) {
        l.forget();
    }
}

fn wire_rank_form(
    document: &web::Document,
    service: Rc<HttpTextService>,
) -> Option<EventListener> {
    let ids = RANK_FORM;
    let button = document.get_element_by_id(ids.submit)?;
    let form = Rc::new(RefCell::new(RankTitlesForm::new()));
    let doc = document.clone();
    log::info!("[blog] rank-titles form ready");
    EventListener::new(&button, "click", move |ev| {
        ev.prevent_default();
        let begun = {
            let mut f = form.borrow_mut();
            f.set_input(read_input(&doc, ids.input));
            f.begin_request()
        };
        let req = match begun {
            Ok(req) => req,
            Err(e) => {
                show_rejection(&doc, &ids, &e);
                return;
            }
        };
        show_inline_error(&doc, &ids, None);
        render_rank(&doc, &mut form.borrow_mut());
        log::info!("[blog] ranking {} titles", req.titles.len());

        let form = form.clone();
        let service = service.clone();
        let doc = doc.clone();
        spawn_local(async move {
            // Failure already moved the form to its error phase with a notice
            _ = complete_rank_titles(&form, req, service.as_ref()).await;
            render_rank(&doc, &mut form.borrow_mut());
        });
    })
}

fn wire_summary_form(
    document: &web::Document,
    service: Rc<HttpTextService>,
) -> Option<EventListener> {
    let ids = SUMMARY_FORM;
    let button = document.get_element_by_id(ids.submit)?;
    let form = Rc::new(RefCell::new(SummaryForm::new()));
    let doc = document.clone();
    log::info!("[blog] summary form ready");
    EventListener::new(&button, "click", move |ev| {
        ev.prevent_default();
        let begun = {
            let mut f = form.borrow_mut();
            f.set_input(read_input(&doc, ids.input));
            f.begin_request()
        };
        let req = match begun {
            Ok(req) => req,
            Err(e) => {
                show_rejection(&doc, &ids, &e);
                return;
            }
        };
        show_inline_error(&doc, &ids, None);
        render_summary(&doc, &mut form.borrow_mut());

        let form = form.clone();
        let service = service.clone();
        let doc = doc.clone();
        spawn_local(async move {
            _ = complete_summary(&form, req, service.as_ref()).await;
            render_summary(&doc, &mut form.borrow_mut());
        });
    })
}

fn read_input(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|ta| ta.value())
        .unwrap_or_default()
}

fn show_rejection(document: &web::Document, ids: &FormIds, err: &SubmitError) {
    match err {
        SubmitError::Invalid(v) => show_inline_error(document, ids, Some(&v.to_string())),
        SubmitError::InFlight => log::debug!("[blog] submit ignored while pending"),
        SubmitError::Service(e) => log::warn!("[blog] {}", e),
    }
}

fn show_inline_error(document: &web::Document, ids: &FormIds, message: Option<&str>) {
    dom::set_text(document, ids.error, message.unwrap_or(""));
    dom::set_visible(document, ids.error, message.is_some());
}

/// Pending indicator, disabled submit control and the one-shot failure notice.
fn render_phase<T>(document: &web::Document, ids: &FormIds, state: &mut FormState<T>) {
    let pending = state.is_pending();
    dom::set_visible(document, ids.pending, pending);
    if let Some(button) = document
        .get_element_by_id(ids.submit)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(pending);
        _ = button.set_attribute("aria-busy", if pending { "true" } else { "false" });
    }
    if let Some(notice) = state.take_notice() {
        notify::show_error(notice);
    }
}

fn render_rank(document: &web::Document, form: &mut RankTitlesForm) {
    render_phase(document, &RANK_FORM, form.state_mut());
    let Some(results) = document.get_element_by_id(RANK_FORM.result) else {
        return;
    };
    results.set_text_content(None);
    let show = form.state().phase() == FormPhase::Success && !form.ranked().is_empty();
    if show {
        for row in form.ranked() {
            if let Some(el) = ranked_row(document, row) {
                _ = results.append_child(&el);
            }
        }
    }
    dom::set_visible(document, RANK_FORM.result, show);
}

fn ranked_row(document: &web::Document, row: &RankedTitle) -> Option<web::Element> {
    let li = document.create_element("li").ok()?;
    _ = li.set_attribute("class", "ranked-title");
    let title = document.create_element("strong").ok()?;
    title.set_text_content(Some(&row.title));
    let rank = document.create_element("span").ok()?;
    rank.set_text_content(Some(&format!("Rank: {}", row.rank)));
    let reason = document.create_element("p").ok()?;
    reason.set_text_content(Some(&row.reason));
    _ = li.append_child(&title);
    _ = li.append_child(&rank);
    _ = li.append_child(&reason);
    Some(li)
}

fn render_summary(document: &web::Document, form: &mut SummaryForm) {
    render_phase(document, &SUMMARY_FORM, form.state_mut());
    let summary = form.summary();
    dom::set_text(document, SUMMARY_FORM.result, summary.unwrap_or(""));
    dom::set_visible(document, SUMMARY_FORM.result, summary.is_some());
}

use crate::constants::{ERROR_BODY_PREVIEW_CHARS, RANK_TITLES_PATH, SUMMARY_PATH};
use crate::endpoint;
use async_trait::async_trait;
use folio_core::blog::{
    decode_ranked, decode_summary, RankTitlesRequest, RankedTitle, ServiceError, SummaryRequest,
    SummaryResponse, TextService,
};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `TextService` over `fetch`: JSON POSTs to `{endpoint}/rank-titles` and `{endpoint}/summary`.
pub struct HttpTextService {
    endpoint: String,
}

impl HttpTextService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<String, ServiceError> {
        let url = endpoint::join(&self.endpoint, path);
        let json = serde_json::to_string(body).map_err(|e| ServiceError::Parse(e.to_string()))?;

        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&json));
        let request = web::Request::new_with_str_and_init(&url, &init).map_err(js_network)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_network)?;

        let window = web::window().ok_or_else(|| ServiceError::Network("no window".into()))?;
        let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_network)?
            .dyn_into()
            .map_err(js_network)?;
        let text = JsFuture::from(resp.text().map_err(js_network)?)
            .await
            .map_err(js_network)?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            log::warn!("[blog] POST {} -> {}", url, resp.status());
            return Err(ServiceError::Status {
                status: resp.status(),
                body: endpoint::preview(&text, ERROR_BODY_PREVIEW_CHARS),
            });
        }
        Ok(text)
    }
}

fn js_network(e: JsValue) -> ServiceError {
    ServiceError::Network(format!("{:?}", e))
}

#[async_trait(?Send)]
impl TextService for HttpTextService {
    async fn rank_titles(&self, req: &RankTitlesRequest) -> Result<Vec<RankedTitle>, ServiceError> {
        let body = self.post_json(RANK_TITLES_PATH, req).await?;
        decode_ranked(&body)
    }

    async fn summarize(&self, req: &SummaryRequest) -> Result<SummaryResponse, ServiceError> {
        let body = self.post_json(SUMMARY_PATH, req).await?;
        decode_summary(&body)
    }
}

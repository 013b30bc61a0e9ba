use super::form::{FormState, SubmitError, ValidationError};
use super::service::{ServiceError, SummaryRequest, SummaryResponse, TextService};
use std::cell::RefCell;

pub const MIN_SUMMARY_INPUT_CHARS: usize = 50;

pub const SUMMARY_FAILED_NOTICE: &str = "Failed to generate summary. Please try again.";

pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() < MIN_SUMMARY_INPUT_CHARS {
        return Err(ValidationError::ContentTooShort {
            min: MIN_SUMMARY_INPUT_CHARS,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct SummaryForm {
    input: String,
    state: FormState<String>,
}

impl SummaryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, content: impl Into<String>) {
        self.input = content.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &FormState<String> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState<String> {
        &mut self.state
    }

    /// The summary of the last successful submission. Empty summaries count as none.
    pub fn summary(&self) -> Option<&str> {
        self.state
            .result()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn begin_request(&mut self) -> Result<SummaryRequest, SubmitError> {
        if self.state.is_pending() {
            return Err(SubmitError::InFlight);
        }
        validate_content(&self.input)?;
        self.state.begin()?;
        Ok(SummaryRequest {
            blog_post_content: self.input.clone(),
        })
    }

    pub fn finish(
        &mut self,
        outcome: Result<SummaryResponse, ServiceError>,
    ) -> Result<(), SubmitError> {
        match outcome {
            Ok(resp) => {
                self.state.succeed(resp.summary);
                Ok(())
            }
            Err(e) => {
                log::warn!("[blog] summary failed: {}", e);
                self.state.fail(SUMMARY_FAILED_NOTICE);
                Err(SubmitError::Service(e))
            }
        }
    }
}

pub async fn complete_summary<S: TextService + ?Sized>(
    form: &RefCell<SummaryForm>,
    req: SummaryRequest,
    service: &S,
) -> Result<(), SubmitError> {
    log::info!(
        "[blog] summarizing {} chars",
        req.blog_post_content.chars().count()
    );
    let outcome = service.summarize(&req).await;
    form.borrow_mut().finish(outcome)
}

pub async fn submit_summary<S: TextService + ?Sized>(
    form: &RefCell<SummaryForm>,
    service: &S,
) -> Result<(), SubmitError> {
    let req = form.borrow_mut().begin_request()?;
    complete_summary(form, req, service).await
}

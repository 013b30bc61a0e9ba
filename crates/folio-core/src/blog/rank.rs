use super::form::{FormState, SubmitError, ValidationError};
use super::service::{RankTitlesRequest, RankedTitle, ServiceError, TextService};
use std::cell::RefCell;
use std::collections::HashMap;

/// Minimum length of the raw textarea contents, blank lines included.
pub const MIN_TITLES_INPUT_CHARS: usize = 10;

pub const RANK_FAILED_NOTICE: &str = "Failed to rank titles. Please try again.";

/// One title per line; surrounding whitespace trimmed, blank lines dropped.
pub fn parse_titles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn validate_titles(raw: &str) -> Result<Vec<String>, ValidationError> {
    if raw.chars().count() < MIN_TITLES_INPUT_CHARS {
        return Err(ValidationError::NoTitles);
    }
    let titles = parse_titles(raw);
    if titles.is_empty() {
        return Err(ValidationError::NoTitles);
    }
    Ok(titles)
}

/// Enforce one output entry per input title. A title may repeat only as often
/// as it was entered; titles the service rewrote are kept but logged.
pub fn check_ranked(
    input: &[String],
    output: Vec<RankedTitle>,
) -> Result<Vec<RankedTitle>, ServiceError> {
    if output.len() != input.len() {
        return Err(ServiceError::Count {
            expected: input.len(),
            got: output.len(),
        });
    }
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for r in &output {
        let allowed = input.iter().filter(|t| **t == r.title).count();
        if allowed == 0 {
            log::warn!("[blog] ranked title not in input: {:?}", r.title);
        }
        let n = seen.entry(r.title.as_str()).or_insert(0);
        *n += 1;
        if *n > allowed.max(1) {
            return Err(ServiceError::Duplicate(r.title.clone()));
        }
    }
    Ok(output)
}

/// Highest rank first. Stable, so equal ranks keep service order; NaN sorts last.
pub fn sort_by_rank_desc(titles: &mut [RankedTitle]) {
    titles.sort_by(|a, b| match (a.rank.is_nan(), b.rank.is_nan()) {
        (false, false) => b.rank.total_cmp(&a.rank),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    });
}

#[derive(Debug, Clone, Default)]
pub struct RankTitlesForm {
    input: String,
    state: FormState<Vec<RankedTitle>>,
}

impl RankTitlesForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &FormState<Vec<RankedTitle>> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState<Vec<RankedTitle>> {
        &mut self.state
    }

    /// Ranked rows of the last successful submission, best first.
    pub fn ranked(&self) -> &[RankedTitle] {
        self.state.result().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate the current input and move to pending. The input is left untouched.
    pub fn begin_request(&mut self) -> Result<RankTitlesRequest, SubmitError> {
        if self.state.is_pending() {
            return Err(SubmitError::InFlight);
        }
        let titles = validate_titles(&self.input)?;
        self.state.begin()?;
        Ok(RankTitlesRequest { titles })
    }

    pub fn finish(
        &mut self,
        outcome: Result<Vec<RankedTitle>, ServiceError>,
    ) -> Result<(), SubmitError> {
        match outcome {
            Ok(mut ranked) => {
                sort_by_rank_desc(&mut ranked);
                self.state.succeed(ranked);
                Ok(())
            }
            Err(e) => {
                log::warn!("[blog] rank titles failed: {}", e);
                self.state.fail(RANK_FAILED_NOTICE);
                Err(SubmitError::Service(e))
            }
        }
    }
}

/// Await the service for a request produced by [`RankTitlesForm::begin_request`]
/// and record the outcome.
///
/// The form is only borrowed around the await, never across it, so a second
/// submit while this one is pending sees the in-flight state and is rejected
/// without reaching the service.
pub async fn complete_rank_titles<S: TextService + ?Sized>(
    form: &RefCell<RankTitlesForm>,
    req: RankTitlesRequest,
    service: &S,
) -> Result<(), SubmitError> {
    log::info!("[blog] ranking {} titles", req.titles.len());
    let outcome = service
        .rank_titles(&req)
        .await
        .and_then(|ranked| check_ranked(&req.titles, ranked));
    form.borrow_mut().finish(outcome)
}

/// Validate, mark pending and run one ranking round trip against `service`.
pub async fn submit_rank_titles<S: TextService + ?Sized>(
    form: &RefCell<RankTitlesForm>,
    service: &S,
) -> Result<(), SubmitError> {
    let req = form.borrow_mut().begin_request()?;
    complete_rank_titles(form, req, service).await
}

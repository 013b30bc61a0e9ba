//! AI-assisted blog tools: title ranking and post summarization.
//!
//! The forms here are platform-free state machines; the browser crate owns
//! the DOM and the HTTP implementation of [`TextService`].

pub mod form;
pub mod rank;
pub mod service;
pub mod summary;

pub use form::{FormPhase, FormState, SubmitError, ValidationError};
pub use rank::{
    check_ranked, complete_rank_titles, parse_titles, sort_by_rank_desc, submit_rank_titles,
    validate_titles, RankTitlesForm, MIN_TITLES_INPUT_CHARS, RANK_FAILED_NOTICE,
};
pub use service::{
    decode_ranked, decode_summary, RankTitlesRequest, RankedTitle, ServiceError, SummaryRequest,
    SummaryResponse, TextService,
};
pub use summary::{
    complete_summary, submit_summary, validate_content, SummaryForm, MIN_SUMMARY_INPUT_CHARS,
    SUMMARY_FAILED_NOTICE,
};

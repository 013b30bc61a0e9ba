// Host-side tests for the blog forms. Async submissions are driven with
// pollster against in-memory stub services.

use async_trait::async_trait;
use folio_core::blog::*;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct StubService {
    ranks: RefCell<VecDeque<Result<Vec<RankedTitle>, ServiceError>>>,
    summaries: RefCell<VecDeque<Result<SummaryResponse, ServiceError>>>,
    rank_calls: Cell<usize>,
    summary_calls: Cell<usize>,
}

impl StubService {
    fn ranking(self, reply: Result<Vec<RankedTitle>, ServiceError>) -> Self {
        self.ranks.borrow_mut().push_back(reply);
        self
    }

    fn summarizing(self, reply: Result<SummaryResponse, ServiceError>) -> Self {
        self.summaries.borrow_mut().push_back(reply);
        self
    }
}

#[async_trait(?Send)]
impl TextService for StubService {
    async fn rank_titles(&self, _req: &RankTitlesRequest) -> Result<Vec<RankedTitle>, ServiceError> {
        self.rank_calls.set(self.rank_calls.get() + 1);
        self.ranks
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no stubbed reply".into())))
    }

    async fn summarize(&self, _req: &SummaryRequest) -> Result<SummaryResponse, ServiceError> {
        self.summary_calls.set(self.summary_calls.get() + 1);
        self.summaries
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no stubbed reply".into())))
    }
}

fn ranked(title: &str, rank: f64) -> RankedTitle {
    RankedTitle {
        title: title.to_string(),
        rank,
        reason: format!("{} reads well", title),
    }
}

fn summary(s: &str) -> SummaryResponse {
    SummaryResponse {
        summary: s.to_string(),
    }
}

#[test]
fn titles_are_split_trimmed_and_blank_lines_dropped() {
    let titles = parse_titles("  Top 5 JS Frameworks \n\n   \r\nWhy I Love Rust\r\n");
    assert_eq!(titles, vec!["Top 5 JS Frameworks", "Why I Love Rust"]);
}

#[test]
fn title_validation_requires_ten_characters_and_one_title() {
    assert_eq!(validate_titles("short"), Err(ValidationError::NoTitles));
    assert_eq!(validate_titles("\n\n   \n\n    \n"), Err(ValidationError::NoTitles));
    assert_eq!(validate_titles("A\nB\nC\n\n\n\n\n"), Ok(vec!["A".into(), "B".into(), "C".into()]));
}

#[test]
fn content_validation_requires_fifty_characters() {
    assert!(validate_content(&"x".repeat(MIN_SUMMARY_INPUT_CHARS - 1)).is_err());
    assert!(validate_content(&"x".repeat(MIN_SUMMARY_INPUT_CHARS)).is_ok());
    assert_eq!(
        ValidationError::ContentTooShort { min: 50 }.to_string(),
        "Content must be at least 50 characters."
    );
}

#[test]
fn rank_round_trip_is_a_sorted_permutation_of_the_input() {
    let input: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let reply = vec![ranked("B", 7.0), ranked("A", 3.5), ranked("C", 9.0)];
    let mut out = check_ranked(&input, reply).unwrap();
    sort_by_rank_desc(&mut out);

    let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["A", "B", "C"], "each title exactly once");
}

#[test]
fn rank_sort_is_stable_and_puts_nan_last() {
    let mut rows = vec![
        ranked("x", 1.0),
        ranked("nan", f64::NAN),
        ranked("y", 5.0),
        ranked("z", 1.0),
    ];
    sort_by_rank_desc(&mut rows);
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["y", "x", "z", "nan"]);
}

#[test]
fn short_reply_violates_the_contract() {
    let input = vec!["A".to_string(), "B".to_string()];
    let err = check_ranked(&input, vec![ranked("A", 1.0)]).unwrap_err();
    assert_eq!(err, ServiceError::Count { expected: 2, got: 1 });
}

#[test]
fn repeated_title_in_reply_violates_the_contract() {
    let input: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let reply = vec![ranked("A", 3.0), ranked("A", 2.0), ranked("B", 1.0)];
    assert_eq!(
        check_ranked(&input, reply).unwrap_err(),
        ServiceError::Duplicate("A".into())
    );
}

#[test]
fn titles_entered_twice_may_come_back_twice() {
    let input: Vec<String> = ["A", "A", "B"].iter().map(|s| s.to_string()).collect();
    let reply = vec![ranked("A", 3.0), ranked("B", 2.0), ranked("A", 1.0)];
    assert_eq!(check_ranked(&input, reply).unwrap().len(), 3);
}

#[test]
fn successful_ranking_shows_rows_best_first() {
    let form = RefCell::new(RankTitlesForm::new());
    form.borrow_mut().set_input("Alpha\nBravo\nCharlie");
    let service = StubService::default().ranking(Ok(vec![
        ranked("Alpha", 2.0),
        ranked("Bravo", 8.0),
        ranked("Charlie", 5.0),
    ]));

    pollster::block_on(submit_rank_titles(&form, &service)).unwrap();

    let form = form.borrow();
    assert_eq!(form.state().phase(), FormPhase::Success);
    let titles: Vec<&str> = form.ranked().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Bravo", "Charlie", "Alpha"]);
    assert_eq!(service.rank_calls.get(), 1);
}

#[test]
fn invalid_titles_never_reach_the_service() {
    let form = RefCell::new(RankTitlesForm::new());
    form.borrow_mut().set_input("tiny");
    let service = StubService::default();

    let err = pollster::block_on(submit_rank_titles(&form, &service)).unwrap_err();
    assert_eq!(err, SubmitError::Invalid(ValidationError::NoTitles));
    assert_eq!(service.rank_calls.get(), 0);
    assert_eq!(form.borrow().state().phase(), FormPhase::Idle);
}

/// Submits again from inside the service call, the way a second click would
/// arrive while the first request is still awaiting.
struct ReentrantService {
    form: Rc<RefCell<RankTitlesForm>>,
    calls: Cell<usize>,
    nested: RefCell<Option<Result<(), SubmitError>>>,
}

#[async_trait(?Send)]
impl TextService for ReentrantService {
    async fn rank_titles(&self, req: &RankTitlesRequest) -> Result<Vec<RankedTitle>, ServiceError> {
        self.calls.set(self.calls.get() + 1);
        let nested = submit_rank_titles(&self.form, self).await;
        *self.nested.borrow_mut() = Some(nested);
        Ok(req
            .titles
            .iter()
            .enumerate()
            .map(|(i, t)| ranked(t, i as f64))
            .collect())
    }

    async fn summarize(&self, _req: &SummaryRequest) -> Result<SummaryResponse, ServiceError> {
        Err(ServiceError::Network("unused".into()))
    }
}

#[test]
fn duplicate_submission_while_in_flight_is_blocked() {
    let form = Rc::new(RefCell::new(RankTitlesForm::new()));
    form.borrow_mut().set_input("First title\nSecond title");
    let service = ReentrantService {
        form: Rc::clone(&form),
        calls: Cell::new(0),
        nested: RefCell::new(None),
    };

    pollster::block_on(submit_rank_titles(&form, &service)).unwrap();

    assert_eq!(service.calls.get(), 1, "exactly one request per intended submission");
    assert_eq!(*service.nested.borrow(), Some(Err(SubmitError::InFlight)));
    assert_eq!(form.borrow().ranked().len(), 2);
}

#[test]
fn summary_is_shown_once_with_no_residue_from_earlier_runs() {
    let form = RefCell::new(SummaryForm::new());
    let service = StubService::default()
        .summarizing(Ok(summary("S.")))
        .summarizing(Ok(summary("T.")));

    form.borrow_mut().set_input("x".repeat(60));
    pollster::block_on(submit_summary(&form, &service)).unwrap();
    assert_eq!(form.borrow().summary(), Some("S."));

    form.borrow_mut().set_input("y".repeat(60));
    let req = form.borrow_mut().begin_request().unwrap();
    assert_eq!(form.borrow().summary(), None, "pending clears the previous summary");
    assert_eq!(req.blog_post_content, "y".repeat(60));
    let outcome = pollster::block_on(service.summarize(&req));
    form.borrow_mut().finish(outcome).unwrap();

    assert_eq!(form.borrow().summary(), Some("T."));
    assert_eq!(service.summary_calls.get(), 2);
}

#[test]
fn failure_shows_one_notice_and_keeps_the_input() {
    let form = RefCell::new(SummaryForm::new());
    let content = "A post long enough to be summarized by the service, honestly.";
    form.borrow_mut().set_input(content);
    let service =
        StubService::default().summarizing(Err(ServiceError::Network("offline".into())));

    let err = pollster::block_on(submit_summary(&form, &service)).unwrap_err();
    assert!(matches!(err, SubmitError::Service(ServiceError::Network(_))));

    let mut form = form.borrow_mut();
    assert_eq!(form.state().phase(), FormPhase::Error);
    assert!(!form.state().is_pending());
    assert_eq!(form.input(), content);
    assert_eq!(form.summary(), None);
    assert_eq!(form.state_mut().take_notice(), Some(SUMMARY_FAILED_NOTICE));
    assert_eq!(form.state_mut().take_notice(), None, "notice is shown exactly once");
}

#[test]
fn ranking_can_be_retried_after_a_failure() {
    let form = RefCell::new(RankTitlesForm::new());
    form.borrow_mut().set_input("Alpha\nBravo");
    let service = StubService::default()
        .ranking(Err(ServiceError::Status {
            status: 500,
            body: "boom".into(),
        }))
        .ranking(Ok(vec![ranked("Alpha", 1.0), ranked("Bravo", 2.0)]));

    assert!(pollster::block_on(submit_rank_titles(&form, &service)).is_err());
    assert_eq!(
        form.borrow_mut().state_mut().take_notice(),
        Some(RANK_FAILED_NOTICE)
    );
    assert!(form.borrow().ranked().is_empty(), "no partial result after failure");

    pollster::block_on(submit_rank_titles(&form, &service)).unwrap();
    assert_eq!(form.borrow().ranked()[0].title, "Bravo");
    assert_eq!(service.rank_calls.get(), 2);
}

#[test]
fn miscounted_reply_is_reported_as_a_failure() {
    let form = RefCell::new(RankTitlesForm::new());
    form.borrow_mut().set_input("Alpha\nBravo\nCharlie");
    let service = StubService::default().ranking(Ok(vec![ranked("Alpha", 1.0)]));

    let err = pollster::block_on(submit_rank_titles(&form, &service)).unwrap_err();
    assert_eq!(
        err,
        SubmitError::Service(ServiceError::Count {
            expected: 3,
            got: 1
        })
    );
    assert_eq!(form.borrow().state().phase(), FormPhase::Error);
}

#[test]
fn summary_request_uses_camel_case_on_the_wire() {
    let req = SummaryRequest {
        blog_post_content: "hello".into(),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"blogPostContent":"hello"}"#);
}

#[test]
fn service_replies_decode_from_json() {
    let rows = decode_ranked(r#"[{"title":"A","rank":3,"reason":"short"}]"#).unwrap();
    assert_eq!(rows, vec![RankedTitle {
        title: "A".into(),
        rank: 3.0,
        reason: "short".into(),
    }]);
    assert_eq!(decode_summary(r#"{"summary":"S."}"#).unwrap(), summary("S."));
    assert!(matches!(decode_summary("not json"), Err(ServiceError::Parse(_))));
}

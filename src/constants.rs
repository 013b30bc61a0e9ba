// Browser-side tuning constants and DOM contract.
//
// Pure data only; host-side tests include this file directly.

// Device pixel ratio is capped so 3x phones do not quadruple fill cost
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Sprite instance buffer starts at this many instances and doubles on demand
pub const INITIAL_INSTANCE_CAPACITY: usize = 1024;

// Transparent clear; the page background shows through the canvas
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Text service
pub const DEFAULT_ENDPOINT: &str = "/api";
pub const RANK_TITLES_PATH: &str = "rank-titles";
pub const SUMMARY_PATH: &str = "summary";
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

// Toast notifications
pub const TOAST_ID: &str = "toast";
pub const TOAST_VISIBLE_MS: i32 = 5000;
pub const HIDDEN_CLASS: &str = "hidden";
pub const DESTRUCTIVE_CLASS: &str = "destructive";

// Projects panel
pub const PROJECT_LIST_ID: &str = "project-list";
pub const PROJECT_INDEX_ATTR: &str = "data-project-index";
pub const PROJECT_TITLE_ID: &str = "project-title";
pub const PROJECT_DESCRIPTION_ID: &str = "project-description";
pub const PROJECT_IMAGE_ID: &str = "project-image";
pub const PROJECT_TAGS_ID: &str = "project-tags";
pub const PROJECT_LIVE_ID: &str = "project-live";
pub const PROJECT_REPO_ID: &str = "project-repo";
pub const ACTIVE_CLASS: &str = "active";

/// Element ids making up one blog form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormIds {
    pub input: &'static str,
    pub submit: &'static str,
    pub error: &'static str,
    pub pending: &'static str,
    pub result: &'static str,
}

pub const RANK_FORM: FormIds = FormIds {
    input: "rank-titles-input",
    submit: "rank-titles-submit",
    error: "rank-titles-error",
    pending: "rank-titles-pending",
    result: "rank-titles-results",
};

pub const SUMMARY_FORM: FormIds = FormIds {
    input: "summary-input",
    submit: "summary-submit",
    error: "summary-error",
    pending: "summary-pending",
    result: "summary-result",
};

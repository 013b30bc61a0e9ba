use super::service::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter at least one title.")]
    NoTitles,

    #[error("Content must be at least {min} characters.")]
    ContentTooShort { min: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a request is already in flight")]
    InFlight,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Pending,
    Success,
    /// The last attempt failed. The form accepts a new submission.
    Error,
}

/// Request lifecycle shared by both blog forms.
///
/// At most one request is in flight. [`FormState::begin`] clears the previous
/// result so nothing stale is shown while pending, and a failure leaves
/// exactly one notice to be taken by the UI.
#[derive(Debug, Clone)]
pub struct FormState<T> {
    phase: FormPhase,
    result: Option<T>,
    notice: Option<&'static str>,
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        Self {
            phase: FormPhase::Idle,
            result: None,
            notice: None,
        }
    }
}

impl<T> FormState<T> {
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.phase == FormPhase::Pending {
            return Err(SubmitError::InFlight);
        }
        self.phase = FormPhase::Pending;
        self.result = None;
        self.notice = None;
        Ok(())
    }

    pub fn succeed(&mut self, value: T) {
        self.phase = FormPhase::Success;
        self.result = Some(value);
    }

    pub fn fail(&mut self, notice: &'static str) {
        self.phase = FormPhase::Error;
        self.result = None;
        self.notice = Some(notice);
    }

    /// The pending user-facing notice, if any. Returns it once.
    pub fn take_notice(&mut self) -> Option<&'static str> {
        self.notice.take()
    }

    #[inline]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Pending
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }
}

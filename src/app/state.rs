//! View state and its transitions.
//!
//! The phase is derived from the stored fields rather than kept separately:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Success ──submit──▶ Submitting
//!                       └─────err──▶ Failed  ──submit──▶ Submitting
//! ```
//!
//! A submission whose prompt trims to nothing is a no-op in every phase.

use super::models::GeneratePayload;

/// Message shown for every failed request, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to generate content.";

/// Identifies one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

/// A request the caller must now issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: RequestId,
    /// Trimmed prompt text
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// What [`ViewState::settle`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The outcome was stored; the view is now in the given phase.
    Applied(Phase),
    /// A newer request was dispatched since; the outcome was dropped.
    Stale,
    /// The view was torn down; the outcome was dropped.
    Detached,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    prompt: String,
    loading: bool,
    result: Option<GeneratePayload>,
    error: Option<String>,
    current: Option<RequestId>,
    issued: u64,
    detached: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// True while the current request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&GeneratePayload> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The most recently dispatched request, if any.
    pub fn current_request(&self) -> Option<RequestId> {
        self.current
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Replace the prompt text. No other field changes.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Start a new request for the current prompt.
    ///
    /// Returns `None` and leaves the state untouched when the prompt is blank
    /// or the view has been torn down. Otherwise the new request becomes the
    /// current one, loading is switched on and any previous error is cleared.
    pub fn submit(&mut self) -> Option<Submission> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() || self.detached {
            return None;
        }
        let prompt = prompt.to_string();

        self.issued += 1;
        let id = RequestId(self.issued);
        self.current = Some(id);
        self.loading = true;
        self.error = None;

        Some(Submission { id, prompt })
    }

    /// Apply the outcome of request `id`.
    ///
    /// Only the current request's outcome is stored. Success replaces the
    /// payload and clears the error; failure stores [`FAILURE_MESSAGE`] and
    /// clears the payload. The failure detail is never kept.
    pub fn settle<E>(&mut self, id: RequestId, outcome: Result<GeneratePayload, E>) -> Settlement {
        if self.detached {
            return Settlement::Detached;
        }
        if self.current != Some(id) {
            return Settlement::Stale;
        }

        match outcome {
            Ok(payload) => {
                self.result = Some(payload);
                self.error = None;
            }
            Err(_) => {
                self.result = None;
                self.error = Some(FAILURE_MESSAGE.to_string());
            }
        }
        self.loading = false;

        Settlement::Applied(self.phase())
    }

    /// Tear the view down. Outcomes settled afterwards are dropped.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

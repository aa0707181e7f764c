//! Async view controller.
//!
//! Owns the [`ViewState`] behind a `watch` channel: every transition
//! publishes a new snapshot that front ends re-render from. Each submission
//! runs on its own tokio task and applies its outcome through
//! [`ViewState::settle`], so results of superseded requests or of a
//! torn-down view are dropped.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::app::{Settlement, Submission, View, ViewState, render};
use crate::client::Generator;

pub struct Controller<G: Generator> {
    generator: Arc<G>,
    state: Arc<watch::Sender<ViewState>>,
}

impl<G: Generator> Clone for Controller<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            state: Arc::clone(&self.state),
        }
    }
}

impl<G: Generator> Controller<G> {
    pub fn new(generator: G) -> Self {
        let (state, _rx) = watch::channel(ViewState::new());
        Self {
            generator: Arc::new(generator),
            state: Arc::new(state),
        }
    }

    /// Receive a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Render the current state.
    pub fn view(&self) -> View {
        render(&self.state.borrow())
    }

    /// Prompt text edit. No request is issued.
    pub fn set_prompt(&self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.state.send_modify(|state| state.set_prompt(prompt));
    }

    /// Submit the current prompt.
    ///
    /// Returns `None` without touching the state when the prompt is blank or
    /// the controller has been torn down. Otherwise returns the handle of the
    /// task that will settle the request.
    pub fn submit(&self) -> Option<JoinHandle<Settlement>> {
        let mut submission = None;
        self.state.send_if_modified(|state| {
            submission = state.submit();
            submission.is_some()
        });
        let Submission { id, prompt } = submission?;
        debug!(?id, %prompt, "Submitting prompt");

        let generator = Arc::clone(&self.generator);
        let state = Arc::clone(&self.state);

        Some(tokio::spawn(async move {
            let outcome = generator.generate(&prompt).await;

            match &outcome {
                Ok(payload) => info!(
                    ?id,
                    drafts = payload.drafts.len(),
                    "Generated content"
                ),
                Err(e) => error!(?id, error = %e, reason = %e.reason(), "Generate request failed"),
            }

            let mut settlement = Settlement::Stale;
            state.send_if_modified(|view| {
                settlement = view.settle(id, outcome);
                matches!(settlement, Settlement::Applied(_))
            });

            if !matches!(settlement, Settlement::Applied(_)) {
                debug!(?id, ?settlement, "Dropped outcome of request");
            }
            settlement
        }))
    }

    /// Tear down: outcomes of requests still in flight are discarded.
    pub fn detach(&self) {
        self.state.send_modify(ViewState::detach);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

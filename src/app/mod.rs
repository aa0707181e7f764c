//! Front-end agnostic view logic.
//!
//! Both the terminal and the browser front ends hold a [`ViewState`], feed it
//! prompt edits, submissions and settled outcomes, and draw whatever
//! [`render`] returns.

pub mod models;
pub mod render;
pub mod state;

pub use models::{GeneratePayload, GenerateRequest};
pub use render::{DraftSection, SubmitButton, View, render};
pub use state::{FAILURE_MESSAGE, Phase, RequestId, Settlement, Submission, ViewState};

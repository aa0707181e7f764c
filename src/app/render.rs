//! Pure rendering of a [`ViewState`] into a front-end neutral [`View`].

use super::state::ViewState;

pub const TITLE: &str = "Social Media Post Generator";
pub const PLACEHOLDER: &str = "Enter your topic or prompt";
pub const SUBMIT_LABEL: &str = "Generate";
pub const SUBMITTING_LABEL: &str = "Generating...";
pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// One platform's draft
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftSection {
    pub platform: String,
    pub text: String,
}

/// Everything a front end needs to draw the form.
///
/// The error, loading and result blocks are independent: each one is shown
/// whenever its own field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub prompt: String,
    pub placeholder: &'static str,
    pub submit: SubmitButton,
    pub error: Option<String>,
    pub loading: bool,
    pub summary: Option<String>,
    pub drafts: Vec<DraftSection>,
}

impl View {
    /// True when a summary or any draft is shown.
    pub fn has_result(&self) -> bool {
        self.summary.is_some() || !self.drafts.is_empty()
    }
}

pub fn render(state: &ViewState) -> View {
    let loading = state.is_loading();
    let result = state.result();

    let summary = result
        .map(|payload| payload.summary.clone())
        .filter(|summary| !summary.is_empty());

    let drafts = result
        .map(|payload| {
            payload
                .ordered_drafts()
                .into_iter()
                .map(|(platform, text)| DraftSection {
                    platform: platform.to_string(),
                    text: text.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    View {
        title: TITLE,
        prompt: state.prompt().to_string(),
        placeholder: PLACEHOLDER,
        submit: SubmitButton {
            label: if loading { SUBMITTING_LABEL } else { SUBMIT_LABEL },
            enabled: !loading,
        },
        error: state.error().map(str::to_string),
        loading,
        summary,
        drafts,
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

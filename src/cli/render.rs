//! Plain-text drawing of a [`View`] for the terminal.

use crate::app::View;
use crate::app::render::LOADING_TEXT;

/// Draw the error, loading and result blocks, each only when populated.
///
/// Returns an empty string when there is nothing to show.
pub fn format_view(view: &View) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(error) = &view.error {
        lines.push(format!("Error: {}", error));
    }

    if view.loading {
        lines.push(LOADING_TEXT.to_string());
    }

    if let Some(summary) = &view.summary {
        push_heading(&mut lines, "Summary", '=');
        lines.push(summary.clone());
    }

    if !view.drafts.is_empty() {
        push_heading(&mut lines, "Drafts", '=');
        for draft in &view.drafts {
            push_heading(&mut lines, &draft.platform, '-');
            lines.push(draft.text.clone());
        }
    }

    lines.join("\n")
}

fn push_heading(lines: &mut Vec<String>, title: &str, underline: char) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
    lines.push(underline.to_string().repeat(title.chars().count()));
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

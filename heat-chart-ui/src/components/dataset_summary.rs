//! One-line summary of what was loaded.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the number of daily records, month summaries and skipped rows.
#[component]
pub fn DatasetSummary() -> Element {
    let state = use_context::<AppState>();
    let Some((records, months, skipped, empty)) = state
        .data
        .read()
        .as_ref()
        .map(|d| (d.record_count, d.summaries.len(), d.skipped, d.is_empty()))
    else {
        return rsx! {};
    };

    rsx! {
        p {
            style: "margin: 0 0 12px 0; font-size: 12px; color: #666;",
            "{records} daily records in {months} months"
            if empty {
                span { " (no months to plot; charts show empty axes)" }
            }
            if skipped > 0 {
                span {
                    style: "color: #C62828;",
                    " ({skipped} malformed rows skipped)"
                }
            }
        }
    }
}

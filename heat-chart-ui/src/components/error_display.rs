//! Load failure panel shown in place of both charts.

use crate::state::LoadFailure;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub failure: LoadFailure,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let failure = props.failure;
    let title = failure.title();
    let hint = failure.hint();
    let detail = failure.detail().to_string();

    rsx! {
        div {
            class: "load-error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{title}" }
            pre {
                style: "margin: 6px 0; white-space: pre-wrap; font-size: 12px;",
                "{detail}"
            }
            p { style: "margin: 0; font-size: 12px; color: #666;", "{hint}" }
        }
    }
}

//! Placeholder while the daily CSV is fetched and aggregated.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Where the data is coming from, shown to the user.
    pub source: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "loading",
            style: "padding: 40px; text-align: center; color: #666;",
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10",
                    fill: "none",
                    stroke: "#fd8d3c",
                    stroke_width: "3",
                    stroke_dasharray: "45 20",
                }
            }
            p { "Loading daily temperatures from {props.source}..." }
        }
    }
}

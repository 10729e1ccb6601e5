//! Text label positioned by the chart model.

use dioxus::prelude::*;
use heat_chart::TextLabel;

#[derive(Props, Clone, PartialEq)]
pub struct AxisLabelProps {
    pub label: TextLabel,
}

/// A single SVG axis label.
#[component]
pub fn AxisLabel(props: AxisLabelProps) -> Element {
    let label = props.label;
    rsx! {
        text {
            x: label.x,
            y: label.y,
            dy: label.dy,
            text_anchor: label.anchor.as_str(),
            style: "font-size: 12px;",
            "{label.text}"
        }
    }
}

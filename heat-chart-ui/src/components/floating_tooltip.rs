//! Floating tooltip rendered from a chart's `TooltipModel`.

use dioxus::prelude::*;
use heat_chart::TooltipModel;

#[derive(Props, Clone, PartialEq)]
pub struct FloatingTooltipProps {
    /// Tooltip state owned by the chart
    pub model: Signal<TooltipModel>,
}

/// Absolutely positioned label in page coordinates. Must not be placed
/// inside a positioned ancestor.
#[component]
pub fn FloatingTooltip(props: FloatingTooltipProps) -> Element {
    let model = props.model.read().clone();
    let (left, top) = model.position();
    let visibility = if model.is_visible() { "visible" } else { "hidden" };
    let style = format!(
        "position: absolute; visibility: {visibility}; top: {top}px; left: {left}px; \
         background-color: rgba(0, 0, 0, 1); color: white; padding: 5px; font-size: 10px; \
         pointer-events: none; white-space: nowrap;"
    );

    rsx! {
        div {
            class: "tooltip",
            style: "{style}",
            for line in model.lines().iter() {
                div { "{line}" }
            }
        }
    }
}

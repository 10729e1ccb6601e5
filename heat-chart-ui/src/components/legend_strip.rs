//! Vertical colour legend.

use crate::components::AxisLabel;
use dioxus::prelude::*;
use heat_chart::Legend;

#[derive(Props, Clone, PartialEq)]
pub struct LegendStripProps {
    pub legend: Legend,
    /// DOM id of the legend group
    pub id: Option<String>,
}

/// Swatches stacked top to bottom from the lowest to the highest value,
/// with the value labels carried by the legend. An empty legend draws an
/// empty group.
#[component]
pub fn LegendStrip(props: LegendStripProps) -> Element {
    let legend = props.legend;
    let (x, y) = (legend.x, legend.y);

    rsx! {
        g {
            id: props.id,
            class: "legend",
            transform: "translate({x},{y})",
            for (i, stop) in legend.stops.iter().enumerate() {
                rect {
                    key: "{i}",
                    x: "0",
                    y: stop.y,
                    width: legend.width,
                    height: stop.height,
                    fill: "{stop.fill}",
                }
            }
            for label in legend.labels.iter() {
                AxisLabel { key: "{label.y}", label: label.clone() }
            }
        }
    }
}

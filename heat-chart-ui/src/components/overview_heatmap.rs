//! Level 1 overview heatmap.

use crate::components::{AxisLabel, FloatingTooltip, LegendStrip};
use crate::state::AppState;
use dioxus::prelude::*;
use heat_chart::{HeatCell, OverviewLayout, OverviewScene, TooltipModel};

/// Overview grid with one cell per month-year, drawn into `svg#level-1`.
///
/// Redraws completely whenever the overview metric or the data changes.
#[component]
pub fn OverviewHeatmap() -> Element {
    let state = use_context::<AppState>();
    let tooltip = use_signal(TooltipModel::default);

    let metric = state.overview.read().selected();
    let scene = match &*state.data.read() {
        Some(data) => OverviewScene::build(&data.summaries, metric, &OverviewLayout::default()),
        None => return rsx! {},
    };
    let OverviewScene {
        width,
        height,
        origin: (ox, oy),
        month_labels,
        year_labels,
        cells,
        legend,
        ..
    } = scene;

    rsx! {
        svg {
            id: "level-1",
            width,
            height,
            g {
                transform: "translate({ox},{oy})",
                g {
                    class: "x-axis",
                    for label in month_labels.iter() {
                        AxisLabel { key: "{label.text}", label: label.clone() }
                    }
                }
                g {
                    class: "y-axis",
                    for label in year_labels.iter() {
                        AxisLabel { key: "{label.text}", label: label.clone() }
                    }
                }
                g {
                    class: "cells",
                    for cell in cells.iter() {
                        OverviewCell {
                            key: "{cell.year}-{cell.month}",
                            cell: cell.clone(),
                            tooltip,
                        }
                    }
                }
            }
            LegendStrip { legend }
        }
        FloatingTooltip { model: tooltip }
    }
}

#[derive(Props, Clone, PartialEq)]
struct OverviewCellProps {
    cell: HeatCell,
    tooltip: Signal<TooltipModel>,
}

#[component]
fn OverviewCell(props: OverviewCellProps) -> Element {
    let mut tooltip = props.tooltip;
    let cell = props.cell;
    let lines = cell.tooltip.clone();

    rsx! {
        rect {
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
            fill: "{cell.fill}",
            stroke: "white",
            stroke_width: "0.5",
            onmouseenter: move |evt: Event<MouseData>| {
                let point = evt.page_coordinates();
                tooltip.write().show(&lines, point.x, point.y);
            },
            onmouseleave: move |_| tooltip.write().hide(),
        }
    }
}

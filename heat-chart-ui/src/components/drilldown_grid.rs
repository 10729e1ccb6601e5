//! Level 2 drilldown grid with daily sparklines.

use crate::components::{AxisLabel, FloatingTooltip, LegendStrip};
use crate::state::AppState;
use dioxus::prelude::*;
use heat_chart::{DrilldownLayout, DrilldownScene, GridCell, TooltipModel};

/// Line styling shared by every cell of one scene.
#[derive(Debug, Clone, PartialEq)]
struct SparklineStyle {
    max_color: String,
    min_color: String,
    width: f64,
    cell_stroke: String,
}

impl SparklineStyle {
    fn from_scene(scene: &DrilldownScene) -> Self {
        Self {
            max_color: scene.max_line_color.clone(),
            min_color: scene.min_line_color.clone(),
            width: scene.line_width,
            cell_stroke: scene.cell_stroke.clone(),
        }
    }
}

/// Month × year grid of mini-charts inside `div#level-2-container`.
///
/// The tooltip is created once per mounted grid and shared by all cells.
#[component]
pub fn DrilldownGrid() -> Element {
    let state = use_context::<AppState>();
    let tooltip = use_signal(TooltipModel::default);

    let metric = state.drilldown.read().selected();
    let scene = match &*state.data.read() {
        Some(data) => DrilldownScene::build(&data.summaries, metric, &DrilldownLayout::default()),
        None => return rsx! {},
    };
    let style = SparklineStyle::from_scene(&scene);

    rsx! {
        div {
            id: "level-2-container",
            svg {
                width: scene.width,
                height: scene.height,
                g {
                    id: "x-axis",
                    for label in scene.year_labels.iter() {
                        AxisLabel { key: "{label.text}", label: label.clone() }
                    }
                }
                g {
                    id: "y-axis",
                    for label in scene.month_labels.iter() {
                        AxisLabel { key: "{label.text}", label: label.clone() }
                    }
                }
                g {
                    id: "grid-container",
                    for cell in scene.cells.iter() {
                        DrilldownCell {
                            key: "{cell.year}-{cell.month}",
                            cell: cell.clone(),
                            style: style.clone(),
                            tooltip,
                        }
                    }
                }
                LegendStrip { legend: scene.legend.clone(), id: "color-legend".to_string() }
            }
        }
        FloatingTooltip { model: tooltip }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DrilldownCellProps {
    cell: GridCell,
    style: SparklineStyle,
    tooltip: Signal<TooltipModel>,
}

/// One nested SVG per grid position; the nested viewport clips sparkline
/// points that fall outside the cell.
#[component]
fn DrilldownCell(props: DrilldownCellProps) -> Element {
    let mut tooltip = props.tooltip;
    let cell = props.cell;
    let style = props.style;

    let Some(filled) = cell.filled else {
        return rsx! {
            svg {
                class: "cell empty",
                x: cell.x,
                y: cell.y,
                width: cell.width,
                height: cell.height,
            }
        };
    };
    let lines = filled.tooltip.clone();

    rsx! {
        svg {
            class: "cell",
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
            onmouseenter: move |evt: Event<MouseData>| {
                let point = evt.page_coordinates();
                tooltip.write().show(&lines, point.x, point.y);
            },
            onmouseleave: move |_| tooltip.write().hide(),
            rect {
                width: cell.width,
                height: cell.height,
                fill: "{filled.fill}",
                stroke: "{style.cell_stroke}",
            }
            path {
                d: "{filled.max_line}",
                fill: "none",
                stroke: "{style.max_color}",
                stroke_width: style.width,
            }
            path {
                d: "{filled.min_line}",
                fill: "none",
                stroke: "{style.min_color}",
                stroke_width: style.width,
            }
        }
    }
}

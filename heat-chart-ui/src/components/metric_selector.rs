//! Radio group choosing which temperature extreme a chart is coloured by.

use crate::state::{AppState, ChartLevel};
use dioxus::prelude::*;
use heat_data::Metric;

#[derive(Props, Clone, PartialEq)]
pub struct MetricSelectorProps {
    /// The chart this selector drives
    pub level: ChartLevel,
}

/// Metric radio buttons for one chart level.
///
/// The change listener is registered with the level's `SelectionController`
/// once, after the selector first mounts. Later renders reuse that registration.
#[component]
pub fn MetricSelector(props: MetricSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let mut controller = state.selection(props.level);

    use_effect(move || {
        controller.write().listen();
    });

    let (group, current) = {
        let c = controller.read();
        (c.group(), c.selected())
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Color by: " }
            for metric in Metric::ALL {
                label {
                    key: "{metric}",
                    style: "display: flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "radio",
                        name: group,
                        value: metric.as_str(),
                        checked: metric == current,
                        onchange: move |evt: Event<FormData>| {
                            if let Some(selected) = controller.write().on_change(&evt.value()) {
                                log::info!("{} switched to {}", group, selected);
                            }
                        },
                    }
                    "{metric.label()}"
                }
            }
        }
    }
}

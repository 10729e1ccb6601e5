//! Chart model for the temperature heatmaps.
//!
//! This crate holds everything about the two chart levels that does not need
//! a browser, so it can be tested natively:
//! - `scale`: band scales, palettes and the sequential colour scale
//! - `layout`: chart geometry configuration
//! - `overview` / `drilldown`: scene builders producing positioned shapes
//! - `tooltip`: per-chart floating tooltip state
//! - `selection`: the metric selector controller

pub mod drilldown;
pub mod layout;
pub mod overview;
pub mod scale;
pub mod selection;
pub mod shapes;
pub mod tooltip;

pub use drilldown::{DrilldownScene, FilledCell, GridCell};
pub use layout::{DrilldownLayout, OverviewLayout};
pub use overview::{HeatCell, OverviewScene};
pub use scale::{BandScale, Palette, Rgb, SequentialScale};
pub use selection::SelectionController;
pub use shapes::{Legend, LegendStop, TextLabel};
pub use tooltip::TooltipModel;

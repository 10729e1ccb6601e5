//! Drawing primitives shared by both chart levels, plus the colour legend.

use crate::scale::SequentialScale;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// SVG `text-anchor` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// A positioned piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
    /// SVG `dy` offset, e.g. `"1em"`.
    pub dy: &'static str,
}

impl TextLabel {
    pub fn new(x: f64, y: f64, text: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor,
            dy: "0",
        }
    }

    pub fn with_dy(mut self, dy: &'static str) -> Self {
        self.dy = dy;
        self
    }
}

/// One swatch of a vertical legend, relative to the legend origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStop {
    pub y: f64,
    pub height: f64,
    pub value: f64,
    pub fill: String,
}

/// Vertical colour legend: low values at the top, high at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stops: Vec<LegendStop>,
    /// Value labels, relative to the legend origin.
    pub labels: Vec<TextLabel>,
}

impl Legend {
    /// Legend of `stop_count` equal swatches spanning the scale's domain.
    /// Without a scale (no data) the legend has no swatches and no labels.
    pub fn build(
        scale: Option<&SequentialScale>,
        origin: (f64, f64),
        size: (f64, f64),
        stop_count: usize,
    ) -> Self {
        let (width, height) = size;
        let stops = match scale {
            Some(scale) if stop_count > 0 => {
                let stop_height = height / stop_count as f64;
                (0..stop_count)
                    .map(|i| {
                        let t = if stop_count > 1 {
                            i as f64 / (stop_count - 1) as f64
                        } else {
                            0.5
                        };
                        let value = scale.value_at(t);
                        LegendStop {
                            y: i as f64 * stop_height,
                            height: stop_height,
                            value,
                            fill: scale.fill(value),
                        }
                    })
                    .collect()
            }
            _ => Vec::new(),
        };
        Self {
            x: origin.0,
            y: origin.1,
            width,
            height,
            stops,
            labels: Vec::new(),
        }
    }

    /// Add min/max value labels at the top and bottom ends, `gap` to the right.
    pub fn with_end_labels(mut self, scale: Option<&SequentialScale>, gap: f64) -> Self {
        if let Some(scale) = scale {
            let x = self.width + gap;
            self.labels = vec![
                TextLabel::new(x, 0.0, format_value(scale.min()), Anchor::Start),
                TextLabel::new(x, self.height, format_value(scale.max()), Anchor::Start),
            ];
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Format a temperature without a trailing `.0` for whole numbers.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Format a temperature with its unit, e.g. `"15°C"`.
pub fn format_celsius(value: f64) -> String {
    format!("{}°C", format_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Palette;

    #[test]
    fn legend_spans_scale_domain() {
        let scale = SequentialScale::new((-5.0, 13.0), Palette::Blues);
        let legend = Legend::build(Some(&scale), (10.0, 20.0), (30.0, 200.0), 10);
        assert_eq!(legend.stops.len(), 10);
        assert_eq!(legend.stops[0].value, -5.0);
        assert_eq!(legend.stops[9].value, 13.0);
        assert_eq!(legend.stops[0].fill, Palette::Blues.low().to_string());
        assert_eq!(legend.stops[9].fill, Palette::Blues.high().to_string());
        assert_eq!(legend.stops[3].y, 60.0);
        assert_eq!(legend.stops[3].height, 20.0);
    }

    #[test]
    fn legend_end_labels() {
        let scale = SequentialScale::new((-5.0, 13.5), Palette::Blues);
        let legend = Legend::build(Some(&scale), (0.0, 0.0), (30.0, 200.0), 10)
            .with_end_labels(Some(&scale), 5.0);
        assert_eq!(legend.labels.len(), 2);
        assert_eq!(legend.labels[0].text, "-5");
        assert_eq!(legend.labels[0].x, 35.0);
        assert_eq!(legend.labels[0].y, 0.0);
        assert_eq!(legend.labels[1].text, "13.5");
        assert_eq!(legend.labels[1].y, 200.0);
    }

    #[test]
    fn legend_without_data_is_empty() {
        let legend = Legend::build(None, (0.0, 0.0), (30.0, 200.0), 10).with_end_labels(None, 5.0);
        assert!(legend.is_empty());
        assert!(legend.labels.is_empty());
    }

    #[test]
    fn celsius_formatting() {
        assert_eq!(format_celsius(15.0), "15°C");
        assert_eq!(format_celsius(-1.5), "-1.5°C");
    }
}

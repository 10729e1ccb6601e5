//! Positional and colour scales.
//!
//! [`BandScale`] follows the d3 band scale math (shared inner/outer padding,
//! centred alignment) so cell positions match what the charts were designed
//! around. [`SequentialScale`] maps a numeric range onto a d3 sequential scheme.

use heat_data::{extent, Metric, MonthSummary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps an ordered set of categories onto evenly spaced bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<T: PartialEq> BandScale<T> {
    /// Band scale over `range` where `padding` applies both between bands and
    /// at the outer edges, as a fraction of the step.
    pub fn new(domain: Vec<T>, range: (f64, f64), padding: f64) -> Self {
        Self::with_padding(domain, range, padding, padding)
    }

    /// Band scale with separate inner and outer padding. Leftover space is
    /// split evenly on both ends.
    pub fn with_padding(domain: Vec<T>, range: (f64, f64), inner: f64, outer: f64) -> Self {
        let inner = inner.clamp(0.0, 1.0);
        let outer = outer.max(0.0);
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - inner + outer * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - inner)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - inner),
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start of the band at `index` in the domain.
    pub fn position_at(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Start of the band for `value`, `None` if it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == value)
            .map(|i| self.position_at(i))
    }

    /// Middle of the band for `value`.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth / 2.0)
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<colorous::Color> for Rgb {
    fn from(c: colorous::Color) -> Self {
        Rgb::new(c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Sequential colour scheme, evaluated through the d3 gradients in `colorous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Warm ramp used for maximum temperatures.
    Oranges,
    /// Cool ramp used for minimum temperatures.
    Blues,
}

impl Palette {
    pub fn for_metric(metric: Metric) -> Palette {
        match metric {
            Metric::MaxTemperature => Palette::Oranges,
            Metric::MinTemperature => Palette::Blues,
        }
    }

    fn gradient(self) -> colorous::Gradient {
        match self {
            Palette::Oranges => colorous::ORANGES,
            Palette::Blues => colorous::BLUES,
        }
    }

    /// Colour at `t` in `[0, 1]`; out-of-range input is clamped.
    pub fn at(self, t: f64) -> Rgb {
        self.gradient().eval_continuous(t.clamp(0.0, 1.0)).into()
    }

    pub fn low(self) -> Rgb {
        self.at(0.0)
    }

    pub fn high(self) -> Rgb {
        self.at(1.0)
    }
}

/// Continuous mapping from a numeric domain onto a [`Palette`].
///
/// Values outside the domain clamp to the palette ends. A degenerate domain
/// (`min == max`) maps every value to the palette midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    pub palette: Palette,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), palette: Palette) -> Self {
        Self { domain, palette }
    }

    /// Colour scale for `metric` over its extent in `summaries`.
    /// `None` when there is nothing to scale.
    pub fn for_metric(summaries: &[MonthSummary], metric: Metric) -> Option<Self> {
        extent(summaries, metric).map(|domain| Self::new(domain, Palette::for_metric(metric)))
    }

    pub fn min(&self) -> f64 {
        self.domain.0
    }

    pub fn max(&self) -> f64 {
        self.domain.1
    }

    /// Normalised position of `value` in the domain, in `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        let (lo, hi) = self.domain;
        if hi == lo {
            return 0.5;
        }
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    }

    /// Inverse of [`normalize`](Self::normalize) for `t` in `[0, 1]`.
    pub fn value_at(&self, t: f64) -> f64 {
        let (lo, hi) = self.domain;
        lo + (hi - lo) * t
    }

    pub fn color(&self, value: f64) -> Rgb {
        self.palette.at(self.normalize(value))
    }

    /// Colour as an SVG fill string.
    pub fn fill(&self, value: f64) -> String {
        self.color(value).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_without_padding() {
        let scale = BandScale::new((2008..=2017).collect(), (0.0, 870.0), 0.0);
        assert_eq!(scale.step(), 87.0);
        assert_eq!(scale.bandwidth(), 87.0);
        assert_eq!(scale.position(&2008), Some(0.0));
        assert_eq!(scale.position(&2017), Some(783.0));
        assert_eq!(scale.center(&2009), Some(130.5));
        assert_eq!(scale.position(&2020), None);
    }

    #[test]
    fn band_scale_with_padding_is_centred() {
        let scale = BandScale::new((1..=12).collect::<Vec<u32>>(), (0.0, 870.0), 0.05);
        let step = 870.0 / 12.05;
        assert!((scale.step() - step).abs() < 1e-9);
        assert!((scale.bandwidth() - step * 0.95).abs() < 1e-9);
        // Outer padding is the same on both sides
        let first = scale.position(&1).unwrap();
        let last_end = scale.position(&12).unwrap() + scale.bandwidth();
        assert!((first - (870.0 - last_end)).abs() < 1e-9);
        assert!(first > 0.0);
    }

    #[test]
    fn band_scale_empty_domain() {
        let scale: BandScale<i32> = BandScale::new(Vec::new(), (0.0, 100.0), 0.05);
        assert!(scale.domain().is_empty());
        assert_eq!(scale.position(&1), None);
    }

    #[test]
    fn rgb_formats_as_svg_hex() {
        assert_eq!(Rgb::new(0x7f, 0x27, 0x04).to_string(), "#7f2704");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
    }

    fn close_to(actual: Rgb, expected: Rgb) -> bool {
        let near = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 2;
        near(actual.r, expected.r) && near(actual.g, expected.g) && near(actual.b, expected.b)
    }

    #[test]
    fn palettes_follow_d3_schemes() {
        // interpolateOranges / interpolateBlues at 0, 0.5 and 1
        assert!(close_to(Palette::Oranges.low(), Rgb::new(0xff, 0xf5, 0xeb)));
        assert!(close_to(Palette::Oranges.at(0.5), Rgb::new(0xfd, 0x8d, 0x3c)));
        assert!(close_to(Palette::Oranges.high(), Rgb::new(0x7f, 0x27, 0x04)));
        assert!(close_to(Palette::Blues.low(), Rgb::new(0xf7, 0xfb, 0xff)));
        assert!(close_to(Palette::Blues.at(0.5), Rgb::new(0x6b, 0xae, 0xd6)));
        assert!(close_to(Palette::Blues.high(), Rgb::new(0x08, 0x30, 0x6b)));
    }

    #[test]
    fn oranges_midrange_is_saturated() {
        let mid = Palette::Oranges.at(0.5);
        // A plain RGB blend of the end colours lands on a brownish grey
        assert!(mid.r > 0xf0, "{}", mid);
        assert!(mid.r > mid.g && mid.g > mid.b, "{}", mid);
    }

    #[test]
    fn sequential_scale_ends_and_clamp() {
        let scale = SequentialScale::new((-5.0, 15.0), Palette::Blues);
        assert_eq!(scale.color(-5.0), Palette::Blues.low());
        assert_eq!(scale.color(15.0), Palette::Blues.high());
        assert_eq!(scale.color(-50.0), Palette::Blues.low());
        assert_eq!(scale.color(50.0), Palette::Blues.high());
        assert_eq!(scale.normalize(5.0), 0.5);
        assert_eq!(scale.value_at(0.25), 0.0);
    }

    #[test]
    fn sequential_scale_is_monotonic() {
        let scale = SequentialScale::new((0.0, 40.0), Palette::Oranges);
        let colors: Vec<Rgb> = (0..=8).map(|i| scale.color(i as f64 * 5.0)).collect();
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
            // Oranges gets darker towards the high end
            let sum = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
            assert!(sum(pair[1]) < sum(pair[0]));
        }
    }

    #[test]
    fn sequential_scale_degenerate_domain_uses_midpoint() {
        let scale = SequentialScale::new((7.0, 7.0), Palette::Oranges);
        let mid = Palette::Oranges.at(0.5);
        assert_eq!(scale.color(7.0), mid);
        assert_eq!(scale.color(-100.0), mid);
        assert_eq!(scale.fill(7.0), mid.to_string());
    }

    #[test]
    fn palette_for_metric() {
        assert_eq!(Palette::for_metric(Metric::MaxTemperature), Palette::Oranges);
        assert_eq!(Palette::for_metric(Metric::MinTemperature), Palette::Blues);
    }
}

//! Floating tooltip state.
//!
//! Each chart owns exactly one [`TooltipModel`]; hovering a cell rewrites its
//! content and position instead of creating another tooltip.

use serde::Serialize;

/// Distance between the pointer and the tooltip's top-left corner.
pub const POINTER_OFFSET: f64 = 5.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TooltipModel {
    visible: bool,
    left: f64,
    top: f64,
    lines: Vec<String>,
}

impl TooltipModel {
    /// Show `lines` next to a pointer at page coordinates `(page_x, page_y)`.
    pub fn show(&mut self, lines: &[String], page_x: f64, page_y: f64) {
        self.visible = true;
        self.left = page_x + POINTER_OFFSET;
        self.top = page_y + POINTER_OFFSET;
        self.lines = lines.to_vec();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `(left, top)` in page coordinates.
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_show_and_hide() {
        let mut tip = TooltipModel::default();
        assert!(!tip.is_visible());

        let lines = vec!["Jan-2010".to_string(), "Min Temp: -1°C".to_string()];
        tip.show(&lines, 100.0, 40.0);
        assert!(tip.is_visible());
        assert_eq!(tip.position(), (105.0, 45.0));
        assert_eq!(tip.lines(), lines.as_slice());

        tip.hide();
        assert!(!tip.is_visible());
        // Content is kept for the next show; only visibility changes
        assert_eq!(tip.lines().len(), 2);
    }

    #[test]
    fn tooltip_is_reused_between_cells() {
        let mut tip = TooltipModel::default();
        tip.show(&["Jan-2010".to_string()], 0.0, 0.0);
        tip.show(&["Feb-2010".to_string()], 10.0, 10.0);
        assert_eq!(tip.lines(), ["Feb-2010".to_string()].as_slice());
        assert_eq!(tip.position(), (15.0, 15.0));
    }
}

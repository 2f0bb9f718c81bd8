use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{self, Point, fmt_num};

/// Margin added around the fitted key points, as a fraction of the larger extent.
pub const AUTO_MARGIN_FRACTION: f64 = 0.3;

/// Visible data window of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRange {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}
impl PlotRange {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        PlotRange{x_min, y_min, x_max, y_max}
    }

    /// Fit a window to a set of points.
    /// The bounding box grows on every side by 30% of its larger extent,
    /// so a thin spread of points still gets room in the short direction.
    pub fn fit(points: &[Point]) -> Self {
        let (x_min, y_min, x_max, y_max) = match geo_2d::bounds(points) {
            Some(bounds) => bounds,
            None => return PlotRange::default(),
        };
        let width = x_max - x_min;
        let height = y_max - y_min;
        let margin = width.max(height) * AUTO_MARGIN_FRACTION;

        PlotRange{
            x_min: x_min - margin,
            y_min: y_min - margin,
            x_max: x_max + margin,
            y_max: y_max + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check that the window has a finite, non-empty area.
    pub fn is_drawable(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }
}
impl Default for PlotRange {
    fn default() -> Self {
        PlotRange{x_min: -2.0, y_min: -2.0, x_max: 2.0, y_max: 2.0}
    }
}
impl fmt::Display for PlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]",
            fmt_num(self.x_min), fmt_num(self.x_max),
            fmt_num(self.y_min), fmt_num(self.y_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_adds_thirty_percent_of_larger_extent() {
        let points = [
            Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0),
            Point::new(0.3, 0.3), Point::new(2.0, 2.0),
        ];
        let range = PlotRange::fit(&points);
        let margin = 0.3 * 2.0;
        assert_eq!(range, PlotRange::new(-margin, -margin, 2.0 + margin, 2.0 + margin));
    }

    #[test]
    fn fit_uses_larger_extent_for_both_axes() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 1.0)];
        let range = PlotRange::fit(&points);
        assert_eq!(range.x_min, -3.0);
        assert_eq!(range.x_max, 13.0);
        assert_eq!(range.y_min, -3.0);
        assert_eq!(range.y_max, 4.0);
    }
}

use std::ops::Sub;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{Angle, GeoVector};

/// A point in the plane.
/// Serialized as an `[x, y]` pair, which is how triangulation results store them.
/// Deserializes from either `[x, y]` or `{x: .., y: ..}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(from = "PointRepr", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).norm()
    }

    /// Point at `radius` from this one, in the direction of `angle` (radians, from +x).
    pub fn polar_offset(&self, radius: f64, angle: Angle) -> Point {
        Point{
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    /// Check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
impl fmt::Display for Point {
    /// Plain form is `(x, y)` in shortest round-trip notation;
    /// with an explicit precision, `{:.2}` gives `(x.xx, y.yy)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y),
            None => write!(f, "({}, {})", fmt_num(self.x), fmt_num(self.y)),
        }
    }
}

/// Format a number the way result files print it:
/// shortest round-trip digits, with integral values keeping one decimal (`2.0`, not `2`).
pub fn fmt_num(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    }
    else {
        format!("{}", value)
    }
}

/// Accepted on-disk shapes for a point.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Pair([f64; 2]),
    Named{x: f64, y: f64},
}
impl From<PointRepr> for Point {
    fn from(repr: PointRepr) -> Self {
        match repr {
            PointRepr::Pair([x, y]) => Point{x, y},
            PointRepr::Named{x, y} => Point{x, y},
        }
    }
}
impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

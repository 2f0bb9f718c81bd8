use serde::Serialize;

use crate::geo_2d::{self, Angle, Point, FULL_TURN};

/// Number of samples along each arc.
pub const ARC_SAMPLES: usize = 100;
/// Arc radius as a fraction of the shorter leg.
pub const ARC_RADIUS_FRACTION: f64 = 0.25;
/// Label distance from the vertex, relative to the arc radius.
pub const LABEL_RADIUS_FACTOR: f64 = 1.3;

/// Arc marking the angle subtended at a vertex by two points.
///
/// The sweep follows the sign of the cross product of the two legs:
/// clockwise when it is negative, counterclockwise otherwise. The end angle
/// is moved by a full turn where needed so that `end <= start` for a
/// clockwise sweep and `end >= start` for a counterclockwise one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleArc {
    pub center: Point,
    /// Heading of the first leg, radians.
    pub start: Angle,
    /// Heading of the second leg after sweep adjustment, radians.
    pub end: Angle,
    pub radius: f64,
    pub clockwise: bool,
}
impl AngleArc {
    /// Build the arc at `center` from the leg towards `from` to the leg towards `to`.
    pub fn new(center: Point, from: Point, to: Point) -> Self {
        let v1 = from - center;
        let v2 = to - center;

        let start = v1.heading();
        let mut end = v2.heading();

        let clockwise = v1.cross(&v2) < 0.0;
        if clockwise {
            if end > start {
                end -= FULL_TURN;
            }
        }
        else if end < start {
            end += FULL_TURN;
        }

        let radius = v1.norm().min(v2.norm()) * ARC_RADIUS_FRACTION;

        AngleArc{center, start, end, radius, clockwise}
    }

    /// Angle swept from start to end, signed (negative when clockwise).
    pub fn sweep(&self) -> Angle {
        self.end - self.start
    }

    /// Heading halfway along the arc.
    pub fn mid_angle(&self) -> Angle {
        (self.start + self.end) / 2.0
    }

    /// Points along the arc, start and end included.
    pub fn samples(&self) -> Vec<Point> {
        geo_2d::linspace(self.start, self.end, ARC_SAMPLES)
            .into_iter()
            .map(|theta| self.center.polar_offset(self.radius, theta))
            .collect()
    }

    /// Where the angle value is written: just outside the arc, on its bisector.
    pub fn label_position(&self) -> Point {
        self.center.polar_offset(self.radius * LABEL_RADIUS_FACTOR, self.mid_angle())
    }
}

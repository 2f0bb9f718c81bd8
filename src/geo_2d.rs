/*!
 * Planar geometry used by the diagram renderer.
 *
 * Everything here is `f64`: coordinates come straight from the
 * triangulation result files and are printed back in labels, so no
 * precision is given up on the way through.
 */

mod point;
mod vector;

pub use point::{Point, fmt_num};
pub use vector::GeoVector;

/// Angle type in radians (alias for f64).
pub type Angle = f64;

/// Angle type in degrees, as carried by triangulation results (alias for f64).
pub type Degrees = f64;

/// A full turn, in radians.
pub const FULL_TURN: Angle = 2.0 * std::f64::consts::PI;

/// Axis-aligned bounds of a set of points.
/// Returns `(x_min, y_min, x_max, y_max)`, or `None` for an empty set.
pub fn bounds<'a, I>(points: I) -> Option<(f64, f64, f64, f64)>
where I: IntoIterator<Item = &'a Point>
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let init = (first.x, first.y, first.x, first.y);
    Some(iter.fold(init, |(x_min, y_min, x_max, y_max), p| {
        (x_min.min(p.x), y_min.min(p.y), x_max.max(p.x), y_max.max(p.y))
    }))
}

/// Evenly spaced samples from `start` to `end`, both inclusive.
/// A single sample returns `start`; zero samples return an empty list.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_triangle() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, -2.0), Point::new(-0.5, 3.0)];
        assert_eq!(bounds(&points), Some((-0.5, -2.0, 1.0, 3.0)));
    }

    #[test]
    fn bounds_of_nothing() {
        let points: [Point; 0] = [];
        assert_eq!(bounds(&points), None);
    }

    #[test]
    fn linspace_hits_both_ends() {
        let samples = linspace(-1.0, 2.0, 100);
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], -1.0);
        assert_eq!(samples[99], 2.0);
        assert!(samples.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }
}

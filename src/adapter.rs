mod proc_errors;

use clap::ValueEnum;
use log::info;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, EnumString};

use crate::diagram::{self, CircleDescriptor, CircleOverlays, DiagramInput, Scene};
use crate::geo_2d::{Degrees, Point};

// Re-export errors
pub use proc_errors::{
    AdapterError,
    ProcResult,
    err_str,
};

/// How the third angle is derived from the two measured ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize, ValueEnum, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum ClosureRule {
    /// `-(a + b)`: the signed angles around the point sum to zero.
    #[default]
    NegatedSum,
    /// `360 - (a + b)`: the unsigned angles around the point make a full turn.
    FullTurn,
}
impl ClosureRule {
    /// Derive the third angle from the first two.
    pub fn third_angle(&self, angle12: Degrees, angle23: Degrees) -> Degrees {
        match self {
            ClosureRule::NegatedSum => -(angle12 + angle23),
            ClosureRule::FullTurn => 360.0 - (angle12 + angle23),
        }
    }
}

/// Output of the triangulation solver, as written to a result file.
/// Only the fields the diagram needs are read; anything else in the file is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangulationResult {
    /// Observer positions; the first one is drawn.
    pub observers: Vec<Point>,
    /// Reference points, already in the order the angles refer to.
    pub points: [Point; 3],
    /// Solver output.
    pub triangulated_point: Point,
    /// Measured angles p1-p2 and p2-p3, with simulated error, in degrees.
    pub angles_between_points_with_simulated_error: [Degrees; 2],
    /// Intermediate circles of the construction, keyed by method name.
    #[serde(default)]
    pub centers_with_radii: CircleOverlays,
}
impl TriangulationResult {
    /// Build the renderer input for this result.
    /// Circles are always shown; the plot range is left at the renderer default.
    pub fn to_diagram_input(&self, closure: ClosureRule) -> ProcResult<DiagramInput> {
        let observer = match self.observers.first() {
            Some(observer) => *observer,
            None => err_str("Result has no observers")?,
        };
        let [p1, p2, p3] = self.points;
        let [angle12, angle23] = self.angles_between_points_with_simulated_error;
        let angle31 = closure.third_angle(angle12, angle23);

        Ok(DiagramInput{
            observer,
            p1,
            p2,
            p3,
            triangulated_point: self.triangulated_point,
            angle12,
            angle23,
            angle31,
            circles: Some(self.centers_with_radii.clone()),
            show_circles: true,
            plot_range: DiagramInput::default_plot_range(),
            debug: false,
        })
    }

    /// A filled-in example, used by `tridiag example`.
    pub fn example() -> Self {
        let mut centers_with_radii = CircleOverlays::new();
        centers_with_radii.push("Inscribed", CircleDescriptor{
            centers: vec![Point::new(0.5, -0.5), Point::new(-0.5, 0.5)],
            radius: 0.7071,
        });
        TriangulationResult{
            observers: vec![Point::new(2.0, 2.0)],
            points: [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            triangulated_point: Point::new(0.3, 0.3),
            angles_between_points_with_simulated_error: [90.0, 135.0],
            centers_with_radii,
        }
    }
}

/// Render the diagram of a triangulation result.
/// Returns a `ProcResult` with the `Scene` or an `Err`.
pub fn render_from_result(result: &TriangulationResult, closure: ClosureRule) -> ProcResult<Scene> {
    let input = result.to_diagram_input(closure)?;
    info!("Third angle by {} rule: {}", closure, input.angle31);
    Ok(diagram::render(&input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::PlotRange;

    #[test]
    fn negated_sum_scenario() {
        let result = TriangulationResult::example();
        let input = result.to_diagram_input(ClosureRule::NegatedSum).unwrap();
        assert_eq!(input.observer, Point::new(2.0, 2.0));
        assert_eq!([input.p1, input.p2, input.p3], result.points);
        assert_eq!(input.angle12, 90.0);
        assert_eq!(input.angle23, 135.0);
        assert_eq!(input.angle31, -225.0);
        assert!(input.show_circles);
        assert_eq!(input.plot_range, Some(PlotRange::default()));

        let scene = render_from_result(&result, ClosureRule::NegatedSum).unwrap();
        assert_eq!(scene.title, "Point Triangulated with Angles: 90.0°, 135.0°, -225.0°");
        assert_eq!(scene.circle_count(), 2);
    }

    #[test]
    fn full_turn_closes_to_360() {
        let input = TriangulationResult::example().to_diagram_input(ClosureRule::FullTurn).unwrap();
        assert_eq!(input.angle31, 135.0);
        assert_eq!(input.angle12 + input.angle23 + input.angle31, 360.0);
    }

    #[test]
    fn first_observer_is_used() {
        let mut result = TriangulationResult::example();
        result.observers = vec![Point::new(-1.0, 4.0), Point::new(9.0, 9.0)];
        let input = result.to_diagram_input(ClosureRule::default()).unwrap();
        assert_eq!(input.observer, Point::new(-1.0, 4.0));
    }

    #[test]
    fn no_observer_is_an_error() {
        let mut result = TriangulationResult::example();
        result.observers.clear();
        assert!(matches!(
            result.to_diagram_input(ClosureRule::NegatedSum),
            Err(AdapterError::MalformedResult(_))
        ));
    }

    #[test]
    fn loads_result_file_shape() {
        let json = r#"{
            "observers": [[2, 2]],
            "points": [[0, 0], [1, 0], [0, 1]],
            "triangulated_point": [0.3, 0.3],
            "angles_between_points_with_simulated_error": [90.5, 134.5],
            "angles_between_points_ground_truth": [90, 135],
            "centers_with_radii": {
                "Method 1": {"Centers": [[0.5, 0.5]], "Radius": 0.5},
                "Method 2": {"Centers": [[0, 0], [1, 1]], "Radius": 150}
            }
        }"#;
        let result: TriangulationResult = serde_json::from_str(json).unwrap();
        let scene = render_from_result(&result, ClosureRule::NegatedSum).unwrap();
        assert_eq!(scene.title, "Point Triangulated with Angles: 90.5°, 134.5°, -225.0°");
        // Method 2 is over the radius limit.
        assert_eq!(scene.circle_count(), 1);
    }

    #[test]
    fn wrong_point_count_fails_to_load() {
        let json = r#"{
            "observers": [[2, 2]],
            "points": [[0, 0], [1, 0]],
            "triangulated_point": [0.3, 0.3],
            "angles_between_points_with_simulated_error": [90, 135]
        }"#;
        assert!(serde_json::from_str::<TriangulationResult>(json).is_err());
    }

    #[test]
    fn closure_rule_names() {
        assert_eq!("full_turn".parse::<ClosureRule>().unwrap(), ClosureRule::FullTurn);
        assert!("sideways".parse::<ClosureRule>().is_err());
        assert_eq!(ClosureRule::NegatedSum.to_string(), "negated_sum");
    }
}

use std::fmt;

use serde::{Serialize, Deserialize, Deserializer, Serializer};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use crate::diagram::{self, PlotRange};
use crate::geo_2d::{Degrees, Point};

/// Full input of one diagram.
/// Every field maps directly to something drawn; nothing is computed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramInput {
    /// Where the observer stood.
    #[serde(alias = "obs")]
    pub observer: Point,

    /// First reference point.
    pub p1: Point,
    /// Second reference point.
    pub p2: Point,
    /// Third reference point.
    pub p3: Point,

    /// Point produced by the triangulation solver.
    #[serde(alias = "valid_point")]
    pub triangulated_point: Point,

    /// Angle subtended by p1 and p2 at the triangulated point, in degrees.
    pub angle12: Degrees,
    /// Angle subtended by p2 and p3, in degrees.
    pub angle23: Degrees,
    /// Angle subtended by p3 and p1, in degrees.
    pub angle31: Degrees,

    /// Named circle overlays from the triangulation construction.
    #[serde(default, alias = "centers_with_radii", skip_serializing_if = "Option::is_none")]
    pub circles: Option<CircleOverlays>,

    /// Draw the circle overlays.
    #[serde(default)]
    pub show_circles: bool,

    /// Visible window. Missing gives the default square, `null`/`"auto"` fits the data.
    #[serde(
        default = "DiagramInput::default_plot_range",
        alias = "plot_ranges",
        deserialize_with = "deserialize_plot_range",
        serialize_with = "serialize_plot_range",
    )]
    pub plot_range: Option<PlotRange>,

    /// Log the computed geometry while rendering.
    #[serde(default)]
    pub debug: bool,
}
impl DiagramInput {
    pub fn default_plot_range() -> Option<PlotRange> {
        Some(PlotRange::default())
    }

    /// The reference points in drawing order.
    pub fn reference_points(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// The five points the automatic plot window is fitted to.
    pub fn key_points(&self) -> [Point; 5] {
        [self.p1, self.p2, self.p3, self.triangulated_point, self.observer]
    }

    /// Check that the input can be drawn.
    /// Rejects non-finite coordinates and an empty or non-finite plot window.
    pub fn validate(&self) -> diagram::ProcResult<()> {
        let named = [
            ("observer", self.observer),
            ("p1", self.p1),
            ("p2", self.p2),
            ("p3", self.p3),
            ("triangulated_point", self.triangulated_point),
        ];
        for (name, point) in named.iter() {
            if !point.is_finite() {
                diagram::err_geometry(&format!("Point {} has non-finite coordinates: {}", name, point))?;
            }
        }

        let window = self.plot_window();
        if !window.is_drawable() {
            diagram::err_geometry(&format!("Plot window has no visible area: {}", window))?;
        }
        Ok(())
    }

    /// The window that will be drawn: the explicit plot range, or one fitted to the key points.
    pub fn plot_window(&self) -> PlotRange {
        match self.plot_range {
            Some(range) => range,
            None => PlotRange::fit(&self.key_points()),
        }
    }

    /// A filled-in example, used by `tridiag example`.
    pub fn example() -> Self {
        DiagramInput{
            observer: Point::new(2.0, 2.0),
            p1: Point::new(0.0, 0.0),
            p2: Point::new(1.0, 0.0),
            p3: Point::new(0.0, 1.0),
            triangulated_point: Point::new(0.3, 0.3),
            angle12: 90.0,
            angle23: 135.0,
            angle31: 135.0,
            circles: Some(CircleOverlays::from(vec![
                ("Method A".to_string(), CircleDescriptor{
                    centers: vec![Point::new(0.5, 0.0), Point::new(0.5, 0.5)],
                    radius: 0.5,
                }),
            ])),
            show_circles: true,
            plot_range: None,
            debug: false,
        }
    }
}

/// A group of circles sharing one radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleDescriptor {
    /// Candidate centers, one circle each.
    #[serde(alias = "Centers")]
    pub centers: Vec<Point>,
    /// Radius shared by every circle of the group.
    #[serde(alias = "Radius")]
    pub radius: f64,
}

/// Circle groups keyed by name, in the order they were written.
/// Serialized as a map; the order picks each group's colour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleOverlays(Vec<(String, CircleDescriptor)>);
impl CircleOverlays {
    pub fn new() -> Self {
        CircleOverlays(Vec::new())
    }

    /// Add a group. A repeated name keeps both entries, as they were both written.
    pub fn push(&mut self, name: &str, descriptor: CircleDescriptor) {
        self.0.push((name.to_string(), descriptor));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CircleDescriptor)> {
        self.0.iter().map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<Vec<(String, CircleDescriptor)>> for CircleOverlays {
    fn from(groups: Vec<(String, CircleDescriptor)>) -> Self {
        CircleOverlays(groups)
    }
}
impl Serialize for CircleOverlays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, descriptor) in self.0.iter() {
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}
impl<'de> Deserialize<'de> for CircleOverlays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        struct OverlayVisitor;

        impl<'de> Visitor<'de> for OverlayVisitor {
            type Value = CircleOverlays;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map from group name to {{centers, radius}}")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where A: MapAccess<'de>
            {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, descriptor)) = access.next_entry::<String, CircleDescriptor>()? {
                    groups.push((name, descriptor));
                }
                Ok(CircleOverlays(groups))
            }
        }

        deserializer.deserialize_map(OverlayVisitor)
    }
}

/// On-disk forms of the plot range: bounds, or the `auto` keyword (TOML has no null).
#[derive(Deserialize)]
#[serde(untagged)]
enum PlotRangeRepr {
    Bounds(PlotRange),
    Keyword(String),
}

fn deserialize_plot_range<'de, D>(deserializer: D) -> Result<Option<PlotRange>, D::Error>
where D: Deserializer<'de>
{
    match Option::<PlotRangeRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PlotRangeRepr::Bounds(range)) => Ok(Some(range)),
        Some(PlotRangeRepr::Keyword(keyword)) if keyword == "auto" => Ok(None),
        Some(PlotRangeRepr::Keyword(keyword)) => Err(serde::de::Error::custom(
            format!("plot_range must be bounds or \"auto\", got \"{}\"", keyword)
        )),
    }
}

fn serialize_plot_range<S>(range: &Option<PlotRange>, serializer: S) -> Result<S::Ok, S::Error>
where S: Serializer
{
    match range {
        Some(range) => range.serialize(serializer),
        None => serializer.serialize_str("auto"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = "
observer: [2, 2]
p1: [0, 0]
p2: [1, 0]
p3: [0, 1]
valid_point: [0.3, 0.3]
angle12: 90
angle23: 135
angle31: 135
";

    #[test]
    fn missing_plot_range_is_default_square() {
        let input: DiagramInput = serde_yaml::from_str(MINIMAL_YAML).unwrap();
        assert_eq!(input.plot_range, Some(PlotRange::new(-2.0, -2.0, 2.0, 2.0)));
        assert!(!input.show_circles);
        assert!(input.circles.is_none());
        assert_eq!(input.triangulated_point, Point::new(0.3, 0.3));
    }

    #[test]
    fn null_or_auto_plot_range_fits_data() {
        let with_null = format!("{}plot_range: ~\n", MINIMAL_YAML);
        let input: DiagramInput = serde_yaml::from_str(&with_null).unwrap();
        assert_eq!(input.plot_range, None);

        let with_auto = format!("{}plot_range: auto\n", MINIMAL_YAML);
        let input: DiagramInput = serde_yaml::from_str(&with_auto).unwrap();
        assert_eq!(input.plot_range, None);

        let with_junk = format!("{}plot_range: tight\n", MINIMAL_YAML);
        assert!(serde_yaml::from_str::<DiagramInput>(&with_junk).is_err());
    }

    #[test]
    fn overlays_keep_document_order() {
        let json = r#"{
            "zeta": {"Centers": [[0, 0]], "Radius": 1.0},
            "alpha": {"centers": [[1, 1], [2, 2]], "radius": 2.5}
        }"#;
        let overlays: CircleOverlays = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = overlays.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(overlays.iter().nth(1).unwrap().1.centers.len(), 2);
    }

    #[test]
    fn example_survives_toml() {
        let example = DiagramInput::example();
        let text = toml::to_string_pretty(&example).unwrap();
        let back: DiagramInput = toml::from_str(&text).unwrap();
        assert_eq!(back.plot_range, None);
        assert_eq!(back.circles, example.circles);
    }

    #[test]
    fn validate_rejects_nan_point() {
        let mut input = DiagramInput::example();
        input.p2 = Point::new(f64::NAN, 0.0);
        assert!(matches!(input.validate(), Err(diagram::DiagramError::InvalidGeometry(_))));
    }

    #[test]
    fn validate_rejects_collapsed_auto_window() {
        let mut input = DiagramInput::example();
        let p = Point::new(1.0, 1.0);
        input.observer = p;
        input.p1 = p;
        input.p2 = p;
        input.p3 = p;
        input.triangulated_point = p;
        input.plot_range = None;
        assert!(input.validate().is_err());

        input.plot_range = DiagramInput::default_plot_range();
        assert!(input.validate().is_ok());
    }
}

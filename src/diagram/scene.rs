use serde::Serialize;

use crate::diagram::PlotRange;
use crate::geo_2d::Point;

/// Named colours used by the diagram (hex, SVG-ready).
pub mod palette {
    pub const RED: &str = "#ff0000";
    pub const BLUE: &str = "#0000ff";
    pub const GREEN: &str = "#008000";
    pub const PURPLE: &str = "#800080";
    pub const BLACK: &str = "#000000";
    pub const GRID: &str = "#b0b0b0";

    /// Colour cycle for circle overlay groups.
    pub const OVERLAY_CYCLE: &[&str] = &["#1f77b4", "#ff7f0e", "#2ca02c"];
}

/// Canvas size in pixels.
pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 800;

/// Line style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub dashed: bool,
    pub opacity: f64,
}
impl Stroke {
    pub fn solid(color: &'static str, width: f64) -> Self {
        Stroke{color, width, dashed: false, opacity: 1.0}
    }

    pub fn dashed(color: &'static str, width: f64) -> Self {
        Stroke{color, width, dashed: true, opacity: 1.0}
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Stroke{opacity, ..self}
    }
}

/// Scatter marker style. `radius` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub radius: f64,
    pub filled: bool,
    pub edge_width: f64,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

/// One drawing instruction, in data coordinates.
/// Anything carrying a non-empty `label` is a legend candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Markers {
        points: Vec<Point>,
        style: MarkerStyle,
        label: Option<String>,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
        label: Option<String>,
    },
    Circle {
        center: Point,
        radius: f64,
        stroke: Stroke,
        label: Option<String>,
    },
    Text {
        at: Point,
        text: String,
        anchor: TextAnchor,
        color: &'static str,
        size: f64,
    },
}
impl Primitive {
    /// The legend label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Primitive::Markers{label, ..}
            | Primitive::Polyline{label, ..}
            | Primitive::Circle{label, ..} => label.as_deref().filter(|label| !label.is_empty()),
            Primitive::Text{..} => None,
        }
    }

    /// Legend swatch for this primitive.
    fn swatch(&self) -> Option<Swatch> {
        match self {
            Primitive::Markers{style, ..} => Some(Swatch::Marker(*style)),
            Primitive::Polyline{stroke, ..} | Primitive::Circle{stroke, ..} => Some(Swatch::Line(*stroke)),
            Primitive::Text{..} => None,
        }
    }
}

/// What a legend row shows next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Swatch {
    Marker(MarkerStyle),
    Line(Stroke),
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

/// Everything one render call draws.
/// Built fresh for each diagram, then handed to a backend.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub window: PlotRange,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub primitives: Vec<Primitive>,
}
impl Scene {
    /// Start an empty scene over a data window.
    pub fn new(window: PlotRange, title: &str) -> Self {
        Scene{
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            window,
            title: title.to_string(),
            x_label: "X-axis".to_string(),
            y_label: "Y-axis".to_string(),
            grid: true,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Legend rows in drawing order.
    /// A row sits where its label first appears and shows the style of the last
    /// primitive carrying that label.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut legend: Vec<LegendEntry> = Vec::new();
        for (label, swatch) in self.primitives.iter().filter_map(|p| Some((p.label()?, p.swatch()?))) {
            match legend.iter_mut().find(|entry| entry.label == label) {
                Some(entry) => entry.swatch = swatch,
                None => legend.push(LegendEntry{label: label.to_string(), swatch}),
            }
        }
        legend
    }

    /// Count primitives of the `Circle` kind.
    pub fn circle_count(&self) -> usize {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Circle{..})).count()
    }
}

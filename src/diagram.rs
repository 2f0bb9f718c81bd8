pub mod backends;
pub mod scene;
pub mod view;
mod arc;
mod cfg;
mod proc_errors;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::geo_2d::{fmt_num, Degrees, Point};

// Re-export errors
pub use proc_errors::{
    DiagramError,
    ProcResult,
    err_str,
    err_geometry,
};
// Re-export input handling
pub use cfg::{
    DiagramInput,
    CircleDescriptor,
    CircleOverlays,
};
// Re-export geometry and scene types
pub use arc::AngleArc;
pub use view::PlotRange;
pub use scene::{Scene, Primitive, LegendEntry};
pub use backends::{BackendChoice, RenderBackend};

use scene::{palette, MarkerStyle, Stroke, TextAnchor};

/// Overlay groups with a radius at or above this are not drawn.
pub const MAX_CIRCLE_RADIUS: f64 = 100.0;

const LABEL_SIZE: f64 = 10.0;

const REFERENCE_MARKER: MarkerStyle = MarkerStyle{color: palette::RED, radius: 6.2, filled: true, edge_width: 1.0};
const OBSERVER_MARKER: MarkerStyle = MarkerStyle{color: palette::BLUE, radius: 9.8, filled: false, edge_width: 2.0};
const TRIANGULATED_MARKER: MarkerStyle = MarkerStyle{color: palette::GREEN, radius: 6.9, filled: true, edge_width: 1.0};

/// Arc colours for angle12, angle23 and angle31.
const ARC_COLORS: [&str; 3] = [palette::BLUE, palette::PURPLE, palette::GREEN];

/// Title listing the three angles.
pub fn title(angle12: Degrees, angle23: Degrees, angle31: Degrees) -> String {
    format!(
        "Point Triangulated with Angles: {}°, {}°, {}°",
        fmt_num(angle12), fmt_num(angle23), fmt_num(angle31)
    )
}

fn text(at: Point, text: String, anchor: TextAnchor, color: &'static str) -> Primitive {
    Primitive::Text{at, text, anchor, color, size: LABEL_SIZE}
}

/// Build the diagram scene for one triangulation.
/// Returns a `ProcResult` with the `Scene` or an `Err` if the input cannot be drawn.
pub fn render(input: &DiagramInput) -> ProcResult<Scene> {
    input.validate()?;

    let window = input.plot_window();
    if input.debug {
        debug!("Plot window: {}", window);
    }
    let mut scene = Scene::new(window, &title(input.angle12, input.angle23, input.angle31));

    // Reference points
    let references = input.reference_points();
    scene.push(Primitive::Markers{
        points: references.to_vec(),
        style: REFERENCE_MARKER,
        label: Some("Reference Points".to_string()),
    });
    for (i, point) in references.iter().enumerate() {
        scene.push(text(*point, format!("P{} {}", i + 1, point), TextAnchor::Right, palette::BLACK));
    }

    // Observer
    let observer = input.observer;
    scene.push(Primitive::Markers{
        points: vec![observer],
        style: OBSERVER_MARKER,
        label: Some("Observer".to_string()),
    });
    scene.push(text(observer, format!("Observer {}", observer), TextAnchor::Left, palette::BLACK));

    // Triangle outline, closed in the given order
    scene.push(Primitive::Polyline{
        points: references.iter().chain(references.first()).copied().collect(),
        stroke: Stroke::dashed(palette::BLACK, 1.5).with_opacity(0.5),
        label: None,
    });

    // Triangulated point and its legs
    let vertex = input.triangulated_point;
    scene.push(Primitive::Markers{
        points: vec![vertex],
        style: TRIANGULATED_MARKER,
        label: Some("Triangulated Point".to_string()),
    });
    scene.push(text(vertex, format!("{:.2}", vertex), TextAnchor::Right, palette::BLACK));
    for point in references.iter() {
        scene.push(Primitive::Polyline{
            points: vec![vertex, *point],
            stroke: Stroke::solid(palette::GREEN, 1.5).with_opacity(0.7),
            label: None,
        });
    }

    // Angle arcs: p1-p2, p2-p3, p3-p1
    let angles = [input.angle12, input.angle23, input.angle31];
    let pairs = references.iter().circular_tuple_windows::<(_, _)>();
    for (((from, to), angle), color) in pairs.zip(angles).zip(ARC_COLORS) {
        let arc = AngleArc::new(vertex, *from, *to);
        if input.debug {
            debug!(
                "Arc {}°: start {:.4} rad, end {:.4} rad, radius {:.4}, {}",
                fmt_num(angle), arc.start, arc.end, arc.radius,
                if arc.clockwise { "clockwise" } else { "counterclockwise" }
            );
        }
        scene.push(Primitive::Polyline{
            points: arc.samples(),
            stroke: Stroke::solid(color, 2.0),
            label: None,
        });
        scene.push(text(arc.label_position(), format!("{}°", fmt_num(angle)), TextAnchor::Center, color));
    }

    // Circle overlays
    if input.show_circles {
        if let Some(overlays) = input.circles.as_ref() {
            push_overlays(&mut scene, overlays);
        }
    }

    Ok(scene)
}

/// Draw each overlay group as dashed circles, labelling only the first of each group.
fn push_overlays(scene: &mut Scene, overlays: &CircleOverlays) {
    for (i, (name, descriptor)) in overlays.iter().enumerate() {
        // Also skips a NaN radius.
        if !(descriptor.radius < MAX_CIRCLE_RADIUS) {
            warn!("Skipping circle group \"{}\": radius {} is not below {}", name, fmt_num(descriptor.radius), MAX_CIRCLE_RADIUS);
            continue;
        }
        let color = palette::OVERLAY_CYCLE[i % palette::OVERLAY_CYCLE.len()];
        for (j, center) in descriptor.centers.iter().enumerate() {
            scene.push(Primitive::Circle{
                center: *center,
                radius: descriptor.radius,
                stroke: Stroke::dashed(color, 1.5).with_opacity(0.3),
                label: if j == 0 { Some(format!("{} Circle {}", name, j + 1)) } else { None },
            });
        }
    }
}

/// Turn a scene into output bytes with the chosen backend.
pub fn emit(scene: &Scene, backend: &BackendChoice) -> ProcResult<Vec<u8>> {
    info!("Emitting diagram with the {} backend...", backend.get_backend_name());
    backend.emit(scene)
}

/// Render and emit in one call. Each call builds its own scene.
pub fn draw_diagram(input: &DiagramInput, backend: &BackendChoice) -> ProcResult<Vec<u8>> {
    let scene = render(input)?;
    emit(&scene, backend)
}

//! SVG backend: draws a `Scene` as a chart with `plotters`.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::diagram::{self, backends, PlotRange, Scene};
use crate::diagram::scene::{palette, MarkerStyle, Primitive, Stroke, Swatch, TextAnchor};
use crate::geo_2d::{self, FULL_TURN};

const TITLE_SIZE: f64 = 20.0;
const CHART_MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 60;
const DASH_LENGTH: u32 = 6;
const DASH_GAP: u32 = 4;
const CIRCLE_SAMPLES: usize = 200;

/// SVG output backend.
#[derive(Debug)]
pub struct Backend;
impl Backend {
    pub fn new() -> Self {
        Backend
    }
}

impl backends::RenderBackend for Backend {
    fn get_backend_name(&self) -> String {
        "SVG".to_string()
    }

    fn get_output_extension(&self) -> &'static str {
        "svg"
    }

    fn emit(&self, scene: &Scene) -> diagram::ProcResult<Vec<u8>> {
        let mut buffer = String::new();
        draw(scene, &mut buffer)?;
        Ok(buffer.into_bytes())
    }
}

/// Parse a `#rrggbb` palette colour.
fn rgb(hex: &str) -> diagram::ProcResult<RGBColor> {
    let digits = hex.strip_prefix('#').filter(|d| d.len() == 6 && d.is_ascii());
    let channel = |i: usize| digits.and_then(|d| u8::from_str_radix(&d[i..i + 2], 16).ok());
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Ok(RGBColor(r, g, b)),
        _ => diagram::err_str(&format!("Not a #rrggbb colour: {}", hex)),
    }
}

fn pixels(width: f64) -> u32 {
    (width.round() as u32).max(1)
}

fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

fn line_style(stroke: &Stroke) -> diagram::ProcResult<ShapeStyle> {
    Ok(ShapeStyle{
        color: rgb(stroke.color)?.mix(stroke.opacity),
        filled: false,
        stroke_width: pixels(stroke.width),
    })
}

fn marker_style(style: &MarkerStyle) -> diagram::ProcResult<ShapeStyle> {
    Ok(ShapeStyle{
        color: rgb(style.color)?.to_rgba(),
        filled: style.filled,
        stroke_width: pixels(style.edge_width),
    })
}

/// Offset and size of the chart inside an area of `available` pixels, chosen so
/// one data unit spans the same number of pixels on both axes.
fn chart_frame(window: &PlotRange, available: (u32, u32)) -> ((u32, u32), (u32, u32)) {
    let decor_w = (Y_LABEL_AREA + 2 * CHART_MARGIN) as f64;
    let decor_h = (X_LABEL_AREA + 2 * CHART_MARGIN) as f64;
    let (avail_w, avail_h) = (available.0 as f64, available.1 as f64);

    let scale = ((avail_w - decor_w) / window.width())
        .min((avail_h - decor_h) / window.height())
        .max(0.0);
    let width = (window.width() * scale + decor_w).round().min(avail_w);
    let height = (window.height() * scale + decor_h).round().min(avail_h);
    (
        (((avail_w - width) / 2.0) as u32, ((avail_h - height) / 2.0) as u32),
        (width as u32, height as u32),
    )
}

fn draw(scene: &Scene, buffer: &mut String) -> diagram::ProcResult<()> {
    let root = SVGBackend::with_string(buffer, (scene.width, scene.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let body = root.titled(&scene.title, font(TITLE_SIZE))?;
    let (offset, size) = chart_frame(&scene.window, body.dim_in_pixel());
    let area = body.shrink(offset, size);

    let window = scene.window;
    let mut chart = ChartBuilder::on(&area)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(scene.x_label.as_str())
        .y_desc(scene.y_label.as_str())
        .bold_line_style(ShapeStyle{color: rgb(palette::GRID)?.mix(0.6), filled: false, stroke_width: 1})
        .light_line_style(ShapeStyle{color: WHITE.to_rgba(), filled: false, stroke_width: 0});
    if !scene.grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for primitive in scene.primitives.iter() {
        match primitive {
            Primitive::Markers{points, style, ..} => {
                let (radius, style) = (pixels(style.radius), marker_style(style)?);
                chart.draw_series(points.iter().map(|p| Circle::new((p.x, p.y), radius, style)))?;
            },
            Primitive::Polyline{points, stroke, ..} => {
                draw_line(&mut chart, points.iter().map(|p| (p.x, p.y)).collect(), stroke)?;
            },
            Primitive::Circle{center, radius, stroke, ..} => {
                // Sampled in data space; the equal-aspect frame keeps it round.
                let outline = geo_2d::linspace(0.0, FULL_TURN, CIRCLE_SAMPLES)
                    .into_iter()
                    .map(|angle| center.polar_offset(*radius, angle))
                    .map(|p| (p.x, p.y))
                    .collect();
                draw_line(&mut chart, outline, stroke)?;
            },
            Primitive::Text{at, text, anchor, color, size} => {
                let h_pos = match anchor {
                    TextAnchor::Left => HPos::Left,
                    TextAnchor::Center => HPos::Center,
                    TextAnchor::Right => HPos::Right,
                };
                let style = font(*size).color(&rgb(color)?).pos(Pos::new(h_pos, VPos::Center));
                chart.draw_series(std::iter::once(Text::new(text.clone(), (at.x, at.y), style)))?;
            },
        }
    }

    let legend = scene.legend();
    for entry in legend.iter() {
        let anno = chart.draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?;
        anno.label(entry.label.clone());
        match entry.swatch {
            Swatch::Marker(style) => {
                let (radius, style) = (pixels(style.radius), marker_style(&style)?);
                anno.legend(move |(x, y)| Circle::new((x + 10, y), radius, style));
            },
            Swatch::Line(stroke) => {
                let style = line_style(&stroke)?;
                anno.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            },
        }
    }
    if !legend.is_empty() {
        chart.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(ShapeStyle{color: WHITE.mix(0.8), filled: true, stroke_width: 1})
            .border_style(ShapeStyle{color: rgb(palette::GRID)?.to_rgba(), filled: false, stroke_width: 1})
            .draw()?;
    }

    root.present()?;
    Ok(())
}

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_line(chart: &mut Chart<'_, '_>, points: Vec<(f64, f64)>, stroke: &Stroke) -> diagram::ProcResult<()> {
    let style = line_style(stroke)?;
    if stroke.dashed {
        chart.draw_series(DashedLineSeries::new(points, DASH_LENGTH, DASH_GAP, style))?;
    } else {
        chart.draw_series(LineSeries::new(points, style))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backends::RenderBackend;
    use crate::geo_2d::Point;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new(PlotRange::default(), "Angles: 90.0°");
        scene.push(Primitive::Markers{
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            style: MarkerStyle{color: palette::RED, radius: 6.0, filled: true, edge_width: 1.0},
            label: Some("Reference Points".to_string()),
        });
        scene.push(Primitive::Polyline{
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 0.0)],
            stroke: Stroke::dashed(palette::BLACK, 1.5).with_opacity(0.5),
            label: None,
        });
        scene.push(Primitive::Circle{
            center: Point::new(0.0, 0.0),
            radius: 1.0,
            stroke: Stroke::dashed(palette::OVERLAY_CYCLE[0], 1.5).with_opacity(0.3),
            label: Some("Method Circle 1".to_string()),
        });
        scene.push(Primitive::Text{
            at: Point::new(0.5, 0.5),
            text: "135.0°".to_string(),
            anchor: TextAnchor::Center,
            color: palette::BLUE,
            size: 10.0,
        });
        scene
    }

    fn emit_svg(scene: &Scene) -> String {
        String::from_utf8(Backend::new().emit(scene).unwrap()).unwrap()
    }

    #[test]
    fn chart_has_title_axes_labels_and_legend() {
        let svg = emit_svg(&sample_scene());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Angles: 90.0°"));
        assert!(svg.contains("X-axis"));
        assert!(svg.contains("Y-axis"));
        assert!(svg.contains("135.0°"));
        assert!(svg.contains("Reference Points"));
        assert!(svg.contains("Method Circle 1"));
    }

    #[test]
    fn palette_colours_reach_the_image() {
        let svg = emit_svg(&sample_scene()).to_lowercase();
        assert!(svg.contains("#ff0000"));
        assert!(svg.contains("#1f77b4"));
        assert!(svg.contains("#0000ff"));
    }

    #[test]
    fn hidden_grid_still_draws() {
        let mut scene = sample_scene();
        scene.grid = false;
        assert!(emit_svg(&scene).contains("X-axis"));
    }

    #[test]
    fn square_window_gets_square_plot_box() {
        let ((left, top), (width, height)) = chart_frame(&PlotRange::default(), (1200, 750));
        let plot_w = width - Y_LABEL_AREA - 2 * CHART_MARGIN;
        let plot_h = height - X_LABEL_AREA - 2 * CHART_MARGIN;
        assert_eq!(plot_w, plot_h);
        assert_eq!(height, 750);
        assert_eq!(top, 0);
        // Centred horizontally.
        assert_eq!(left, (1200 - width) / 2);
    }

    #[test]
    fn wide_window_keeps_unit_aspect() {
        let window = PlotRange::new(0.0, 0.0, 4.0, 1.0);
        let (_, (width, height)) = chart_frame(&window, (1200, 750));
        let plot_w = width - Y_LABEL_AREA - 2 * CHART_MARGIN;
        let plot_h = height - X_LABEL_AREA - 2 * CHART_MARGIN;
        assert_eq!(plot_w, 1120);
        assert_eq!(plot_h, 280);
    }

    #[test]
    fn palette_colour_parsing() {
        let RGBColor(r, g, b) = rgb("#1f77b4").unwrap();
        assert_eq!((r, g, b), (0x1f, 0x77, 0xb4));
        assert!(rgb("blue").is_err());
        assert!(rgb("#12345").is_err());
    }
}

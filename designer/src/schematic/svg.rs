use crate::schematic::model::{Point, Quad, SchematicModel};
use std::fmt::Write;

/// Renders the schematic as a standalone SVG document.
///
/// Model coordinates are millimeters with y pointing up; SVG has y pointing
/// down, so every emitted y is negated. Stroke widths and font size scale
/// with the drawing extent so the output looks the same at any frequency.
pub fn render(model: &SchematicModel) -> String {
    let points = model.points();
    let (min_x, min_y, max_x, max_y) = bounds(&points);
    let width = max_x - min_x;
    let height = max_y - min_y;
    let margin = 0.05 * width.max(height);
    let stroke = 0.002 * width.max(height);
    let font_size = 0.015 * width.max(height);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}" width="900" height="700">"#,
        min_x - margin,
        -max_y - margin,
        width + 2.0 * margin,
        height + 2.0 * margin
    );

    for quad in [
        &model.top_waveguide,
        &model.top_horn,
        &model.side_waveguide,
        &model.side_horn,
    ] {
        let _ = writeln!(
            out,
            r#"<polygon points="{}" fill="none" stroke="black" stroke-width="{:.3}"/>"#,
            polygon_points(quad),
            stroke
        );
    }

    for [start, end] in &model.guides {
        let _ = writeln!(
            out,
            r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="green" stroke-width="{:.3}" stroke-dasharray="{:.2} {:.2}"/>"#,
            start.x,
            -start.y,
            end.x,
            -end.y,
            stroke,
            4.0 * stroke,
            4.0 * stroke
        );
    }

    let [foot, tip] = model.pin;
    let _ = writeln!(
        out,
        r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="red" stroke-width="{:.3}"/>"#,
        foot.x,
        -foot.y,
        tip.x,
        -tip.y,
        2.0 * stroke
    );

    for annotation in &model.annotations {
        let _ = writeln!(
            out,
            r#"<text x="{:.3}" y="{:.3}" font-size="{:.2}" text-anchor="middle" transform="rotate({:.2} {:.3} {:.3})">{}</text>"#,
            annotation.anchor.x,
            -annotation.anchor.y,
            font_size,
            -annotation.angle_deg,
            annotation.anchor.x,
            -annotation.anchor.y,
            annotation.text
        );
    }

    out.push_str("</svg>\n");
    out
}

fn polygon_points(quad: &Quad) -> String {
    quad.corners
        .iter()
        .map(|corner| format!("{:.3},{:.3}", corner.x, -corner.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    (min_x, min_y, max_x, max_y)
}

use horncore::prelude::HornDimensions;
use serde::{Deserialize, Serialize};

/// Perpendicular offset applied to edge-length labels, drawing units (mm).
const LABEL_OFFSET: f64 = -30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A closed four-corner outline, wound counter-clockwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quad {
    pub corners: [Point; 4],
}

impl Quad {
    fn new(corners: [Point; 4]) -> Self {
        Self { corners }
    }
}

/// A dimension label anchored in drawing space, rotated along its edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub anchor: Point,
    pub angle_deg: f64,
}

/// 2-D top/side schematic of a designed horn, laid out purely from the
/// result record. The side view sits below the top view, offset by one
/// wide-aperture so the two never overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchematicModel {
    pub top_waveguide: Quad,
    pub top_horn: Quad,
    pub side_waveguide: Quad,
    pub side_horn: Quad,
    /// Exciting pin, floor to tip, in the side view.
    pub pin: [Point; 2],
    /// Dashed construction lines: the l1/l2 baseline and both slant axes.
    pub guides: Vec<[Point; 2]>,
    pub annotations: Vec<Annotation>,
}

impl SchematicModel {
    pub fn from_dimensions(dims: &HornDimensions) -> Self {
        let offset = -dims.aperture_wide;
        let a = dims.waveguide_a;
        let b = dims.waveguide_b;
        let c = dims.waveguide_c;

        let top_waveguide = Quad::new([
            Point::new(0.0, -a / 2.0),
            Point::new(c, -a / 2.0),
            Point::new(c, a / 2.0),
            Point::new(0.0, a / 2.0),
        ]);
        let top_horn = Quad::new([
            Point::new(c, -a / 2.0),
            Point::new(dims.horn_slant_d1, -dims.aperture_wide / 2.0),
            Point::new(dims.horn_slant_d1, dims.aperture_wide / 2.0),
            Point::new(c, a / 2.0),
        ]);
        let side_waveguide = Quad::new([
            Point::new(0.0, -b / 2.0 + offset),
            Point::new(c, -b / 2.0 + offset),
            Point::new(c, b / 2.0 + offset),
            Point::new(0.0, b / 2.0 + offset),
        ]);
        let side_horn = Quad::new([
            Point::new(c, -b / 2.0 + offset),
            Point::new(dims.horn_slant_d2, -dims.aperture_narrow / 2.0 + offset),
            Point::new(dims.horn_slant_d2, dims.aperture_narrow / 2.0 + offset),
            Point::new(c, b / 2.0 + offset),
        ]);

        let pin_x = c - dims.pin_to_throat;
        let pin_floor = -b / 2.0 + offset;
        let pin = [
            Point::new(pin_x, pin_floor),
            Point::new(pin_x, pin_floor + dims.pin_height),
        ];

        let guides = vec![
            [Point::new(0.0, pin_floor), Point::new(c, pin_floor)],
            [Point::new(c, 0.0), Point::new(dims.horn_slant_d1, 0.0)],
            [Point::new(c, offset), Point::new(dims.horn_slant_d2, offset)],
        ];

        let mut annotations = Vec::new();
        for quad in [&top_waveguide, &top_horn, &side_waveguide, &side_horn] {
            annotations.extend(edge_annotations(quad));
        }
        annotations.push(Annotation {
            text: format!("h: {:.2}", dims.pin_height),
            anchor: Point::new(pin_x, pin_floor + dims.pin_height / 2.0),
            angle_deg: 0.0,
        });
        annotations.push(Annotation {
            text: format!("l1: {:.2}", dims.pin_to_rear_wall),
            anchor: Point::new(dims.pin_to_rear_wall / 2.0, pin_floor),
            angle_deg: 0.0,
        });
        annotations.push(Annotation {
            text: format!("l2: {:.2}", dims.pin_to_throat),
            anchor: Point::new(c - dims.pin_to_throat / 2.0, pin_floor),
            angle_deg: 0.0,
        });
        annotations.push(Annotation {
            text: format!("D1: {:.2}", dims.horn_slant_d1),
            anchor: Point::new((c + dims.horn_slant_d1) / 2.0, 0.0),
            angle_deg: 0.0,
        });
        annotations.push(Annotation {
            text: format!("D2: {:.2}", dims.horn_slant_d2),
            anchor: Point::new((c + dims.horn_slant_d2) / 2.0, offset),
            angle_deg: 0.0,
        });

        Self {
            top_waveguide,
            top_horn,
            side_waveguide,
            side_horn,
            pin,
            guides,
            annotations,
        }
    }

    /// Every point of the drawing, for bounding-box computation.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for quad in [
            &self.top_waveguide,
            &self.top_horn,
            &self.side_waveguide,
            &self.side_horn,
        ] {
            points.extend_from_slice(&quad.corners);
        }
        points.extend_from_slice(&self.pin);
        for segment in &self.guides {
            points.extend_from_slice(segment);
        }
        for annotation in &self.annotations {
            points.push(annotation.anchor);
        }
        points
    }
}

/// One length label per quad edge, pushed off the outline along the edge
/// normal so it does not sit on the stroke.
fn edge_annotations(quad: &Quad) -> Vec<Annotation> {
    let mut labels = Vec::with_capacity(4);
    for i in 0..4 {
        let start = quad.corners[i];
        let end = quad.corners[(i + 1) % 4];
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            continue;
        }
        let anchor = Point::new(
            (start.x + end.x) / 2.0 + LABEL_OFFSET * (-dy / length),
            (start.y + end.y) / 2.0 + LABEL_OFFSET * (dx / length),
        );
        labels.push(Annotation {
            text: format!("{:.2}", length),
            anchor,
            angle_deg: dy.atan2(dx).to_degrees(),
        });
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use horncore::prelude::DesignInput;
    use horncore::solve;

    fn model() -> (HornDimensions, SchematicModel) {
        let dims = solve(&DesignInput::new(1420.4, 50.0, 20.2)).unwrap();
        let model = SchematicModel::from_dimensions(&dims);
        (dims, model)
    }

    #[test]
    fn top_view_matches_waveguide_and_aperture() {
        let (dims, model) = model();
        let wg = model.top_waveguide.corners;
        assert_eq!(wg[0].x, 0.0);
        assert_eq!(wg[1].x, dims.waveguide_c);
        assert!((wg[2].y - wg[1].y - dims.waveguide_a).abs() < 1e-9);

        let horn = model.top_horn.corners;
        assert_eq!(horn[1].x, dims.horn_slant_d1);
        assert!((horn[2].y - horn[1].y - dims.aperture_wide).abs() < 1e-9);
    }

    #[test]
    fn side_view_sits_below_top_view() {
        let (dims, model) = model();
        let top_bottom = -dims.waveguide_a / 2.0;
        for corner in model.side_waveguide.corners.iter() {
            assert!(corner.y < top_bottom);
        }
        let horn = model.side_horn.corners;
        assert_eq!(horn[1].x, dims.horn_slant_d2);
        assert!((horn[2].y - horn[1].y - dims.aperture_narrow).abs() < 1e-9);
    }

    #[test]
    fn pin_stands_on_the_side_view_floor() {
        let (dims, model) = model();
        let [foot, tip] = model.pin;
        assert_eq!(foot.x, tip.x);
        assert!((tip.y - foot.y - dims.pin_height).abs() < 1e-9);
        assert!(foot.x > 0.0 && foot.x < dims.waveguide_c);
    }

    #[test]
    fn every_quad_edge_is_labelled() {
        let (_, model) = model();
        // 4 quads × 4 edges + h, l1, l2, D1, D2.
        assert_eq!(model.annotations.len(), 16 + 5);
        assert!(model
            .annotations
            .iter()
            .any(|a| a.text.starts_with("l1: ")));
    }
}

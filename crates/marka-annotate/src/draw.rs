use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use marka_types::PolygonPoint;

pub const STROKE_COLOR: Rgb<u8> = Rgb([0, 255, 255]);

/// Draw a closed, unfilled polygon outline with a 3 px stroke.
///
/// Each edge is rendered as three 1 px passes: the center line plus one on
/// each side, offset along the edge's minor axis.
pub fn draw_polygon_outline(canvas: &mut RgbImage, corners: &[PolygonPoint]) {
    for (i, a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        draw_thick_segment(canvas, *a, b);
    }
}

fn draw_thick_segment(canvas: &mut RgbImage, a: PolygonPoint, b: PolygonPoint) {
    let horizontal = (b.x - a.x).abs() >= (b.y - a.y).abs();

    for offset in -1..=1i32 {
        let (dx, dy) = if horizontal {
            (0.0, offset as f32)
        } else {
            (offset as f32, 0.0)
        };

        draw_line_segment_mut(
            canvas,
            (a.x + dx, a.y + dy),
            (b.x + dx, b.y + dy),
            STROKE_COLOR,
        );
    }
}

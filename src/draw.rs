//! Rasterization primitives over `Canvas`.
//!
//! All shapes clip at the canvas border and write a single intensity
//! value. Strokes are solid; anti-aliasing lives in `crate::text`.

use crate::canvas::Canvas;

/// Pixel coordinate, signed so shapes can straddle the border.
pub type Point = (i32, i32);

/// Stroke a circle outline. `thickness` is centered on the nominal
/// radius, half inside and half outside.
pub fn stroke_circle(canvas: &mut Canvas, center: Point, radius: i32, value: u8, thickness: i32) {
    let half = thickness.max(1) as f32 / 2.0;
    let outer = radius as f32 + half;
    let inner = (radius as f32 - half).max(0.0);
    fill_annulus(canvas, center, inner, outer, value);
}

/// Fill a solid disc.
pub fn fill_circle(canvas: &mut Canvas, center: Point, radius: i32, value: u8) {
    fill_annulus(canvas, center, 0.0, radius as f32, value);
}

fn fill_annulus(canvas: &mut Canvas, (cx, cy): (i32, i32), inner: f32, outer: f32, value: u8) {
    let reach = outer.ceil() as i32;
    let inner2 = inner * inner;
    let outer2 = outer * outer;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let d2 = (dx * dx + dy * dy) as f32;
            if d2 >= inner2 && d2 <= outer2 {
                canvas.put(cx + dx, cy + dy, value);
            }
        }
    }
}

/// Draw a straight segment with the given stroke width.
pub fn line(canvas: &mut Canvas, p0: Point, p1: Point, value: u8, thickness: i32) {
    let half = thickness.max(1) as f32 / 2.0;
    let (x0, y0) = (p0.0 as f32, p0.1 as f32);
    let (dx, dy) = (p1.0 as f32 - x0, p1.1 as f32 - y0);
    let len2 = dx * dx + dy * dy;

    let pad = half.ceil() as i32 + 1;
    let min_x = p0.0.min(p1.0) - pad;
    let max_x = p0.0.max(p1.0) + pad;
    let min_y = p0.1.min(p1.1) - pad;
    let max_y = p0.1.max(p1.1) + pad;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            // Distance to the closest point on the segment.
            let t = if len2 > 0.0 {
                (((x as f32 - x0) * dx + (y as f32 - y0) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let ex = x as f32 - (x0 + t * dx);
            let ey = y as f32 - (y0 + t * dy);
            if ex * ex + ey * ey <= half * half {
                canvas.put(x, y, value);
            }
        }
    }
}

/// Draw an open polyline through `points`. No segment is drawn between
/// the last and the first point.
pub fn polyline(canvas: &mut Canvas, points: &[Point], value: u8, thickness: i32) {
    for pair in points.windows(2) {
        line(canvas, pair[0], pair[1], value, thickness);
    }
}

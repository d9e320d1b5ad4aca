use std::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::Vec2;

use super::Transform;

/// Vertices of a unit-radius regular polygon centred on the origin.
///
/// The first vertex points up (scene +Y is down) and the rest follow
/// clockwise on screen. Any count is accepted; fewer than 3 gives a
/// degenerate outline.
pub fn regular_polygon(sides: u32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = i as f32 * TAU / sides as f32 - FRAC_PI_2;
            let (sin, cos) = angle.sin_cos();
            Vec2::new(cos, sin)
        })
        .collect()
}

/// Appends the fill as a triangle list (fan around the centre).
pub fn fill_triangles(points: &[Vec2], transform: &Transform, out: &mut Vec<Vec2>) {
    let n = points.len();
    if n == 0 {
        return;
    }
    let center = transform.apply(Vec2::zero());
    for i in 0..n {
        out.push(center);
        out.push(transform.apply(points[i]));
        out.push(transform.apply(points[(i + 1) % n]));
    }
}

/// Appends the outline band as a triangle list.
///
/// Each vertex is pushed along its mitred normal by `thickness` in local
/// space (negative values grow inward). Nothing is emitted for a zero
/// thickness or fewer than 3 points.
pub fn outline_triangles(points: &[Vec2], thickness: f32, transform: &Transform, out: &mut Vec<Vec2>) {
    let n = points.len();
    if n < 3 || thickness == 0.0 || !thickness.is_finite() {
        return;
    }

    let extruded: Vec<Vec2> = (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            cur + mitre_normal(prev, cur, next) * thickness
        })
        .collect();

    for i in 0..n {
        let j = (i + 1) % n;
        let (a, b) = (transform.apply(points[i]), transform.apply(points[j]));
        let (c, d) = (transform.apply(extruded[i]), transform.apply(extruded[j]));
        out.extend_from_slice(&[a, c, b, b, c, d]);
    }
}

/// Outward normal at `cur`, scaled so the offset edges stay parallel.
fn mitre_normal(prev: Vec2, cur: Vec2, next: Vec2) -> Vec2 {
    let n1 = edge_normal(prev, cur);
    let n2 = edge_normal(cur, next);
    let factor = 1.0 + n1.dot(n2);
    if factor.abs() <= f32::EPSILON {
        return n1;
    }
    (n1 + n2) * (1.0 / factor)
}

/// Unit normal of the edge `a -> b`, oriented away from the origin.
fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    let d = b - a;
    let normal = Vec2::new(-d.y, d.x).normalized();
    if normal.dot(a) < 0.0 { -normal } else { normal }
}

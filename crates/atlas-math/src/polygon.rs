//! Polygon containment, area, and centroid.
//!
//! Polygons are plain vertex slices, implicitly closed (the last vertex
//! connects back to the first).

use glam::DVec2;

/// Crossing-number point-in-polygon test.
///
/// An edge is counted when it straddles the horizontal line through `p`
/// (half-open in y: one endpoint strictly above, the other at or below) and
/// the crossing lies strictly to the right of `p`. For an axis-aligned
/// rectangle this puts the bottom and left edges inside and the top and right
/// edges outside, so adjacent tiles never both claim a shared boundary point.
///
/// Polygons with fewer than three vertices contain nothing.
pub fn point_in_polygon(p: DVec2, vertices: &[DVec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace signed area. Positive for counter-clockwise winding.
pub fn signed_area(vertices: &[DVec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        twice += a.perp_dot(b);
    }
    twice * 0.5
}

/// Unsigned shoelace area.
pub fn polygon_area(vertices: &[DVec2]) -> f64 {
    signed_area(vertices).abs()
}

/// Area-weighted centroid. Falls back to the vertex mean for degenerate
/// (zero-area) input; `None` when there are no vertices.
pub fn centroid(vertices: &[DVec2]) -> Option<DVec2> {
    if vertices.is_empty() {
        return None;
    }
    let area = signed_area(vertices);
    if area.abs() < f64::EPSILON {
        let sum: DVec2 = vertices.iter().copied().sum();
        return Some(sum / vertices.len() as f64);
    }
    let n = vertices.len();
    let mut acc = DVec2::ZERO;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        acc += (a + b) * a.perp_dot(b);
    }
    Some(acc / (6.0 * area))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_unit_square_interior_and_exterior() {
        let sq = unit_square();
        assert!(point_in_polygon(DVec2::new(0.5, 0.5), &sq));
        assert!(point_in_polygon(DVec2::new(0.01, 0.99), &sq));
        assert!(!point_in_polygon(DVec2::new(1.5, 0.5), &sq));
        assert!(!point_in_polygon(DVec2::new(-0.5, 0.5), &sq));
        assert!(!point_in_polygon(DVec2::new(0.5, 1.5), &sq));
        assert!(!point_in_polygon(DVec2::new(0.5, -0.5), &sq));
    }

    #[test]
    fn test_unit_square_boundary_convention() {
        let sq = unit_square();
        // Bottom and left edges are inside.
        assert!(point_in_polygon(DVec2::new(0.0, 0.5), &sq));
        assert!(point_in_polygon(DVec2::new(0.5, 0.0), &sq));
        assert!(point_in_polygon(DVec2::new(0.0, 0.0), &sq));
        // Top and right edges are outside.
        assert!(!point_in_polygon(DVec2::new(1.0, 0.5), &sq));
        assert!(!point_in_polygon(DVec2::new(0.5, 1.0), &sq));
        assert!(!point_in_polygon(DVec2::new(1.0, 1.0), &sq));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let mut sq = unit_square();
        sq.reverse();
        assert!(point_in_polygon(DVec2::new(0.5, 0.5), &sq));
        assert!(!point_in_polygon(DVec2::new(1.5, 0.5), &sq));
    }

    #[test]
    fn test_concave_polygon() {
        // U shape opening upward.
        let u = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(2.0, 3.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(0.0, 3.0),
        ];
        assert!(point_in_polygon(DVec2::new(0.5, 2.0), &u));
        assert!(point_in_polygon(DVec2::new(2.5, 2.0), &u));
        assert!(!point_in_polygon(DVec2::new(1.5, 2.0), &u), "notch is outside");
    }

    #[test]
    fn test_degenerate_polygons_contain_nothing() {
        assert!(!point_in_polygon(DVec2::ZERO, &[]));
        assert!(!point_in_polygon(DVec2::ZERO, &[DVec2::ZERO]));
        assert!(!point_in_polygon(
            DVec2::new(0.5, 0.5),
            &[DVec2::ZERO, DVec2::ONE]
        ));
    }

    #[test]
    fn test_shoelace_area() {
        let sq = unit_square();
        assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
        let mut cw = sq.clone();
        cw.reverse();
        assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
        assert!((polygon_area(&cw) - 1.0).abs() < 1e-12);
        assert_eq!(polygon_area(&[DVec2::ZERO, DVec2::ONE]), 0.0);
    }

    #[test]
    fn test_centroid() {
        let c = centroid(&unit_square()).expect("non-empty");
        assert!((c - DVec2::splat(0.5)).length() < 1e-12);

        let line = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)];
        let c = centroid(&line).expect("non-empty");
        assert!((c - DVec2::new(1.0, 0.0)).length() < 1e-12);

        assert!(centroid(&[]).is_none());
    }
}

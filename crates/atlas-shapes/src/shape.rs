//! Closed polygon outlines.

use atlas_math::{Bounds2, DVec2, point_in_polygon, polygon_area};
use serde::{Deserialize, Serialize};

/// Ordered outline plus the center it was grown from.
///
/// The outline is implicitly closed: the last vertex connects back to the
/// first. A shape with fewer than three vertices contains nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub vertices: Vec<DVec2>,
    pub center: DVec2,
}

impl Shape {
    pub fn new(vertices: Vec<DVec2>, center: DVec2) -> Self {
        Self { vertices, center }
    }

    /// Crossing-number containment.
    pub fn contains(&self, p: DVec2) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Shoelace area.
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(&self.vertices)
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Largest distance from the center to any vertex.
    pub fn max_radius(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.distance(self.center))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Shape {
        Shape::new(
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(0.0, 1.0),
            ],
            DVec2::new(0.5, 0.5),
        )
    }

    #[test]
    fn test_square_basics() {
        let s = unit_square();
        assert!(s.contains(DVec2::new(0.5, 0.5)));
        assert!(!s.contains(DVec2::new(1.5, 0.5)));
        assert!((s.area() - 1.0).abs() < 1e-12);
        let b = s.bounds().expect("square has bounds");
        assert_eq!(b.min, DVec2::ZERO);
        assert_eq!(b.max, DVec2::ONE);
    }

    #[test]
    fn test_edges_close_the_loop() {
        let s = unit_square();
        let edges: Vec<_> = s.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (DVec2::new(0.0, 1.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_shape_contains_nothing() {
        let s = Shape::new(vec![DVec2::ZERO, DVec2::ONE], DVec2::ZERO);
        assert!(!s.contains(DVec2::new(0.5, 0.5)));
        assert_eq!(s.area(), 0.0);
        let empty = Shape::new(Vec::new(), DVec2::ZERO);
        assert!(empty.bounds().is_none());
        assert_eq!(empty.edges().count(), 0);
        assert_eq!(empty.max_radius(), 0.0);
    }
}

//! 2D line-segment intersection.

use glam::DVec2;

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Parameters of a segment/segment crossing.
///
/// `t` is the position along the first segment and `u` the position along the
/// second, both in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit {
    pub t: f64,
    pub u: f64,
}

impl SegmentHit {
    /// Point of intersection on the first segment `a1 -> a2`.
    pub fn point_on(&self, a1: DVec2, a2: DVec2) -> DVec2 {
        a1 + (a2 - a1) * self.t
    }
}

/// Intersect segment `a1 -> a2` with segment `b1 -> b2`.
///
/// Returns `None` for near-parallel pairs (including zero-length segments),
/// and when the crossing lies outside either segment.
pub fn segment_intersection(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> Option<SegmentHit> {
    let r = a2 - a1;
    let s = b2 - b1;
    let det = r.perp_dot(s);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let d = b1 - a1;
    let t = d.perp_dot(s) / det;
    let u = d.perp_dot(r) / det;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(SegmentHit { t, u })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_crossing_segments() {
        let hit = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 0.0),
        )
        .expect("diagonals must cross");
        assert!((hit.t - 0.5).abs() < EPSILON);
        assert!((hit.u - 0.5).abs() < EPSILON);
        let p = hit.point_on(DVec2::ZERO, DVec2::new(10.0, 10.0));
        assert!((p - DVec2::new(5.0, 5.0)).length() < EPSILON);
    }

    #[test]
    fn test_t_is_fraction_along_first_segment() {
        let hit = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(2.5, -1.0),
            DVec2::new(2.5, 1.0),
        )
        .expect("must cross");
        assert!((hit.t - 0.25).abs() < EPSILON, "t = {}", hit.t);
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(
            segment_intersection(
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(2.0, -1.0),
                DVec2::new(2.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_parallel_segments_report_no_intersection() {
        assert!(
            segment_intersection(
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(0.0, 1.0),
                DVec2::new(10.0, 1.0),
            )
            .is_none()
        );
        // Collinear overlap is also treated as parallel.
        assert!(
            segment_intersection(
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(5.0, 0.0),
                DVec2::new(15.0, 0.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_zero_length_segment() {
        assert!(
            segment_intersection(
                DVec2::new(1.0, 1.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(0.0, 0.0),
                DVec2::new(2.0, 2.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_touching_endpoint_counts() {
        let hit = segment_intersection(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, -1.0),
            DVec2::new(1.0, 1.0),
        );
        assert!(hit.is_some_and(|h| (h.t - 1.0).abs() < EPSILON));
    }
}

//! Deterministic randomness and planar geometry primitives for the Atlas world generator.

pub mod det;
mod bounds;
mod polygon;
mod prng;
mod segment;

pub use bounds::{Bounds2, overlap_area};
pub use glam::DVec2;
pub use polygon::{centroid, point_in_polygon, polygon_area, signed_area};
pub use prng::{MODULUS, MULTIPLIER, ParkMiller};
pub use segment::{PARALLEL_EPSILON, SegmentHit, segment_intersection};

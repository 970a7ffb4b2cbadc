//! Deterministic math via `libm` (not platform libc).
//!
//! Every trigonometric or transcendental call that feeds generated content
//! goes through these wrappers so that a world seed reproduces the same
//! terrain and shapes on every platform.

/// Deterministic sine.
#[inline]
pub fn det_sin(x: f64) -> f64 {
    libm::sin(x)
}

/// Deterministic cosine.
#[inline]
pub fn det_cos(x: f64) -> f64 {
    libm::cos(x)
}

/// Deterministic square root.
#[inline]
pub fn det_sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Deterministic natural logarithm.
#[inline]
pub fn det_ln(x: f64) -> f64 {
    libm::log(x)
}

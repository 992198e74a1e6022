//! Shared test utilities for the SOS capabilities cache workspace.
//!
//! Provides identifier, time and envelope fixtures, a sample capabilities
//! seed with a [`populated_cache`] built from it, and temp-file helpers for
//! tests that read seeds from disk.
//!
//! ```ignore
//! use test_utils::{ids, period, populated_cache};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Compare an envelope's box against `(min_x, min_y, max_x, max_y)`.
///
/// Panics if the envelope has no box.
#[macro_export]
macro_rules! assert_bbox_approx_eq {
    ($envelope:expr, ($min_x:expr, $min_y:expr, $max_x:expr, $max_y:expr), $epsilon:expr) => {{
        let bbox = match $envelope.bbox {
            Some(bbox) => bbox,
            None => panic!("assertion failed: envelope has no bounding box"),
        };
        $crate::assert_approx_eq!(bbox.min_x, $min_x, $epsilon);
        $crate::assert_approx_eq!(bbox.min_y, $min_y, $epsilon);
        $crate::assert_approx_eq!(bbox.max_x, $max_x, $epsilon);
        $crate::assert_approx_eq!(bbox.max_y, $max_y, $epsilon);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_bbox_approx_eq() {
        let env = envelope(7.0, 51.0, 8.0, 52.0);
        assert_bbox_approx_eq!(env, (7.0, 51.0, 8.0, 52.0), 1e-9);
    }

    #[test]
    #[should_panic(expected = "no bounding box")]
    fn test_assert_bbox_approx_eq_on_empty_envelope() {
        let env = sos_common::Envelope::empty(4326);
        assert_bbox_approx_eq!(env, (0.0, 0.0, 0.0, 0.0), 1e-9);
    }
}

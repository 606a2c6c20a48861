//! Approximate floating-point equality

use crate::{Error, Result};
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};

/// Relative and absolute tolerance for [`Tolerance::is_close`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Scaled by the magnitude of the reference value
    pub relative: f64,
    /// Added regardless of magnitude
    pub absolute: f64,
}

impl Tolerance {
    /// Exact comparison
    pub const EXACT: Tolerance = Tolerance {
        relative: 0.0,
        absolute: 0.0,
    };

    /// Create a tolerance, rejecting negative or non-finite components
    pub fn new(relative: f64, absolute: f64) -> Result<Self> {
        for (name, value) in [("relative", relative), ("absolute", absolute)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} tolerance {value} must be finite and non-negative"
                )));
            }
        }
        Ok(Self { relative, absolute })
    }

    /// `|a - b| <= absolute + relative * |b|`
    ///
    /// Asymmetric in the same way as numpy's `isclose`: `b` is the reference.
    ///
    /// The absolute component does not scale with the inputs. When comparing
    /// cumulative weights it treats any gap below `absolute` as equality, so
    /// weights around `1e-12` report boundaries that the same weights scaled
    /// to integers would not. Use [`Tolerance::new`] with `absolute = 0.0`
    /// for tiny weights.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stacked_core::Tolerance;
    ///
    /// let tol = Tolerance::default();
    /// assert!(tol.is_close(0.1 + 0.2, 0.3));
    /// assert!(!tol.is_close(1.0, 1.001));
    /// ```
    pub fn is_close<F: Float>(&self, a: F, b: F) -> bool {
        let relative = <F as NumCast>::from(self.relative).unwrap_or_else(F::zero);
        let absolute = <F as NumCast>::from(self.absolute).unwrap_or_else(F::zero);
        (a - b).abs() <= absolute + relative * b.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: 1e-9,
            absolute: 1e-9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_tolerance() {
        let tol = Tolerance::default();
        assert_eq!(tol.relative, 1e-9);
        assert_eq!(tol.absolute, 1e-9);
        assert!(tol.is_close(3.0, 3.0 + 1e-10));
        assert!(!tol.is_close(3.0, 3.0 + 1e-6));
    }

    #[test]
    fn test_relative_component_scales() {
        let tol = Tolerance::new(1e-6, 0.0).unwrap();
        assert!(tol.is_close(1e6 + 0.5, 1e6));
        assert!(!tol.is_close(1.5, 1.0));
    }

    #[test]
    fn test_exact() {
        assert!(Tolerance::EXACT.is_close(2.5f32, 2.5f32));
        assert!(!Tolerance::EXACT.is_close(0.1 + 0.2, 0.3));
    }

    #[test]
    fn test_invalid_tolerance() {
        assert!(matches!(
            Tolerance::new(-1e-9, 0.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Tolerance::new(0.0, f64::NAN),
            Err(Error::InvalidParameter(_))
        ));
        assert!(Tolerance::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let tol = Tolerance::new(1e-6, 1e-12).unwrap();
        let json = serde_json::to_string(&tol).unwrap();
        let back: Tolerance = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back.relative, 1e-6);
        assert_relative_eq!(back.absolute, 1e-12);
    }

    #[test]
    fn test_absolute_component_dominates_tiny_values() {
        // a gap of half the smaller value still counts as equal
        let tol = Tolerance::default();
        assert!(tol.is_close(1e-12, 2e-12));
        assert!(!tol.is_close(1.0, 2.0));

        let relative_only = Tolerance::new(1e-9, 0.0).unwrap();
        assert!(!relative_only.is_close(1e-12, 2e-12));
    }
}

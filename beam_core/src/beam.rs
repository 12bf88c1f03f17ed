//! # Beam Geometry
//!
//! A [`Beam`] is the span geometry plus the material it is made of. The load
//! is not part of the beam; it is supplied when an equation is built.
//!
//! ## Notation
//!
//! - `L1` = primary span (left support to interior support, or the whole
//!   span for a single-span beam)
//! - `L2` = secondary span (interior support to right support); zero for a
//!   single-span beam
//! - `T` = total length, `L1 + L2`
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::materials::Material;
//!
//! let beam = Beam::two_span(4.0, 6.0, Material::with_rigidity("Steel", 2.0e14));
//! assert_eq!(beam.total_span(), 10.0);
//!
//! let xs = beam.sample_positions(11);
//! assert_eq!(xs.first(), Some(&0.0));
//! assert_eq!(xs.last(), Some(&10.0));
//! assert!(xs.contains(&4.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Condition;
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;

/// Beam geometry and material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Primary span length L1 (m)
    pub primary_span: f64,

    /// Secondary span length L2 (m); zero when unused
    #[serde(default)]
    pub secondary_span: f64,

    /// Beam material
    pub material: Material,
}

impl Beam {
    /// Create a beam from both span lengths
    pub fn new(primary_span: f64, secondary_span: f64, material: Material) -> Self {
        Beam {
            primary_span,
            secondary_span,
            material,
        }
    }

    /// Create a single-span beam
    pub fn single_span(span: f64, material: Material) -> Self {
        Beam::new(span, 0.0, material)
    }

    /// Create a two-span beam
    pub fn two_span(primary_span: f64, secondary_span: f64, material: Material) -> Self {
        Beam::new(primary_span, secondary_span, material)
    }

    /// Total length T = L1 + L2 (m)
    pub fn total_span(&self) -> f64 {
        self.primary_span + self.secondary_span
    }

    /// Position of the interior support, if the beam has one
    pub fn interior_support(&self) -> Option<f64> {
        (self.secondary_span > 0.0).then_some(self.primary_span)
    }

    /// Validate the geometry for a support condition.
    ///
    /// Does not look at the material; see [`Material::validate`].
    pub fn validate_for(&self, condition: Condition) -> CalcResult<()> {
        if !(self.primary_span > 0.0 && self.primary_span.is_finite()) {
            return Err(CalcError::invalid_input(
                "primary_span",
                self.primary_span.to_string(),
                "Span must be positive",
            ));
        }
        match condition {
            Condition::SimplySupported => {
                if self.secondary_span != 0.0 {
                    return Err(CalcError::invalid_input(
                        "secondary_span",
                        self.secondary_span.to_string(),
                        "A simply-supported beam has a single span",
                    ));
                }
            }
            Condition::TwoSpanUnequal => {
                if !(self.secondary_span > 0.0 && self.secondary_span.is_finite()) {
                    return Err(CalcError::invalid_input(
                        "secondary_span",
                        self.secondary_span.to_string(),
                        "Two-span beam needs a positive secondary span",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Evenly spaced positions over `[0, T]`, always including the interior
    /// support so a discontinuity there is sampled.
    ///
    /// `count` is clamped to at least 2.
    pub fn sample_positions(&self, count: usize) -> Vec<f64> {
        let total = self.total_span();
        let count = count.max(2);
        let tolerance = total * 1e-9;
        let support = self.interior_support();

        // The last sample is `total` exactly; the scaled form can land one ulp past it
        let mut positions: Vec<f64> = (0..count)
            .map(|i| {
                if i == count - 1 {
                    total
                } else {
                    (total * i as f64 / (count - 1) as f64).min(total)
                }
            })
            .filter(|x| support.map_or(true, |s| (x - s).abs() > tolerance))
            .collect();

        if let Some(s) = support {
            positions.push(s);
            positions.sort_by(f64::total_cmp);
        }

        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> Material {
        Material::with_rigidity("Steel", 2.0e14)
    }

    #[test]
    fn test_total_span() {
        assert_eq!(Beam::single_span(6.0, steel()).total_span(), 6.0);
        assert_eq!(Beam::two_span(4.0, 5.5, steel()).total_span(), 9.5);
    }

    #[test]
    fn test_validate_simply_supported() {
        assert!(Beam::single_span(6.0, steel())
            .validate_for(Condition::SimplySupported)
            .is_ok());
        assert!(Beam::single_span(0.0, steel())
            .validate_for(Condition::SimplySupported)
            .is_err());
        assert!(Beam::two_span(3.0, 3.0, steel())
            .validate_for(Condition::SimplySupported)
            .is_err());
    }

    #[test]
    fn test_validate_two_span() {
        let err = Beam::single_span(6.0, steel())
            .validate_for(Condition::TwoSpanUnequal)
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "secondary_span"));
        assert!(Beam::two_span(6.0, 2.0, steel())
            .validate_for(Condition::TwoSpanUnequal)
            .is_ok());
    }

    #[test]
    fn test_sample_positions_single_span() {
        let xs = Beam::single_span(6.0, steel()).sample_positions(7);
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_sample_positions_include_interior_support() {
        let beam = Beam::two_span(3.3, 6.7, steel());
        let xs = beam.sample_positions(4);
        assert_eq!(xs.len(), 5);
        assert!(xs.contains(&3.3));
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_positions_no_duplicate_at_support() {
        let beam = Beam::two_span(5.0, 5.0, steel());
        let xs = beam.sample_positions(11);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs.iter().filter(|&&x| x == 5.0).count(), 1);
    }

    #[test]
    fn test_sample_positions_end_exactly_on_total_span() {
        let spans = [
            (1.3, 4.1),
            (1.4, 2.3),
            (1.6, 8.7),
            (0.11, 0.0),
            (1.62, 0.0),
            (2.7, 3.9),
            (0.35, 0.45),
        ];
        for (l1, l2) in spans {
            let beam = Beam::new(l1, l2, steel());
            let total = beam.total_span();
            for count in [2, 11, 51, 101, 1001] {
                let xs = beam.sample_positions(count);
                assert_eq!(xs.first(), Some(&0.0));
                assert_eq!(xs.last(), Some(&total), "L1 = {l1}, L2 = {l2}, count = {count}");
                assert!(xs.iter().all(|&x| (0.0..=total).contains(&x)));
            }
        }
    }
}

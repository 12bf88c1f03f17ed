//! # Two-Span Continuous Beam
//!
//! Primary span `L1` and secondary span `L2` over three supports, uniform
//! load `w` over both. Reactions come from [`two_span_reactions`] and feed
//! all three equations.
//!
//! ## Interior support
//!
//! At `x = L1` shear jumps by the interior reaction `R2`. The shear and
//! bending moment equations report both one-sided values there as an
//! [`EquationValue::Discontinuity`] (end of span 1, then start of span 2).
//! Bending moment is continuous in value, so its two sides coincide.
//! Deflection is continuous and always a single value.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::calculations::{ConditionAnalyzer, TwoSpanUnequal};
//! use beam_core::materials::Material;
//!
//! let beam = Beam::two_span(5.0, 5.0, Material::with_rigidity("Steel", 2.0e14));
//! let shear = TwoSpanUnequal.shear_force_equation(&beam, 10.0);
//!
//! let at_support = shear.evaluate(5.0).unwrap();
//! assert!(at_support.is_discontinuity());
//! assert_eq!(at_support.left().y, -31.25);
//! assert_eq!(at_support.right().y, 31.25);
//! ```

use tracing::debug;

use super::{ensure_on_beam, Condition, ConditionAnalyzer, SupportReactions};
use crate::beam::Beam;
use crate::equations::{
    two_span_deflection, two_span_moment_span1, two_span_moment_span2, two_span_reactions,
    two_span_shear_span1, two_span_shear_span2, Equation, EquationValue, Quantity,
};
use crate::units::{formula_rigidity, metres_to_millimetres};

/// Analyzer for a two-span continuous beam
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSpanUnequal;

impl ConditionAnalyzer for TwoSpanUnequal {
    fn condition(&self) -> Condition {
        Condition::TwoSpanUnequal
    }

    fn reactions(&self, beam: &Beam, load: f64) -> SupportReactions {
        let r = two_span_reactions(load, beam.primary_span, beam.secondary_span);
        SupportReactions {
            positions: vec![0.0, beam.primary_span, beam.total_span()],
            reactions: vec![r.r1, r.r2, r.r3],
            support_moment: Some(r.support_moment),
        }
    }

    fn deflection_equation(&self, beam: &Beam, load: f64, correction_factor: f64) -> Equation {
        let l1 = beam.primary_span;
        let total = beam.total_span();
        let ei = formula_rigidity(beam.material.flexural_rigidity());
        let r = two_span_reactions(load, l1, beam.secondary_span);
        debug!(l1, l2 = beam.secondary_span, ei, load, correction_factor, "two-span deflection equation");

        Equation::new(Quantity::Deflection, move |x| {
            ensure_on_beam(Quantity::Deflection, x, total)?;
            let y = metres_to_millimetres(two_span_deflection(&r, load, l1, ei, x)) * correction_factor;
            Ok(EquationValue::single(x, y))
        })
    }

    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l1 = beam.primary_span;
        let total = beam.total_span();
        let r = two_span_reactions(load, l1, beam.secondary_span);

        Equation::new(Quantity::BendingMoment, move |x| {
            ensure_on_beam(Quantity::BendingMoment, x, total)?;
            let value = if x == 0.0 || x == total {
                EquationValue::single(x, 0.0)
            } else if x < l1 {
                EquationValue::single(x, two_span_moment_span1(&r, load, x))
            } else if x == l1 {
                EquationValue::discontinuity(
                    x,
                    two_span_moment_span1(&r, load, l1),
                    two_span_moment_span2(&r, load, l1, x),
                )
            } else {
                EquationValue::single(x, two_span_moment_span2(&r, load, l1, x))
            };
            Ok(value)
        })
    }

    fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l1 = beam.primary_span;
        let total = beam.total_span();
        let r = two_span_reactions(load, l1, beam.secondary_span);

        Equation::new(Quantity::ShearForce, move |x| {
            ensure_on_beam(Quantity::ShearForce, x, total)?;
            let value = if x == 0.0 {
                EquationValue::single(x, r.r1)
            } else if x < l1 {
                EquationValue::single(x, two_span_shear_span1(&r, load, x))
            } else if x == l1 {
                EquationValue::discontinuity(
                    x,
                    two_span_shear_span1(&r, load, l1),
                    two_span_shear_span2(&r, load, l1),
                )
            } else {
                EquationValue::single(x, two_span_shear_span2(&r, load, x))
            };
            Ok(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::materials::Material;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn beam(l1: f64, l2: f64) -> Beam {
        Beam::two_span(l1, l2, Material::with_rigidity("Steel", 2.0e14))
    }

    fn y(eq: &Equation, x: f64) -> f64 {
        eq.evaluate(x).unwrap().left().y
    }

    #[test]
    fn test_moment_zero_at_ends() {
        let beam = beam(4.0, 6.0);
        let eq = TwoSpanUnequal.bending_moment_equation(&beam, 10.0);
        assert_eq!(y(&eq, 0.0), 0.0);
        assert_eq!(y(&eq, 10.0), 0.0);
    }

    #[test]
    fn test_moment_at_interior_support() {
        let beam = beam(4.0, 6.0);
        let eq = TwoSpanUnequal.bending_moment_equation(&beam, 10.0);
        let value = eq.evaluate(4.0).unwrap();
        assert!(value.is_discontinuity());
        assert_eq!(value.left().x, 4.0);
        assert_eq!(value.right().x, 4.0);
        // Hogging M1 = -35 kN·m, reported with inverted sign
        assert_relative_eq!(value.left().y, 35.0, max_relative = 1e-12);
        assert_relative_eq!(value.right().y, 35.0, max_relative = 1e-12);
    }

    #[test]
    fn test_shear_jump_equals_interior_reaction() {
        for (l1, l2) in [(4.0, 6.0), (5.0, 5.0), (7.5, 2.5)] {
            let beam = beam(l1, l2);
            let reactions = TwoSpanUnequal.reactions(&beam, 10.0);
            let eq = TwoSpanUnequal.shear_force_equation(&beam, 10.0);
            let value = eq.evaluate(l1).unwrap();
            assert_relative_eq!(
                value.right().y - value.left().y,
                reactions.reactions[1],
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_shear_at_ends_equal_end_reactions() {
        let beam = beam(4.0, 6.0);
        let reactions = TwoSpanUnequal.reactions(&beam, 10.0);
        let eq = TwoSpanUnequal.shear_force_equation(&beam, 10.0);
        assert_eq!(y(&eq, 0.0), reactions.reactions[0]);
        assert_relative_eq!(y(&eq, 10.0), -reactions.reactions[2], max_relative = 1e-12);
    }

    #[test]
    fn test_deflection_continuous_at_interior_support() {
        let beam = beam(3.5, 7.25);
        let eq = TwoSpanUnequal.deflection_equation(&beam, 12.0, 1.0);
        let at = eq.evaluate(3.5).unwrap();
        assert!(!at.is_discontinuity());
        assert_abs_diff_eq!(at.left().y, 0.0, epsilon = 1e-9);

        let h = 1e-6;
        assert_abs_diff_eq!(y(&eq, 3.5 - h), y(&eq, 3.5 + h), epsilon = 1e-5);
    }

    #[test]
    fn test_deflection_zero_at_all_supports() {
        let beam = beam(4.0, 6.0);
        let eq = TwoSpanUnequal.deflection_equation(&beam, 10.0, 1.0);
        for x in [0.0, 4.0, 10.0] {
            assert_abs_diff_eq!(y(&eq, x), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_equal_spans_are_symmetric() {
        let beam = beam(5.0, 5.0);
        let moment = TwoSpanUnequal.bending_moment_equation(&beam, 10.0);
        let shear = TwoSpanUnequal.shear_force_equation(&beam, 10.0);
        for s in [0.5, 1.5, 2.0, 3.75, 4.9] {
            let (before, after) = (5.0 - s, 5.0 + s);
            assert_relative_eq!(y(&moment, before), y(&moment, after), max_relative = 1e-9);
            assert_relative_eq!(y(&shear, before), -y(&shear, after), max_relative = 1e-9);
        }
        let at = shear.evaluate(5.0).unwrap();
        assert_relative_eq!(at.left().y, -at.right().y, max_relative = 1e-12);
    }

    #[test]
    fn test_builders_are_idempotent() {
        let beam = beam(4.0, 6.0);
        for quantity in Quantity::ALL {
            let a = TwoSpanUnequal.equation(quantity, &beam, 10.0, 1.0);
            let b = TwoSpanUnequal.equation(quantity, &beam, 10.0, 1.0);
            for x in [0.0, 1.3, 4.0, 7.7, 10.0] {
                assert_eq!(a.evaluate(x), b.evaluate(x));
            }
        }
    }

    #[test]
    fn test_uniform_domain_policy() {
        let beam = beam(4.0, 6.0);
        for quantity in Quantity::ALL {
            let eq = TwoSpanUnequal.equation(quantity, &beam, 10.0, 1.0);
            match eq.evaluate(10.5) {
                Err(CalcError::OutOfDomain { position, total_span, .. }) => {
                    assert_eq!(position, 10.5);
                    assert_eq!(total_span, 10.0);
                }
                other => panic!("expected OutOfDomain for {quantity}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_reactions_balance_load() {
        let reactions = TwoSpanUnequal.reactions(&beam(4.0, 6.0), 10.0);
        assert_relative_eq!(reactions.total(), 100.0, max_relative = 1e-12);
        assert_eq!(reactions.positions, vec![0.0, 4.0, 10.0]);
        assert_relative_eq!(reactions.support_moment.unwrap(), -35.0, max_relative = 1e-12);
    }
}

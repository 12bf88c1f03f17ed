//! # Simply-Supported Beam
//!
//! Single span `L` (the beam's primary span) under a uniform load `w`.
//! All three equations are smooth over `[0, L]`; none has a discontinuity.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::calculations::{ConditionAnalyzer, SimplySupported};
//! use beam_core::materials::Material;
//!
//! let beam = Beam::single_span(6.0, Material::with_rigidity("Steel", 2.0e14));
//! let moment = SimplySupported.bending_moment_equation(&beam, 10.0);
//!
//! assert_eq!(moment.evaluate(3.0).unwrap().left().y, -45.0);
//! ```

use tracing::debug;

use super::{ensure_on_beam, Condition, ConditionAnalyzer, SupportReactions};
use crate::beam::Beam;
use crate::equations::{
    uniform_load_deflection, uniform_load_moment, uniform_load_reactions, uniform_load_shear,
    Equation, EquationValue, Quantity,
};
use crate::units::{formula_rigidity, metres_to_millimetres};

/// Analyzer for a simply-supported single span
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplySupported;

impl ConditionAnalyzer for SimplySupported {
    fn condition(&self) -> Condition {
        Condition::SimplySupported
    }

    fn reactions(&self, beam: &Beam, load: f64) -> SupportReactions {
        let (r1, r2) = uniform_load_reactions(load, beam.primary_span);
        SupportReactions {
            positions: vec![0.0, beam.primary_span],
            reactions: vec![r1, r2],
            support_moment: None,
        }
    }

    fn deflection_equation(&self, beam: &Beam, load: f64, correction_factor: f64) -> Equation {
        let l = beam.primary_span;
        let ei = formula_rigidity(beam.material.flexural_rigidity());
        debug!(span_m = l, ei, load, correction_factor, "simply-supported deflection equation");

        Equation::new(Quantity::Deflection, move |x| {
            ensure_on_beam(Quantity::Deflection, x, l)?;
            let y = metres_to_millimetres(uniform_load_deflection(load, l, ei, x)) * correction_factor;
            Ok(EquationValue::single(x, y))
        })
    }

    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span;
        Equation::new(Quantity::BendingMoment, move |x| {
            ensure_on_beam(Quantity::BendingMoment, x, l)?;
            Ok(EquationValue::single(x, uniform_load_moment(load, l, x)))
        })
    }

    fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span;
        Equation::new(Quantity::ShearForce, move |x| {
            ensure_on_beam(Quantity::ShearForce, x, l)?;
            Ok(EquationValue::single(x, uniform_load_shear(load, l, x)))
        })
    }
}

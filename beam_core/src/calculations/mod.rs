//! # Support Conditions
//!
//! Each support condition has an analyzer implementing [`ConditionAnalyzer`].
//! An analyzer is a set of pure equation builders:
//!
//! - `*_equation(beam, load, ..) -> Equation` - Build the diagram equation
//! - `reactions(beam, load) -> SupportReactions` - Support reactions
//!
//! The set of conditions is closed: [`Condition`] names every one, and
//! [`Condition::analyzer`] is an exhaustive match.
//!
//! ## Available Conditions
//!
//! - [`simply_supported`] - Single span, pin and roller
//! - [`two_span`] - Two continuous spans of possibly unequal length
//!
//! ## Domain
//!
//! Every equation accepts `0 ≤ x ≤ L1 + L2` and returns
//! [`CalcError::OutOfDomain`] for anything else, NaN included.

pub mod simply_supported;
pub mod two_span;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::equations::{Equation, Quantity};
use crate::errors::{CalcError, CalcResult};

pub use simply_supported::SimplySupported;
pub use two_span::TwoSpanUnequal;

/// Beam support condition.
///
/// Serializes as its kebab-case name, `"simply-supported"` or
/// `"two-span-unequal"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Single span, pin at the left end, roller at the right
    #[default]
    SimplySupported,
    /// Two continuous spans on three supports
    TwoSpanUnequal,
}

impl Condition {
    /// Every supported condition
    pub const ALL: [Condition; 2] = [Condition::SimplySupported, Condition::TwoSpanUnequal];

    /// Registry name
    pub fn name(&self) -> &'static str {
        match self {
            Condition::SimplySupported => "simply-supported",
            Condition::TwoSpanUnequal => "two-span-unequal",
        }
    }

    /// Analyzer implementing this condition
    pub fn analyzer(&self) -> &'static dyn ConditionAnalyzer {
        match self {
            Condition::SimplySupported => &SimplySupported,
            Condition::TwoSpanUnequal => &TwoSpanUnequal,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Condition {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| CalcError::unsupported_condition(s))
    }
}

/// Reactions at the supports, left to right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportReactions {
    /// Support positions (m from the left end)
    pub positions: Vec<f64>,
    /// Vertical reactions (kN, positive upward)
    pub reactions: Vec<f64>,
    /// Moment over the interior support (kN·m, negative = hogging), if any
    pub support_moment: Option<f64>,
}

impl SupportReactions {
    /// Sum of the vertical reactions
    pub fn total(&self) -> f64 {
        self.reactions.iter().sum()
    }
}

/// Equation builders for one support condition.
///
/// Builders are pure: the same inputs always produce equations that return
/// the same values. Material properties are read once, when the equation is
/// built; a missing `EI` shows up as NaN deflections.
pub trait ConditionAnalyzer: Send + Sync {
    /// The condition this analyzer implements
    fn condition(&self) -> Condition;

    /// Support reactions under uniform load `load` (kN/m)
    fn reactions(&self, beam: &Beam, load: f64) -> SupportReactions;

    /// Deflection equation (mm), scaled by `correction_factor`
    fn deflection_equation(&self, beam: &Beam, load: f64, correction_factor: f64) -> Equation;

    /// Bending moment equation (kN·m)
    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation;

    /// Shear force equation (kN)
    fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation;

    /// Build the equation for any quantity
    fn equation(
        &self,
        quantity: Quantity,
        beam: &Beam,
        load: f64,
        correction_factor: f64,
    ) -> Equation {
        match quantity {
            Quantity::Deflection => self.deflection_equation(beam, load, correction_factor),
            Quantity::BendingMoment => self.bending_moment_equation(beam, load),
            Quantity::ShearForce => self.shear_force_equation(beam, load),
        }
    }
}

/// Reject positions off the beam
fn ensure_on_beam(quantity: Quantity, x: f64, total_span: f64) -> CalcResult<()> {
    if (0.0..=total_span).contains(&x) {
        Ok(())
    } else {
        Err(CalcError::out_of_domain(quantity.name(), x, total_span))
    }
}

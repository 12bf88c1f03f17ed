//! # Beam Analysis
//!
//! The entry point most callers want. [`BeamAnalysis`] holds the
//! [`AnalysisSettings`] and dispatches each request to the analyzer for the
//! requested [`Condition`], returning the equation in an [`AnalysisResult`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::BeamAnalysis;
//! use beam_core::beam::Beam;
//! use beam_core::calculations::Condition;
//! use beam_core::materials::Material;
//!
//! let analysis = BeamAnalysis::default();
//! let beam = Beam::single_span(6.0, Material::with_rigidity("Steel", 2.0e14));
//!
//! let result = analysis.get_shear_force(&beam, 10.0, Condition::SimplySupported).unwrap();
//! assert_eq!(result.evaluate(0.0).unwrap().left().y, 30.0);
//!
//! // Unknown condition names fail before anything is built
//! assert!(analysis
//!     .analyze_named(beam_core::equations::Quantity::Deflection, &beam, 10.0, "cantilever")
//!     .is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::beam::Beam;
use crate::calculations::{Condition, SupportReactions};
use crate::equations::{Equation, EquationValue, Point, Quantity};
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// An equation together with the inputs that produced it
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub beam: Beam,
    /// Uniform load (kN/m)
    pub load: f64,
    pub condition: Condition,
    pub equation: Equation,
}

impl AnalysisResult {
    pub fn quantity(&self) -> Quantity {
        self.equation.quantity()
    }

    /// Evaluate the wrapped equation at `x`
    pub fn evaluate(&self, x: f64) -> CalcResult<EquationValue> {
        self.equation.evaluate(x)
    }
}

/// Largest-magnitude value on a diagram and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extreme {
    /// Position (m from the left end)
    pub position: f64,
    /// Signed value
    pub value: f64,
}

impl Extreme {
    fn of(points: &[Point]) -> Extreme {
        points.iter().fold(Extreme::default(), |best, p| {
            if p.y.abs() > best.value.abs() {
                Extreme {
                    position: p.x,
                    value: p.y,
                }
            } else {
                best
            }
        })
    }
}

/// All three diagrams for one beam, condition and load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDiagrams {
    pub condition: Condition,
    /// Uniform load (kN/m)
    pub load: f64,
    /// Total length (m)
    pub total_span: f64,
    pub reactions: SupportReactions,

    /// Sampled shear (kN); two points at the interior support
    pub shear_diagram: Vec<Point>,
    /// Sampled bending moment (kN·m)
    pub moment_diagram: Vec<Point>,
    /// Sampled deflection (mm)
    pub deflection_diagram: Vec<Point>,

    pub max_shear: Extreme,
    pub max_moment: Extreme,
    pub max_deflection: Extreme,
}

/// Dispatches equation requests to the condition analyzers
#[derive(Debug, Clone, Default)]
pub struct BeamAnalysis {
    settings: AnalysisSettings,
}

impl BeamAnalysis {
    pub fn new(settings: AnalysisSettings) -> Self {
        BeamAnalysis { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Deflection equation (mm)
    pub fn get_deflection(
        &self,
        beam: &Beam,
        load: f64,
        condition: Condition,
    ) -> CalcResult<AnalysisResult> {
        self.analyze_quantity(Quantity::Deflection, beam, load, condition)
    }

    /// Bending moment equation (kN·m)
    pub fn get_bending_moment(
        &self,
        beam: &Beam,
        load: f64,
        condition: Condition,
    ) -> CalcResult<AnalysisResult> {
        self.analyze_quantity(Quantity::BendingMoment, beam, load, condition)
    }

    /// Shear force equation (kN)
    pub fn get_shear_force(
        &self,
        beam: &Beam,
        load: f64,
        condition: Condition,
    ) -> CalcResult<AnalysisResult> {
        self.analyze_quantity(Quantity::ShearForce, beam, load, condition)
    }

    /// Build the equation for `quantity`.
    ///
    /// Fails with `InvalidInput` when the beam geometry does not fit the
    /// condition. The material is not checked.
    pub fn analyze_quantity(
        &self,
        quantity: Quantity,
        beam: &Beam,
        load: f64,
        condition: Condition,
    ) -> CalcResult<AnalysisResult> {
        beam.validate_for(condition)?;
        debug!(%condition, %quantity, load, "building equation");

        let equation = condition.analyzer().equation(
            quantity,
            beam,
            load,
            self.settings.deflection_factor,
        );

        Ok(AnalysisResult {
            beam: beam.clone(),
            load,
            condition,
            equation,
        })
    }

    /// Same as [`analyze_quantity`](Self::analyze_quantity), with the
    /// condition given by name. Unknown names fail with
    /// `UnsupportedCondition`.
    pub fn analyze_named(
        &self,
        quantity: Quantity,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> CalcResult<AnalysisResult> {
        let condition: Condition = condition.parse()?;
        self.analyze_quantity(quantity, beam, load, condition)
    }

    /// Sample every diagram over [`Beam::sample_positions`]
    pub fn analyze(&self, beam: &Beam, load: f64, condition: Condition) -> CalcResult<BeamDiagrams> {
        let positions = beam.sample_positions(self.settings.sample_count);

        let sample = |quantity: Quantity| -> CalcResult<Vec<Point>> {
            let result = self.analyze_quantity(quantity, beam, load, condition)?;
            let mut points = Vec::with_capacity(positions.len() + 1);
            for &x in &positions {
                points.extend(result.evaluate(x)?.points());
            }
            Ok(points)
        };

        let shear_diagram = sample(Quantity::ShearForce)?;
        let moment_diagram = sample(Quantity::BendingMoment)?;
        let deflection_diagram = sample(Quantity::Deflection)?;

        Ok(BeamDiagrams {
            condition,
            load,
            total_span: beam.total_span(),
            reactions: condition.analyzer().reactions(beam, load),
            max_shear: Extreme::of(&shear_diagram),
            max_moment: Extreme::of(&moment_diagram),
            max_deflection: Extreme::of(&deflection_diagram),
            shear_diagram,
            moment_diagram,
            deflection_diagram,
        })
    }
}

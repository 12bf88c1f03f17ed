//! # Beam Equations
//!
//! Closed-form statics formulas and the [`Equation`] type that wraps them.
//! Keeping the raw formulas apart from the analyzers allows:
//! - Checking each formula against a textbook case in isolation
//! - One place for sign conventions and units
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam under a uniform load
//! - [`continuous`] - Two-span continuous beam under a uniform load
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Reported negative for sagging (tension on bottom fiber)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive upward, so a downward load gives negative values
//! - **Reactions**: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Clapeyron's three-moment equation for continuous beams

pub mod beam;
pub mod continuous;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

pub use beam::{
    uniform_load_deflection,
    uniform_load_moment,
    uniform_load_reactions,
    uniform_load_shear,
};

pub use continuous::{
    two_span_deflection,
    two_span_deflection_span1,
    two_span_deflection_span2,
    two_span_moment_span1,
    two_span_moment_span2,
    two_span_reactions,
    two_span_shear_span1,
    two_span_shear_span2,
    TwoSpanReactions,
};

/// The quantity an equation computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quantity {
    /// Vertical displacement (mm)
    Deflection,
    /// Internal bending moment (kN·m)
    BendingMoment,
    /// Internal shear force (kN)
    ShearForce,
}

impl Quantity {
    /// All quantities, in diagram order
    pub const ALL: [Quantity; 3] = [
        Quantity::ShearForce,
        Quantity::BendingMoment,
        Quantity::Deflection,
    ];

    /// Lowercase name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Deflection => "deflection",
            Quantity::BendingMoment => "bending moment",
            Quantity::ShearForce => "shear force",
        }
    }

    /// Default y-axis label with units
    pub fn axis_label(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection (mm)",
            Quantity::BendingMoment => "Bending Moment (kN·m)",
            Quantity::ShearForce => "Shear Force (kN)",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A point on a diagram: position `x` (m) and value `y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Value of an equation at one position.
///
/// At the interior support of a two-span beam the quantity has two
/// one-sided limits, reported as a [`EquationValue::Discontinuity`].
///
/// ```json
/// { "kind": "single", "point": { "x": 1.0, "y": -20.0 } }
/// { "kind": "discontinuity", "left": { "x": 4.0, "y": -28.75 }, "right": { "x": 4.0, "y": 35.83 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquationValue {
    Single { point: Point },
    Discontinuity { left: Point, right: Point },
}

impl EquationValue {
    pub fn single(x: f64, y: f64) -> Self {
        EquationValue::Single {
            point: Point::new(x, y),
        }
    }

    pub fn discontinuity(x: f64, left_y: f64, right_y: f64) -> Self {
        EquationValue::Discontinuity {
            left: Point::new(x, left_y),
            right: Point::new(x, right_y),
        }
    }

    /// Value approached from the left
    pub fn left(&self) -> Point {
        match self {
            EquationValue::Single { point } => *point,
            EquationValue::Discontinuity { left, .. } => *left,
        }
    }

    /// Value approached from the right
    pub fn right(&self) -> Point {
        match self {
            EquationValue::Single { point } => *point,
            EquationValue::Discontinuity { right, .. } => *right,
        }
    }

    /// Points in left-to-right order (one or two)
    pub fn points(&self) -> Vec<Point> {
        match self {
            EquationValue::Single { point } => vec![*point],
            EquationValue::Discontinuity { left, right } => vec![*left, *right],
        }
    }

    pub fn is_discontinuity(&self) -> bool {
        matches!(self, EquationValue::Discontinuity { .. })
    }
}

type EquationFn = dyn Fn(f64) -> CalcResult<EquationValue> + Send + Sync;

/// A diagram equation: position `x` (m) to the value at `x`.
///
/// Cheap to clone; the closure is shared.
///
/// ```rust
/// use beam_core::equations::{Equation, EquationValue, Quantity};
///
/// let eq = Equation::new(Quantity::ShearForce, |x| Ok(EquationValue::single(x, 30.0 - 10.0 * x)));
/// assert_eq!(eq.evaluate(1.0).unwrap().left().y, 20.0);
/// ```
#[derive(Clone)]
pub struct Equation {
    quantity: Quantity,
    func: Arc<EquationFn>,
}

impl Equation {
    pub fn new<F>(quantity: Quantity, func: F) -> Self
    where
        F: Fn(f64) -> CalcResult<EquationValue> + Send + Sync + 'static,
    {
        Equation {
            quantity,
            func: Arc::new(func),
        }
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Evaluate at position `x`
    pub fn evaluate(&self, x: f64) -> CalcResult<EquationValue> {
        (self.func)(x)
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
            .field("quantity", &self.quantity)
            .finish_non_exhaustive()
    }
}

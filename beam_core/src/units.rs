//! # Unit Conversions
//!
//! The beam equations work in a single consistent set of units:
//!
//! - Length: metres (m)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kN·m)
//! - Flexural rigidity in the formulas: kN·m²
//! - Reported deflection: millimetres (mm)
//!
//! Materials declare `EI` in N·mm², so every equation divides the stored
//! value by [`EI_UNIT_FACTOR`] before use. Deflection comes out of the
//! formulas in metres and is multiplied by [`DEFLECTION_UNIT_FACTOR`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{formula_rigidity, metres_to_millimetres};
//!
//! // 200,000 kN·m² declared as N·mm²
//! assert_eq!(formula_rigidity(2.0e14), 200_000.0);
//! assert_eq!(metres_to_millimetres(0.0125), 12.5);
//! ```

/// Divisor taking a material's declared `EI` (N·mm²) to kN·m²
pub const EI_UNIT_FACTOR: f64 = 1000.0 * 1000.0 * 1000.0;

/// Multiplier taking a deflection in metres to millimetres
pub const DEFLECTION_UNIT_FACTOR: f64 = 1000.0;

/// Convert a declared flexural rigidity (N·mm²) to the formula units (kN·m²)
#[inline]
pub fn formula_rigidity(declared_ei: f64) -> f64 {
    declared_ei / EI_UNIT_FACTOR
}

/// Convert metres to millimetres
#[inline]
pub fn metres_to_millimetres(metres: f64) -> f64 {
    metres * DEFLECTION_UNIT_FACTOR
}

//! # Simply-Supported Beam Formulas
//!
//! Uniform load `w` over a single span with a pin at x=0 and a roller at x=L.
//!
//! ## Notation
//!
//! - `L` = Span length (m)
//! - `x` = Position from left support (m)
//! - `w` = Uniform load intensity (kN/m, positive downward)
//! - `EI` = Flexural rigidity (kN·m²)
//!
//! Output signs follow [`crate::equations`]: sagging moment is negative,
//! upward deflection is positive.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2e

/// Reactions for uniform load w on span L
///
/// ```text
///    w w w w w w w w
///    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
///    ────────────────
///    △              ○
///   R1 ←────L────→ R2
/// ```
///
/// # Formulas
/// - R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Shear at position x
///
/// # Formula
/// - V(x) = w(L/2 - x)
///
/// +wL/2 at the left support, zero at midspan, -wL/2 at the right support.
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Bending moment at position x
///
/// # Formula
/// - M(x) = -(wx/2)(L - x)
///
/// Zero at both supports, extreme -wL²/8 at midspan.
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    -((w * x / 2.0) * (l - x))
}

/// Deflection at position x, in metres
///
/// # Formula (Roark's Table 8.1, Case 2e)
/// ```text
/// δ(x) = -wx(L³ - 2Lx² + x³) / (24EI)
/// ```
///
/// Maximum at midspan: -5wL⁴/(384EI).
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, ei: f64, x: f64) -> f64 {
    -((w * x) / (24.0 * ei)) * (l.powi(3) - 2.0 * l * x * x + x.powi(3))
}

//! # Two-Span Continuous Beam Formulas
//!
//! Uniform load `w` over two adjacent spans `L1` and `L2` on three supports
//! (pin, roller, roller). Constant EI across both spans.
//!
//! ```text
//!    w w w w w w w w w w w w w w w w w w
//!    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
//!    ──────────────────────────────────
//!    △                ○               ○
//!   R1 ←─────L1─────→ R2 ←────L2────→ R3
//! ```
//!
//! The beam is statically indeterminate to the first degree. The hogging
//! moment over the interior support comes from the three-moment equation
//! with zero moment at both ends:
//!
//! ```text
//! 2·M1·(L1 + L2) = -w·(L1³ + L2³)/4
//! ```
//!
//! Every formula in this module derives from the same [`TwoSpanReactions`].
//! Positions `x` are measured from the left end over the whole beam.

use serde::{Deserialize, Serialize};

/// Support moment and reactions for a uniformly loaded two-span beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSpanReactions {
    /// Moment over the interior support, kN·m (negative = hogging)
    pub support_moment: f64,
    /// Left support reaction, kN (positive upward)
    pub r1: f64,
    /// Interior support reaction, kN
    pub r2: f64,
    /// Right support reaction, kN
    pub r3: f64,
}

/// Solve the support moment and the three reactions
///
/// # Formulas
/// - M1 = -w(L1³ + L2³) / (8(L1 + L2))
/// - R1 = M1/L1 + wL1/2
/// - R3 = M1/L2 + wL2/2
/// - R2 = w(L1 + L2) - R1 - R3
#[inline]
pub fn two_span_reactions(w: f64, l1: f64, l2: f64) -> TwoSpanReactions {
    let total = l1 + l2;
    let support_moment = -(w * l2.powi(3) + w * l1.powi(3)) / (8.0 * total);
    let r1 = support_moment / l1 + w * l1 / 2.0;
    let r3 = support_moment / l2 + w * l2 / 2.0;
    let r2 = w * total - r1 - r3;
    TwoSpanReactions {
        support_moment,
        r1,
        r2,
        r3,
    }
}

/// Bending moment on span 1 (0 ≤ x ≤ L1)
///
/// - M(x) = -(R1·x - wx²/2)
#[inline]
pub fn two_span_moment_span1(r: &TwoSpanReactions, w: f64, x: f64) -> f64 {
    -(r.r1 * x - w * x * x / 2.0)
}

/// Bending moment on span 2 (L1 ≤ x ≤ L1 + L2)
///
/// - M(x) = -(R1·x + R2(x - L1) - wx²/2)
#[inline]
pub fn two_span_moment_span2(r: &TwoSpanReactions, w: f64, l1: f64, x: f64) -> f64 {
    -(r.r1 * x + r.r2 * (x - l1) - w * x * x / 2.0)
}

/// Shear on span 1 (0 ≤ x ≤ L1)
///
/// - V(x) = R1 - wx
#[inline]
pub fn two_span_shear_span1(r: &TwoSpanReactions, w: f64, x: f64) -> f64 {
    r.r1 - w * x
}

/// Shear on span 2 (L1 ≤ x ≤ L1 + L2)
///
/// - V(x) = R1 + R2 - wx
#[inline]
pub fn two_span_shear_span2(r: &TwoSpanReactions, w: f64, x: f64) -> f64 {
    r.r1 + r.r2 - w * x
}

/// Deflection on span 1, in metres
///
/// Double integration of EI·y'' = R1·x - wx²/2 with y(0) = y(L1) = 0:
/// ```text
/// EI·y = (x/24)(4R1x² - wx³ + wL1³ - 4R1L1²)
/// ```
#[inline]
pub fn two_span_deflection_span1(r: &TwoSpanReactions, w: f64, l1: f64, ei: f64, x: f64) -> f64 {
    (x / (24.0 * ei))
        * (4.0 * r.r1 * x * x - w * x.powi(3) + w * l1.powi(3) - 4.0 * r.r1 * l1 * l1)
}

/// Deflection on span 2, in metres
///
/// Same integration continued past the interior support, with slope and
/// deflection matched at x = L1:
/// ```text
/// EI·y = (R1x/6)(x² - L1²) + (R2x/6)(x² - 3L1x + 3L1²) - R2L1³/6 - (wx/24)(x³ - L1³)
/// ```
#[inline]
pub fn two_span_deflection_span2(r: &TwoSpanReactions, w: f64, l1: f64, ei: f64, x: f64) -> f64 {
    let ei_y = (r.r1 * x / 6.0) * (x * x - l1 * l1)
        + (r.r2 * x / 6.0) * (x * x - 3.0 * l1 * x + 3.0 * l1 * l1)
        - r.r2 * l1.powi(3) / 6.0
        - (w * x / 24.0) * (x.powi(3) - l1.powi(3));
    ei_y / ei
}

/// Deflection anywhere on the beam, in metres
#[inline]
pub fn two_span_deflection(r: &TwoSpanReactions, w: f64, l1: f64, ei: f64, x: f64) -> f64 {
    if x <= l1 {
        two_span_deflection_span1(r, w, l1, ei, x)
    } else {
        two_span_deflection_span2(r, w, l1, ei, x)
    }
}

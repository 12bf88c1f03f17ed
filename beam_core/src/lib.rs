//! # beam_core - Closed-Form Beam Diagrams
//!
//! `beam_core` builds deflection, bending moment and shear force equations
//! for a uniformly loaded beam in one of two support conditions, and samples
//! them into chart series.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Equation builders are pure; nothing is read from ambient state
//! - **Closed set**: Support conditions are an enum, dispatch is exhaustive
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{BeamAnalysis, Beam, Condition, Material};
//!
//! let beam = Beam::single_span(6.0, Material::with_rigidity("Steel", 2.0e14));
//! let analysis = BeamAnalysis::default();
//!
//! let moment = analysis.get_bending_moment(&beam, 10.0, Condition::SimplySupported).unwrap();
//! assert_eq!(moment.evaluate(3.0).unwrap().left().y, -45.0);
//!
//! let diagrams = analysis.analyze(&beam, 10.0, Condition::SimplySupported).unwrap();
//! let json = serde_json::to_string_pretty(&diagrams).unwrap();
//! assert!(json.contains("moment_diagram"));
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - Facade: dispatch by condition, full diagram runs
//! - [`calculations`] - Support conditions and their analyzers
//! - [`equations`] - Closed-form formulas and the equation type
//! - [`plot`] - Sampling equations into chart series
//! - [`beam`] - Beam geometry
//! - [`materials`] - Material properties
//! - [`settings`] - Analysis settings (correction factor, sampling)
//! - [`units`] - Unit conversion factors
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod plot;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisResult, BeamAnalysis, BeamDiagrams};
pub use beam::Beam;
pub use calculations::{Condition, ConditionAnalyzer, SupportReactions};
pub use equations::{Equation, EquationValue, Point, Quantity};
pub use errors::{CalcError, CalcResult};
pub use materials::Material;
pub use plot::{AnalysisPlotter, ChartBackend, ChartSeries};
pub use settings::AnalysisSettings;

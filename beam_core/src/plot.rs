//! # Diagram Plotting
//!
//! [`AnalysisPlotter`] samples an equation, cleans up the points and hands a
//! [`ChartSeries`] to a [`ChartBackend`]. The backend owns the actual
//! drawing; this crate ships none (the CLI has a text one).
//!
//! Cleaning rules:
//! - A sample whose equation fails is skipped and logged
//! - A discontinuity contributes both of its points, left first
//! - Points with a non-finite coordinate are dropped
//! - Exact duplicates (same x and same y) are dropped, first one kept
//!
//! The plotter holds at most one chart. Every call drops the previous chart
//! before sampling, so a failed plot leaves nothing on screen.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::BeamAnalysis;
//! use beam_core::beam::Beam;
//! use beam_core::calculations::Condition;
//! use beam_core::errors::CalcResult;
//! use beam_core::materials::Material;
//! use beam_core::plot::{AnalysisPlotter, ChartBackend, ChartSeries};
//!
//! struct Collect;
//!
//! impl ChartBackend for Collect {
//!     type Chart = ChartSeries;
//!     fn create(&mut self, series: ChartSeries) -> CalcResult<ChartSeries> {
//!         Ok(series)
//!     }
//! }
//!
//! let beam = Beam::single_span(6.0, Material::with_rigidity("Steel", 2.0e14));
//! let result = BeamAnalysis::default()
//!     .get_bending_moment(&beam, 10.0, Condition::SimplySupported)
//!     .unwrap();
//!
//! let mut plotter = AnalysisPlotter::new(Collect);
//! let count = plotter.plot(&result, "Bending Moment", &beam.sample_positions(7), None).unwrap();
//! assert_eq!(count, 7);
//! assert_eq!(plotter.chart().unwrap().labels()[3], "3.00");
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::analysis::AnalysisResult;
use crate::equations::{Equation, Point};
use crate::errors::{CalcError, CalcResult};

/// Default vertical axis label
pub const DEFAULT_Y_AXIS_LABEL: &str = "Value";

/// Default horizontal axis label
pub const DEFAULT_X_AXIS_LABEL: &str = "Span (m)";

/// One line series ready for a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub points: Vec<Point>,
}

impl ChartSeries {
    /// Category labels: x to two decimals
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| format!("{:.2}", p.x)).collect()
    }

    /// y values in point order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Something that can turn a series into a chart
pub trait ChartBackend {
    /// The chart instance; dropped when the plotter replaces it
    type Chart;

    fn create(&mut self, series: ChartSeries) -> CalcResult<Self::Chart>;
}

/// Samples equations into a single owned chart
pub struct AnalysisPlotter<B: ChartBackend> {
    backend: B,
    x_axis_label: String,
    chart: Option<B::Chart>,
}

impl<B: ChartBackend> AnalysisPlotter<B> {
    pub fn new(backend: B) -> Self {
        AnalysisPlotter {
            backend,
            x_axis_label: DEFAULT_X_AXIS_LABEL.to_string(),
            chart: None,
        }
    }

    /// Builder: set the horizontal axis label
    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = label.into();
        self
    }

    /// The chart from the last successful plot
    pub fn chart(&self) -> Option<&B::Chart> {
        self.chart.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Drop the current chart, if any
    pub fn clear(&mut self) {
        self.chart = None;
    }

    /// Plot `result` over `x_values`.
    ///
    /// Returns the number of points plotted, or `NoValidPoints` when every
    /// sample was rejected. In both cases the previous chart is gone.
    pub fn plot(
        &mut self,
        result: &AnalysisResult,
        label: &str,
        x_values: &[f64],
        y_axis_label: Option<&str>,
    ) -> CalcResult<usize> {
        self.clear();

        let points = collect_points(&result.equation, x_values);
        if points.is_empty() {
            error!(label, "No valid data points for plotting");
            return Err(CalcError::no_valid_points(label));
        }

        let count = points.len();
        let series = ChartSeries {
            label: label.to_string(),
            x_axis_label: self.x_axis_label.clone(),
            y_axis_label: y_axis_label.unwrap_or(DEFAULT_Y_AXIS_LABEL).to_string(),
            points,
        };
        self.chart = Some(self.backend.create(series)?);
        Ok(count)
    }
}

/// Evaluate `equation` at every x and keep the valid, distinct points
pub fn collect_points(equation: &Equation, x_values: &[f64]) -> Vec<Point> {
    let mut seen = HashSet::new();
    let mut points = Vec::with_capacity(x_values.len());

    for &x in x_values {
        let value = match equation.evaluate(x) {
            Ok(value) => value,
            Err(e) => {
                warn!(x, error = %e, "Skipping sample");
                continue;
            }
        };
        debug!(x, ?value, "Sampled {}", equation.quantity());

        for point in value.points() {
            if !point.is_finite() {
                warn!(x, ?point, "Skipping non-finite point");
                continue;
            }
            // +0.0 normalises -0.0 so the two compare equal, as they do with ==
            if seen.insert(((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())) {
                points.push(point);
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::BeamAnalysis;
    use crate::beam::Beam;
    use crate::calculations::Condition;
    use crate::equations::{EquationValue, Quantity};
    use crate::materials::Material;

    /// Backend that keeps a copy of every series it was given
    #[derive(Default)]
    struct Recorder {
        created: Vec<ChartSeries>,
    }

    impl ChartBackend for Recorder {
        type Chart = ChartSeries;

        fn create(&mut self, series: ChartSeries) -> CalcResult<ChartSeries> {
            self.created.push(series.clone());
            Ok(series)
        }
    }

    fn envelope(equation: Equation) -> AnalysisResult {
        AnalysisResult {
            beam: Beam::single_span(6.0, Material::with_rigidity("Steel", 2.0e14)),
            load: 10.0,
            condition: Condition::SimplySupported,
            equation,
        }
    }

    #[test]
    fn test_plot_simply_supported_moment() {
        let beam = Beam::single_span(6.0, Material::with_rigidity("Steel", 2.0e14));
        let result = BeamAnalysis::default()
            .get_bending_moment(&beam, 10.0, Condition::SimplySupported)
            .unwrap();
        let mut plotter = AnalysisPlotter::new(Recorder::default());

        let count = plotter
            .plot(&result, "Bending Moment", &[0.0, 1.5, 3.0, 4.5, 6.0], Some("kN·m"))
            .unwrap();

        assert_eq!(count, 5);
        let chart = plotter.chart().unwrap();
        assert_eq!(chart.label, "Bending Moment");
        assert_eq!(chart.x_axis_label, "Span (m)");
        assert_eq!(chart.y_axis_label, "kN·m");
        assert_eq!(chart.labels(), vec!["0.00", "1.50", "3.00", "4.50", "6.00"]);
        assert_eq!(chart.values()[2], -45.0);
    }

    #[test]
    fn test_failing_equation_reports_and_clears() {
        let mut plotter = AnalysisPlotter::new(Recorder::default());
        let good = envelope(Equation::new(Quantity::ShearForce, |x| {
            Ok(EquationValue::single(x, 1.0))
        }));
        plotter.plot(&good, "Shear", &[0.0, 1.0], None).unwrap();
        assert!(plotter.chart().is_some());

        let failing = envelope(Equation::new(Quantity::ShearForce, |x| {
            Err(CalcError::out_of_domain("shear force", x, 0.0))
        }));
        let err = plotter.plot(&failing, "Shear", &[0.0, 1.0, 2.0], None).unwrap_err();

        assert_eq!(err, CalcError::no_valid_points("Shear"));
        assert!(plotter.chart().is_none());
        assert_eq!(plotter.backend().created.len(), 1);
    }

    #[test]
    fn test_default_y_axis_label() {
        let mut plotter = AnalysisPlotter::new(Recorder::default()).with_x_axis_label("x (m)");
        let eq = envelope(Equation::new(Quantity::Deflection, |x| {
            Ok(EquationValue::single(x, -x))
        }));
        plotter.plot(&eq, "Deflection", &[0.0, 1.0], None).unwrap();
        let chart = plotter.chart().unwrap();
        assert_eq!(chart.y_axis_label, "Value");
        assert_eq!(chart.x_axis_label, "x (m)");
    }

    #[test]
    fn test_collect_points_flattens_and_deduplicates() {
        let eq = Equation::new(Quantity::ShearForce, |x| {
            if x == 2.0 {
                Ok(EquationValue::discontinuity(x, -5.0, 7.0))
            } else if x == 3.0 {
                Ok(EquationValue::discontinuity(x, 1.0, 1.0))
            } else {
                Ok(EquationValue::single(x, x))
            }
        });

        let points = collect_points(&eq, &[0.0, 1.0, 1.0, 2.0, 3.0]);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, -5.0),
                Point::new(2.0, 7.0),
                Point::new(3.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_collect_points_drops_non_finite_and_errors() {
        let eq = Equation::new(Quantity::Deflection, |x| {
            if x < 0.0 {
                Err(CalcError::out_of_domain("deflection", x, 4.0))
            } else if x == 1.0 {
                Ok(EquationValue::single(x, f64::NAN))
            } else if x == 2.0 {
                Ok(EquationValue::single(x, f64::INFINITY))
            } else {
                Ok(EquationValue::single(x, 0.5))
            }
        });

        let points = collect_points(&eq, &[-1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(points, vec![Point::new(0.0, 0.5), Point::new(3.0, 0.5)]);
    }

    #[test]
    fn test_negative_zero_counts_as_duplicate() {
        let eq = Equation::new(Quantity::BendingMoment, |x| {
            Ok(EquationValue::discontinuity(x, 0.0, -0.0))
        });
        assert_eq!(collect_points(&eq, &[1.0]).len(), 1);
    }

    #[test]
    fn test_two_span_moment_support_pair_collapses() {
        let beam = Beam::two_span(4.0, 6.0, Material::with_rigidity("Steel", 2.0e14));
        let result = BeamAnalysis::default()
            .get_bending_moment(&beam, 10.0, Condition::TwoSpanUnequal)
            .unwrap();
        let shear = BeamAnalysis::default()
            .get_shear_force(&beam, 10.0, Condition::TwoSpanUnequal)
            .unwrap();

        // Moment has equal one-sided values at the support, shear does not
        assert_eq!(collect_points(&result.equation, &[4.0]).len(), 1);
        assert_eq!(collect_points(&shear.equation, &[4.0]).len(), 2);
    }
}

//! Text chart backend: one row per point, bars drawn either side of a zero axis.

use std::fmt::Write as _;

use beam_core::plot::{ChartBackend, ChartSeries};
use beam_core::CalcResult;

/// A rendered text chart
pub struct TextChart {
    pub series: ChartSeries,
    pub rendered: String,
}

/// Renders series as text, `half_width` columns each side of the axis
pub struct TextChartBackend {
    pub half_width: usize,
}

impl Default for TextChartBackend {
    fn default() -> Self {
        TextChartBackend { half_width: 20 }
    }
}

impl ChartBackend for TextChartBackend {
    type Chart = TextChart;

    fn create(&mut self, series: ChartSeries) -> CalcResult<TextChart> {
        let rendered = render(&series, self.half_width);
        Ok(TextChart { series, rendered })
    }
}

fn render(series: &ChartSeries, half_width: usize) -> String {
    let values = series.values();
    let max_abs = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let scale = if max_abs > 0.0 { half_width as f64 / max_abs } else { 0.0 };

    let mut out = String::new();
    let _ = writeln!(out, "{} [{} vs {}]", series.label, series.y_axis_label, series.x_axis_label);

    for (label, value) in series.labels().iter().zip(&values) {
        let len = (value.abs() * scale).round() as usize;
        let (left, right) = if *value < 0.0 {
            (format!("{:>w$}", "#".repeat(len), w = half_width), String::new())
        } else {
            (" ".repeat(half_width), "#".repeat(len))
        };
        let _ = writeln!(out, "{:>8} {:>12.4} {}|{}", label, value, left, right);
    }

    out
}

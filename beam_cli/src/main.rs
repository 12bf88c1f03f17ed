//! # Beamline CLI Application
//!
//! Prompts for a beam, a support condition and a uniform load, then prints
//! text charts of the shear, moment and deflection diagrams followed by the
//! full result as JSON.
//!
//! Settings are read from the file named by `BEAM_SETTINGS` when set.
//! Log verbosity follows `RUST_LOG`.

mod chart;

use std::io::{self, BufRead, Write};
use std::path::Path;

use beam_core::{
    AnalysisPlotter, AnalysisSettings, Beam, BeamAnalysis, BeamDiagrams, CalcError, CalcResult,
    Condition, Material, Quantity,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::chart::TextChartBackend;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn load_settings() -> CalcResult<AnalysisSettings> {
    match std::env::var("BEAM_SETTINGS") {
        Ok(path) => {
            tracing::info!(%path, "Loading settings");
            AnalysisSettings::load(Path::new(&path))
        }
        Err(_) => Ok(AnalysisSettings::default()),
    }
}

fn run() -> CalcResult<BeamDiagrams> {
    let settings = load_settings()?;

    let condition_name = prompt_line("Support condition (simply-supported | two-span-unequal) [simply-supported]: ")
        .unwrap_or_else(|| Condition::SimplySupported.name().to_string());
    let condition: Condition = condition_name.parse()?;

    let primary_span = prompt_f64("Enter primary span (m) [6.0]: ", 6.0);
    let secondary_span = match condition {
        Condition::SimplySupported => 0.0,
        Condition::TwoSpanUnequal => prompt_f64("Enter secondary span (m) [4.0]: ", 4.0),
    };
    let rigidity = prompt_f64("Enter flexural rigidity EI (N·mm²) [2.0e14]: ", 2.0e14);
    let load = prompt_f64("Enter uniform load (kN/m) [10.0]: ", 10.0);
    let factor = prompt_f64(
        &format!("Enter deflection correction factor [{}]: ", settings.deflection_factor),
        settings.deflection_factor,
    );

    let material = Material::with_rigidity("User", rigidity);
    material.validate()?;
    let beam = Beam::new(primary_span, secondary_span, material);

    let settings = settings.with_deflection_factor(factor);
    settings.validate()?;
    let analysis = BeamAnalysis::new(settings);

    println!();
    let positions = beam.sample_positions(analysis.settings().sample_count);
    let mut plotter = AnalysisPlotter::new(TextChartBackend::default())
        .with_x_axis_label(analysis.settings().x_axis_label.clone());

    for quantity in Quantity::ALL {
        let result = analysis.analyze_quantity(quantity, &beam, load, condition)?;
        let label = quantity.to_string();
        let y_axis_label = analysis.settings().y_axis_label(quantity);
        let count = plotter.plot(&result, &label, &positions, Some(y_axis_label))?;
        tracing::debug!(%quantity, count, "Plotted diagram");

        if let Some(chart) = plotter.chart() {
            println!("{}", chart.rendered);
        }
    }

    analysis.analyze(&beam, load, condition)
}

fn print_summary(diagrams: &BeamDiagrams) {
    println!("═══════════════════════════════════════");
    println!("  BEAM DIAGRAM RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Condition: {}", diagrams.condition);
    println!("  Length:    {:.2} m", diagrams.total_span);
    println!("  Load:      {:.2} kN/m", diagrams.load);
    println!();
    println!("Reactions:");
    for (position, reaction) in diagrams
        .reactions
        .positions
        .iter()
        .zip(&diagrams.reactions.reactions)
    {
        println!("  R @ {:>6.2} m = {:>10.3} kN", position, reaction);
    }
    if let Some(moment) = diagrams.reactions.support_moment {
        println!("  M_support   = {:>10.3} kN·m", moment);
    }
    println!();
    println!("Extremes:");
    println!(
        "  V_max = {:.3} kN   @ {:.2} m",
        diagrams.max_shear.value, diagrams.max_shear.position
    );
    println!(
        "  M_max = {:.3} kN·m @ {:.2} m",
        diagrams.max_moment.value, diagrams.max_moment.position
    );
    println!(
        "  δ_max = {:.4} mm   @ {:.2} m",
        diagrams.max_deflection.value, diagrams.max_deflection.position
    );
    println!("═══════════════════════════════════════");
}

fn report_error(e: &CalcError) {
    tracing::error!(code = e.error_code(), "Analysis failed");
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beam_cli=info,beam_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    println!("Beamline CLI - Beam Diagram Calculator");
    println!("======================================");
    println!();

    match run() {
        Ok(diagrams) => {
            print_summary(&diagrams);
            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&diagrams) {
                println!("{}", json);
            }
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

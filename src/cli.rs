//! Command line options and the headless diagnostics report.

use std::io::Write;

use anyhow::Result;

use crate::model::is_in_range;
use crate::simulator::Simulator;
use crate::state::{InputForm, Readout};

/// Apply steps run by `--diagnose` when `-n` is missing or invalid
pub const DEFAULT_DIAGNOSTIC_STEPS: usize = 5;

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub diagnose: bool,
    pub help: bool,
    pub steps: usize,
    pub form: InputForm,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            diagnose: false,
            help: false,
            steps: DEFAULT_DIAGNOSTIC_STEPS,
            form: InputForm::default(),
        }
    }
}

impl CliOptions {
    /// Parse the process arguments
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments (without the program name). Unknown flags are ignored,
    /// unparsable counts fall back to their defaults.
    pub fn parse_from<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--diagnose" | "-d" => options.diagnose = true,
                "--help" | "-h" => options.help = true,
                "-n" | "--steps" => {
                    if let Some(value) = args.next() {
                        options.steps = value.parse().unwrap_or(DEFAULT_DIAGNOSTIC_STEPS);
                    }
                }
                "--insulin" => {
                    if let Some(value) = args.next() {
                        options.form.insulin = value;
                    }
                }
                "--carbs" => {
                    if let Some(value) = args.next() {
                        options.form.carbs = value;
                    }
                }
                "--gl" | "--glycemic-load" => {
                    if let Some(value) = args.next() {
                        options.form.glycemic_load = value;
                    }
                }
                "--activity" => {
                    if let Some(value) = args.next() {
                        let minutes = value.parse().unwrap_or(options.form.activity_minutes);
                        options.form.set_activity_minutes(minutes);
                    }
                }
                _ => {}
            }
        }

        options
    }
}

pub fn print_usage() {
    println!("Glucose Simulator");
    println!();
    println!("Usage: glucose-simulator [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --diagnose, -d       Run the model headless (no GUI)");
    println!("  -n, --steps N        Number of Apply steps (default: 5)");
    println!("  --insulin X          Insulin dose in units (default: 10)");
    println!("  --carbs X            Carbohydrates in grams (default: 60)");
    println!("  --gl X               Glycemic load (default: 20)");
    println!("  --activity N         Activity in minutes, 0-120 (default: 30)");
    println!("  --help, -h           Show this help");
}

/// Apply `form` `steps` times without opening a window, writing the report
/// to `out`. Returns the simulator after the last step.
pub fn run_diagnostics<W: Write>(steps: usize, form: InputForm, out: &mut W) -> Result<Simulator> {
    writeln!(out, "=== Glucose Simulator - Diagnostics ===\n")?;
    writeln!(
        out,
        "Inputs: insulin={} U, carbs={} g, GL={}, activity={} min",
        form.insulin, form.carbs, form.glycemic_load, form.activity_minutes
    )?;

    let mut sim = Simulator::new();
    sim.form = form;

    match sim.form.parse() {
        Ok(params) => writeln!(out, "Delta per step: {:+.3} mmol/L\n", params.delta())?,
        Err(e) => {
            writeln!(out, "{}", Readout::InputError.text())?;
            return Err(e.into());
        }
    }

    writeln!(out, "{:>6}  {:>10}  {}", "t (h)", "mmol/L", "status")?;
    write_row(out, &sim)?;
    for _ in 0..steps {
        sim.apply()?;
        write_row(out, &sim)?;
    }

    let in_range = sim
        .state
        .glucose_history()
        .iter()
        .filter(|level| is_in_range(**level))
        .count();
    writeln!(out, "\n=== Results ===")?;
    writeln!(out, "Final level: {}", sim.readout().text())?;
    writeln!(out, "Points in range: {}/{}", in_range, sim.state.len())?;

    Ok(sim)
}

fn write_row<W: Write>(out: &mut W, sim: &Simulator) -> std::io::Result<()> {
    let (time, level) = sim.state.latest();
    writeln!(out, "{:>6}  {:>10.2}  {:?}", time, level, sim.status())
}

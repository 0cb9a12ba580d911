// src/main.rs
//
// CLI driver: sweep the observation point along z and write the field table.
//
// Usage:
//   cargo run --release -- <sigma range> <number of cells> [out=DIR] [x=VAL] [plot]
//
// Positional arguments (both required):
//   <sigma range>      half-extent of the integration volume, in sigmas
//   <number of cells>  discretisation steps per axis per side
//
// Optional key=value arguments:
//   out=DIR   directory for the outputs (default: current directory)
//   x=VAL     transverse observation offset in mm (default: 5 * sigma_x)
//   plot      also save electric_field_<range>_<cells>.png
//
// Outputs (per run):
//   electric_field_<range>_<cells>.txt   200 lines of "<z>\t<E_x>"
//   config.json                          beam/grid provenance
//   electric_field_<range>_<cells>.png   (only with `plot`)

use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::exit;

use bunch_field::config::RunConfig;
use bunch_field::integrate::GridSpec;
use bunch_field::params::BeamParams;
use bunch_field::sweep::{output_file_name, sweep_field, write_field_table};
use bunch_field::visualisation::save_field_plot;

fn print_usage(program: &str) {
    eprintln!("Usage : {program} <sigma range> <number of cells in one dimension> [out=DIR] [x=VAL] [plot]");
}

fn main() -> std::io::Result<()> {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("bunch_field");

    let mut positional: Vec<&str> = Vec::new();
    let mut out_dir: Option<String> = None;
    let mut x_override: Option<f64> = None;
    let mut make_plot = false;

    for arg in argv.iter().skip(1) {
        if arg == "-h" || arg == "--help" || arg == "help" {
            print_usage(program);
            return Ok(());
        }
        if arg == "plot" {
            make_plot = true;
            continue;
        }
        if let Some(v) = arg.strip_prefix("out=") {
            out_dir = Some(v.to_string());
            continue;
        }
        if let Some(v) = arg.strip_prefix("x=") {
            match v.parse::<f64>() {
                Ok(val) => x_override = Some(val),
                Err(_) => eprintln!("Warning: could not parse x value '{v}', ignoring"),
            }
            continue;
        }
        positional.push(arg.as_str());
    }

    if positional.len() != 2 {
        print_usage(program);
        exit(1);
    }

    let sigma_range: i32 = positional[0].parse().unwrap_or_else(|_| {
        eprintln!("Error: sigma range '{}' is not an integer", positional[0]);
        exit(1);
    });
    let number_of_cells: i32 = positional[1].parse().unwrap_or_else(|_| {
        eprintln!("Error: number of cells '{}' is not an integer", positional[1]);
        exit(1);
    });
    if sigma_range <= 0 || number_of_cells <= 0 {
        eprintln!("Error: both grid parameters must be positive");
        exit(1);
    }

    let params = BeamParams::default();
    let grid = GridSpec::new(sigma_range as f64, number_of_cells);

    let x = x_override.unwrap_or(5.0 * params.sigma_x);
    let y = 0.0;

    let out_root = PathBuf::from(out_dir.unwrap_or_else(|| ".".to_string()));
    create_dir_all(&out_root)?;

    let file_name = output_file_name(sigma_range, number_of_cells);
    eprintln!("{file_name}");

    let run_config = RunConfig::from_run(&params, &grid, x, y, &file_name);
    run_config.write_to_dir(&out_root)?;

    println!(
        "Sweeping z over [-100, 99] mm at x = {x} mm ({} kernel evaluations per point)",
        grid.total_evaluations()
    );

    let samples = sweep_field(&params, &grid, x, y);
    write_field_table(&out_root.join(&file_name), &samples)?;

    if make_plot {
        let plot_name = out_root.join(format!(
            "electric_field_{}_{}.png",
            sigma_range, number_of_cells
        ));
        if let Err(e) = save_field_plot(&samples, plot_name.to_string_lossy().as_ref()) {
            eprintln!("Warning: could not save plot: {e}");
        }
    }

    println!("Done: {} samples written", samples.len());
    Ok(())
}

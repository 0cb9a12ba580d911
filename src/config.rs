use serde::Serialize;
use serde_json;
use std::fs::File;
use std::path::Path;

use crate::integrate::GridSpec;
use crate::params::BeamParams;

#[derive(Serialize)]
pub struct RunConfig {
    pub beam: BeamConfig,
    pub grid: GridConfig,
    pub observation: ObservationConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct BeamConfig {
    pub sigma_x_mm: f64,
    pub sigma_y_mm: f64,
    pub sigma_z_mm: f64,
    pub kinetic_energy_kev: f64,
    pub rest_mass_kev: f64,
    pub gamma: f64,
    pub beta: f64,
    pub current_a: f64,
    pub frequency_hz: f64,
    pub charges_per_bunch: f64,
}

#[derive(Serialize)]
pub struct GridConfig {
    pub sigma_range: f64,
    pub number_of_cells: i32,
    pub evaluations_per_point: usize,
}

#[derive(Serialize)]
pub struct ObservationConfig {
    pub x_mm: f64,
    pub y_mm: f64,
    pub z_min_mm: i32,
    pub z_max_mm: i32,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub output_file: String,
}

impl RunConfig {
    pub fn from_run(
        p: &BeamParams,
        grid: &GridSpec,
        x: f64,
        y: f64,
        output_file: &str,
    ) -> Self {
        Self {
            beam: BeamConfig {
                sigma_x_mm: p.sigma_x,
                sigma_y_mm: p.sigma_y,
                sigma_z_mm: p.sigma_z,
                kinetic_energy_kev: p.kinetic_energy,
                rest_mass_kev: p.rest_mass,
                gamma: p.gamma(),
                beta: p.beta(),
                current_a: p.current,
                frequency_hz: p.frequency,
                charges_per_bunch: p.charges_per_bunch(),
            },
            grid: GridConfig {
                sigma_range: grid.sigma_range,
                number_of_cells: grid.number_of_cells,
                evaluations_per_point: grid.total_evaluations(),
            },
            observation: ObservationConfig {
                x_mm: x,
                y_mm: y,
                z_min_mm: crate::sweep::Z_SWEEP_MM.start,
                z_max_mm: crate::sweep::Z_SWEEP_MM.end - 1,
            },
            run: RunInfo {
                binary: "bunch_field".to_string(),
                output_file: output_file.to_string(),
            },
        }
    }

    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

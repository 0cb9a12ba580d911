// src/sweep.rs
//
// Longitudinal sweep of the observation point and the tab-separated output
// table. The sweep itself carries no numerical design; it just calls the
// integrator once per z and remembers the pairs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::integrate::{electric_field_at, GridSpec};
use crate::params::BeamParams;

/// One row of the output table: integer observation z (mm) and E_x there.
#[derive(Debug, Clone, Copy)]
pub struct FieldSample {
    pub z_mm: i32,
    pub e_x: f64,
}

/// Conventional sweep window, z in [-100, 99] mm: 200 points.
pub const Z_SWEEP_MM: std::ops::Range<i32> = -100..100;

/// Evaluate the field at (x, y, z) for every integer z in `Z_SWEEP_MM`,
/// in sweep order. The transverse position is conventionally x = 5 sigma_x,
/// y = 0, which keeps the observation point off every grid node.
pub fn sweep_field(p: &BeamParams, grid: &GridSpec, x: f64, y: f64) -> Vec<FieldSample> {
    Z_SWEEP_MM
        .map(|z_mm| FieldSample {
            z_mm,
            e_x: electric_field_at(p, grid, x, y, z_mm as f64),
        })
        .collect()
}

/// Output file name encoding the grid parameters,
/// `electric_field_<sigma range>_<cells>.txt`.
pub fn output_file_name(sigma_range: i32, number_of_cells: i32) -> String {
    format!("electric_field_{}_{}.txt", sigma_range, number_of_cells)
}

/// Write the table as one `<z>\t<E_x>` line per sample, in sweep order.
pub fn write_field_table(path: &Path, samples: &[FieldSample]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for s in samples {
        writeln!(writer, "{}\t{}", s.z_mm, s.e_x)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_window_has_200_points() {
        assert_eq!(Z_SWEEP_MM.count(), 200);
    }

    #[test]
    fn output_name_encodes_grid_parameters() {
        assert_eq!(output_file_name(5, 10), "electric_field_5_10.txt");
    }
}

// src/visualisation.rs

use plotters::prelude::*;

use crate::sweep::FieldSample;

/// Save E_x vs z as a PNG line plot.
pub fn save_field_plot(
    samples: &[FieldSample],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if samples.is_empty() {
        return Ok(()); // nothing to plot
    }

    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let z_min = samples.first().unwrap().z_mm as f64;
    let z_max = samples.last().unwrap().z_mm as f64;

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in samples {
        if s.e_x.is_finite() {
            if s.e_x < y_min {
                y_min = s.e_x;
            }
            if s.e_x > y_max {
                y_max = s.e_x;
            }
        }
    }

    // Handle pathological case (all NaN, e.g. a node hit at every z)
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = -1.0;
        y_max = 1.0;
    } else if (y_max - y_min).abs() < 1e-30 {
        let delta = if y_max.abs() < 1e-30 {
            1.0
        } else {
            0.1 * y_max.abs()
        };
        y_min -= delta;
        y_max += delta;
    } else {
        // add a 10% margin around the data range
        let margin = 0.1 * (y_max - y_min);
        y_min -= margin;
        y_max += margin;
    }

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Bunch electric field E_x vs z", ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(z_min..z_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("z (mm)")
        .y_desc("E_x (V/mm)")
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples
            .iter()
            .filter(|s| s.e_x.is_finite())
            .map(|s| (s.z_mm as f64, s.e_x)),
        &RED,
    ))?;

    root.present()?;
    Ok(())
}

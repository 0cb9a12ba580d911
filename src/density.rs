// src/density.rs

use crate::params::BeamParams;

/// Charge density of the bunch (C/mm^3) at a point (xi, eta, zeta) in the
/// bunch's local frame: a normalised anisotropic 3D Gaussian carrying the
/// full bunch charge,
///
///   rho = Q / (2 pi^1.5 sx sy sz) * exp(-xi^2/2sx^2 - eta^2/2sy^2 - zeta^2/2sz^2)
///
/// Defined and strictly positive for all finite inputs; the exponent only
/// drives it toward zero, never through it.
#[inline]
pub fn charge_density(p: &BeamParams, xi: f64, eta: f64, zeta: f64) -> f64 {
    let norm = p.total_charge()
        / (2.0 * std::f64::consts::PI.powf(1.5) * p.sigma_x * p.sigma_y * p.sigma_z);
    norm * (-(xi * xi) / (2.0 * p.sigma_x * p.sigma_x)
        - (eta * eta) / (2.0 * p.sigma_y * p.sigma_y)
        - (zeta * zeta) / (2.0 * p.sigma_z * p.sigma_z))
        .exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_is_even_about_the_origin() {
        let p = BeamParams::default();
        let pts = [(0.3, -0.05, 7.0), (1.0, 0.1, -12.0), (-2.6, 0.16, 20.0)];
        for (xi, eta, zeta) in pts {
            let a = charge_density(&p, xi, eta, zeta);
            let b = charge_density(&p, -xi, -eta, -zeta);
            assert_eq!(a, b, "density not even at ({xi}, {eta}, {zeta})");
        }
    }

    #[test]
    fn density_is_positive_everywhere() {
        let p = BeamParams::default();
        for xi in [-10.0, -1.0, 0.0, 2.6, 50.0] {
            for eta in [-1.0, 0.0, 0.16, 3.0] {
                for zeta in [-100.0, 0.0, 20.0, 200.0] {
                    let rho = charge_density(&p, xi, eta, zeta);
                    assert!(rho > 0.0, "rho({xi},{eta},{zeta}) = {rho}");
                    assert!(rho.is_finite());
                }
            }
        }
    }

    #[test]
    fn density_decays_along_each_axis() {
        let p = BeamParams::default();
        // Fix two coordinates, step the third outward; each step must shrink rho.
        let mut prev = charge_density(&p, 0.0, 0.05, 5.0);
        for i in 1..20 {
            let xi = 0.5 * i as f64;
            let cur = charge_density(&p, xi, 0.05, 5.0);
            assert!(cur < prev, "no decay in xi at step {i}");
            prev = cur;
        }
        let mut prev = charge_density(&p, 1.0, 0.0, 5.0);
        for i in 1..20 {
            let eta = 0.05 * i as f64;
            let cur = charge_density(&p, 1.0, eta, 5.0);
            assert!(cur < prev, "no decay in eta at step {i}");
            prev = cur;
        }
        let mut prev = charge_density(&p, 1.0, 0.05, 0.0);
        for i in 1..20 {
            let zeta = 4.0 * i as f64;
            let cur = charge_density(&p, 1.0, 0.05, zeta);
            assert!(cur < prev, "no decay in zeta at step {i}");
            prev = cur;
        }
    }

    #[test]
    fn peak_density_matches_closed_form() {
        let p = BeamParams::default();
        let expected = p.total_charge()
            / (2.0 * std::f64::consts::PI.powf(1.5) * p.sigma_x * p.sigma_y * p.sigma_z);
        assert_eq!(charge_density(&p, 0.0, 0.0, 0.0), expected);
    }
}

// src/field.rs

use crate::density::charge_density;
use crate::params::BeamParams;

/// x-component of the electric field (per unit source volume) at lab point
/// (x, y, z) due to the charge element at local point (xi, eta, zeta).
///
/// This is the Lorentz-boosted Coulomb field of a point-like element scaled
/// by the local charge density: gamma stretches the longitudinal separation,
///
///   dE_x = gamma/(4 pi eps0) * (x - xi) * rho(xi, eta, zeta)
///          / [gamma^2 (z - zeta)^2 + (y - eta)^2 + (x - xi)^2]^1.5
///
/// The denominator vanishes exactly when the observation point coincides with
/// the source point; the resulting IEEE inf/NaN is deliberately not guarded
/// here and propagates into any sum that samples it. Callers keep their grid
/// nodes off the observation point.
#[inline]
pub fn field_contribution(
    p: &BeamParams,
    x: f64,
    y: f64,
    z: f64,
    xi: f64,
    eta: f64,
    zeta: f64,
) -> f64 {
    let g = p.gamma();
    let dx = x - xi;
    let dy = y - eta;
    let dz = z - zeta;
    let r2 = g * g * dz * dz + dy * dy + dx * dx;
    g / (4.0 * std::f64::consts::PI * p.epsilon_0) * dx * charge_density(p, xi, eta, zeta)
        / r2.powf(1.5)
}

// src/params.rs

/// Physical parameters of the electron bunch and the machine that produces it.
///
/// All lengths are in mm, energies in keV, charge in Coulomb, so the field
/// comes out in V/mm with `epsilon_0` expressed in F/mm. The struct is built
/// once at startup and passed by shared reference into the numeric core;
/// derived quantities (gamma, beta, charges per bunch) are recomputed on
/// demand rather than cached.
#[derive(Debug, Clone, Copy)]
pub struct BeamParams {
    /// Horizontal bunch sigma (mm).
    pub sigma_x: f64,
    /// Vertical bunch sigma (mm).
    pub sigma_y: f64,
    /// Longitudinal bunch sigma (mm).
    pub sigma_z: f64,

    /// Beam kinetic energy (keV).
    pub kinetic_energy: f64,
    /// Electron rest mass (keV).
    pub rest_mass: f64,

    /// Elementary charge (C).
    pub elementary_charge: f64,
    /// Average beam current (A).
    pub current: f64,
    /// RF frequency (Hz); one bucket is treated as one bunch.
    pub frequency: f64,

    /// Vacuum permittivity in F/mm (8.854e-12 F/m = 8.854e-15 F/mm).
    pub epsilon_0: f64,
}

impl Default for BeamParams {
    /// Storage-ring numbers for a 6.5 GeV, 60 mA, 508.6 MHz electron machine.
    fn default() -> Self {
        Self {
            sigma_x: 2.60,
            sigma_y: 0.16,
            sigma_z: 20.0,
            kinetic_energy: 6.5e6,
            rest_mass: 511.0,
            elementary_charge: 1.602e-19,
            current: 60.0e-3,
            frequency: 508.6e6,
            epsilon_0: 8.854e-15,
        }
    }
}

impl BeamParams {
    /// Lorentz factor, E_k / (m c^2). The ultra-relativistic form (no "+1")
    /// is fine at these energies; > 1 for any beam worth simulating.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.kinetic_energy / self.rest_mass
    }

    /// Velocity as a fraction of c.
    #[inline]
    pub fn beta(&self) -> f64 {
        let g = self.gamma();
        (1.0 - 1.0 / (g * g)).sqrt()
    }

    /// Number of electrons delivered per RF bucket, I / (f e).
    #[inline]
    pub fn charges_per_bunch(&self) -> f64 {
        self.current / self.frequency / self.elementary_charge
    }

    /// Total bunch charge (C), e * N.
    #[inline]
    pub fn total_charge(&self) -> f64 {
        self.elementary_charge * self.charges_per_bunch()
    }
}

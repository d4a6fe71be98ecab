use serde::{Deserialize, Serialize};

use crate::utils::errors::{require_non_negative, require_positive, Result};

/// Aerodynamic coefficients of an aircraft class, resolved once when the
/// aircraft is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// Wing span (m).
    pub wing_span: f64,
    /// Oswald span efficiency factor.
    pub oswald_efficiency: f64,
    /// Zero-lift drag coefficient.
    pub cd0: f64,
    /// Lift-curve slope (per radian).
    pub lift_slope: f64,
    /// Maximum lift coefficient, applied symmetrically.
    pub cl_max: f64,
}

impl AeroCoefficients {
    /// Aspect ratio derived from span and area: `b² / S`.
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }

    /// High-wing trainer.
    pub fn light() -> Self {
        Self {
            wing_area: 16.2,
            wing_span: 11.0,
            oswald_efficiency: 0.8,
            cd0: 0.027,
            lift_slope: 4.6,
            cl_max: 1.6,
        }
    }

    /// Low aspect ratio jet.
    pub fn fighter() -> Self {
        Self {
            wing_area: 27.9,
            wing_span: 9.96,
            oswald_efficiency: 0.7,
            cd0: 0.021,
            lift_slope: 3.5,
            cl_max: 1.2,
        }
    }

    /// Twin-engine airliner.
    pub fn transport() -> Self {
        Self {
            wing_area: 122.6,
            wing_span: 35.8,
            oswald_efficiency: 0.85,
            cd0: 0.024,
            lift_slope: 5.0,
            cl_max: 1.8,
        }
    }

    /// Checks every coefficient is usable by the force model.
    pub fn validate(&self) -> Result<()> {
        require_positive("wing_area", self.wing_area)?;
        require_positive("wing_span", self.wing_span)?;
        require_positive("oswald_efficiency", self.oswald_efficiency)?;
        require_non_negative("cd0", self.cd0)?;
        require_positive("lift_slope", self.lift_slope)?;
        require_positive("cl_max", self.cl_max)?;
        Ok(())
    }
}

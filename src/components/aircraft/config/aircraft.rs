use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{AeroCoefficients, RawAircraftConfig};
use crate::utils::errors::{require_positive, ConfigError};

/// The selectable airframes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftClass {
    #[default]
    Light,
    Fighter,
    Transport,
}

impl AircraftClass {
    pub fn coefficients(&self) -> AeroCoefficients {
        match self {
            AircraftClass::Light => AeroCoefficients::light(),
            AircraftClass::Fighter => AeroCoefficients::fighter(),
            AircraftClass::Transport => AeroCoefficients::transport(),
        }
    }

    /// Static weight of the class, also used as the mass term of `F = ma`.
    pub fn weight(&self) -> f64 {
        match self {
            AircraftClass::Light => 1200.0,
            AircraftClass::Fighter => 9000.0,
            AircraftClass::Transport => 20000.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AircraftClass::Light => "Light",
            AircraftClass::Fighter => "Fighter",
            AircraftClass::Transport => "Transport",
        }
    }
}

/// Source for aircraft configuration.
/// Can either be a built-in class (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftClass),
    File(PathBuf),
}

/// Everything needed to build an [`Aircraft`](crate::components::Aircraft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Display name, defaults to the class name.
    pub name: String,
    pub class: AircraftClass,
    /// Static weight (N-equivalent).
    pub weight: f64,
    pub aero: AeroCoefficients,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::from_class(AircraftClass::default())
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - built-in class or YAML file path.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(class) => Ok(Self::from_class(class)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    pub fn from_class(class: AircraftClass) -> Self {
        Self {
            name: class.display_name().to_string(),
            class,
            weight: class.weight(),
            aero: class.coefficients(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawAircraftConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw_config(raw)
    }

    /// Fills unspecified coefficients from the base class and validates the result.
    fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let base = Self::from_class(raw.class);
        let aero = AeroCoefficients {
            wing_area: raw.wing_area.unwrap_or(base.aero.wing_area),
            wing_span: raw.wing_span.unwrap_or(base.aero.wing_span),
            oswald_efficiency: raw.oswald_efficiency.unwrap_or(base.aero.oswald_efficiency),
            cd0: raw.cd0.unwrap_or(base.aero.cd0),
            lift_slope: raw.lift_slope.unwrap_or(base.aero.lift_slope),
            cl_max: raw.cl_max.unwrap_or(base.aero.cl_max),
        };

        let config = Self {
            name: raw.name.unwrap_or(base.name),
            class: raw.class,
            weight: raw.weight.unwrap_or(base.weight),
            aero,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("weight", self.weight)?;
        self.aero.validate()
    }

    pub fn light() -> Self {
        Self::from_class(AircraftClass::Light)
    }

    pub fn fighter() -> Self {
        Self::from_class(AircraftClass::Fighter)
    }

    pub fn transport() -> Self {
        Self::from_class(AircraftClass::Transport)
    }
}

use serde::Deserialize;

use crate::components::aircraft::config::AircraftClass;

/// Flat YAML layout for a custom aircraft.
///
/// Every field except `class` is optional and falls back to the chosen
/// class's built-in value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAircraftConfig {
    pub name: Option<String>,
    pub class: AircraftClass,
    pub weight: Option<f64>,

    /// Geometry
    pub wing_area: Option<f64>,
    pub wing_span: Option<f64>,

    /// Aerodynamics
    pub oswald_efficiency: Option<f64>,
    pub cd0: Option<f64>,
    pub lift_slope: Option<f64>,
    pub cl_max: Option<f64>,
}

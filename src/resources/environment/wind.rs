use bevy::prelude::*;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::EnvironmentConditions;

/// How quickly a gust decays towards a fresh random draw, per sample.
const GUST_BLEND: f64 = 0.1;

/// Samples the wind vector fed to the flight dynamics engine each tick.
///
/// Steady wind comes straight from the conditions. Turbulence adds a
/// low-pass filtered random gust seeded from `seed`, so the same seed always
/// reproduces the same sequence of winds.
#[derive(Resource, Debug, Clone)]
pub struct WindModel {
    conditions: EnvironmentConditions,
    seed: u64,
    rng: ChaCha8Rng,
    gust: Vector3<f64>,
}

impl Default for WindModel {
    fn default() -> Self {
        Self::new(EnvironmentConditions::default(), 0)
    }
}

impl WindModel {
    pub fn new(conditions: EnvironmentConditions, seed: u64) -> Self {
        Self {
            conditions,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            gust: Vector3::zeros(),
        }
    }

    pub fn conditions(&self) -> &EnvironmentConditions {
        &self.conditions
    }

    /// Swaps the weather and restarts the gust sequence from the original seed.
    pub fn set_conditions(&mut self, conditions: EnvironmentConditions) {
        *self = Self::new(conditions, self.seed);
    }

    /// Largest gust magnitude the current conditions can produce [m/s].
    pub fn gust_amplitude(&self) -> f64 {
        let turbulence = self.conditions.turbulence_intensity();
        let steady = self.conditions.wind_vector().norm();
        turbulence * (steady * 0.5 + 1.0)
    }

    /// Advances the gust filter by one tick and returns the total wind.
    pub fn sample(&mut self) -> Vector3<f64> {
        let steady = self.conditions.wind_vector();
        let amplitude = self.gust_amplitude();
        if amplitude <= 0.0 {
            return steady;
        }

        // Per-axis bound keeps the vector magnitude within `amplitude`
        let axis_bound = amplitude / 3f64.sqrt();
        let draw = Vector3::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        ) * axis_bound;
        self.gust = self.gust * (1.0 - GUST_BLEND) + draw * GUST_BLEND;

        steady + self.gust
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calm_air_without_turbulence() {
        let mut wind = WindModel::default();
        for _ in 0..10 {
            assert_eq!(wind.sample(), Vector3::zeros());
        }
    }

    #[test]
    fn test_steady_wind_passthrough() {
        let conditions = EnvironmentConditions::calm().with_wind(Vector3::z(), 5.0);
        let mut wind = WindModel::new(conditions, 7);
        assert_relative_eq!(wind.sample(), Vector3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_turbulence_is_bounded_and_seeded() {
        let conditions = EnvironmentConditions::calm()
            .with_wind(Vector3::x(), 10.0)
            .with_turbulence(0.8);
        let mut a = WindModel::new(conditions.clone(), 42);
        let mut b = WindModel::new(conditions, 42);
        let amplitude = a.gust_amplitude();
        let steady = Vector3::new(10.0, 0.0, 0.0);

        let mut saw_gust = false;
        for _ in 0..500 {
            let wa = a.sample();
            let wb = b.sample();
            assert_eq!(wa, wb);
            let gust = (wa - steady).norm();
            assert!(gust <= amplitude + 1e-9, "gust {} above {}", gust, amplitude);
            saw_gust |= gust > 0.0;
        }
        assert!(saw_gust);
    }

    #[test]
    fn test_set_conditions_resets_sequence() {
        let gusty = EnvironmentConditions::calm().with_turbulence(1.0);
        let mut wind = WindModel::new(gusty.clone(), 3);
        let first = wind.sample();
        wind.sample();
        wind.set_conditions(gusty);
        assert_eq!(wind.sample(), first);
    }
}

pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3
pub const MAX_THRUST: f64 = 50_000.0; // N

/// Airspeed at or below which only gravity acts on the airframe (m/s).
pub const LOW_SPEED_THRESHOLD: f64 = 0.1;
/// Airspeed at which control surfaces reach full authority (m/s).
pub const CONTROL_SATURATION_SPEED: f64 = 30.0;

pub const ROLL_GAIN: f64 = 2.0;
pub const PITCH_GAIN: f64 = 1.0;
pub const YAW_GAIN: f64 = 1.0;

/// Fraction of the gap between smoothed and requested input closed per tick.
pub const INPUT_SMOOTHING: f64 = 0.2;
pub const TICK_RATE_HZ: f64 = 60.0;

// Numeric guards
pub const MIN_DIRECTION_LENGTH: f64 = 1e-3;
pub const QUATERNION_ZERO_EPSILON: f64 = 1e-5;
pub const QUATERNION_NORM_TOLERANCE: f64 = 1e-3;

// Scoring
pub const CHECKPOINT_BASE_SCORE: f64 = 100.0;
pub const EFFICIENCY_WINDOW: f64 = 30.0; // s
pub const EFFICIENCY_POINTS_PER_SECOND: f64 = 10.0;
pub const SPEED_TOLERANCE: f64 = 0.1;

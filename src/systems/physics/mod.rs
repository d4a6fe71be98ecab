mod flight_dynamics;
mod flight_system;
mod integrator;

pub use flight_dynamics::{angle_of_attack, FlightDynamicsEngine, ForceBreakdown};
pub use flight_system::{flight_dynamics_system, handle_difficulty_events, SetDifficultyEvent};
pub use integrator::{guard_step, integrate_euler, sanitize_kinematics};

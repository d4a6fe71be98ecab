mod catalogue;
mod checkpoint;
mod mission;

pub use checkpoint::{AltitudeBand, Checkpoint};
pub use mission::{Mission, MissionStart, MissionTier};

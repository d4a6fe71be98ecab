use serde::{Deserialize, Serialize};

/// Pilot-selected difficulty. Independent of the aircraft class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Realistic,
}

impl Difficulty {
    /// Strength of the wings-level assist in [0, 1].
    pub fn stability_assist(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 0.3,
            Difficulty::Realistic => 0.0,
        }
    }

    /// Multiplier applied to every checkpoint score.
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => 1.5,
            Difficulty::Realistic => 2.0,
        }
    }
}

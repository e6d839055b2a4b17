use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-dimension scoring weights. Relative values only; the engine
/// normalizes by the sum before use.
///
/// The sum must be positive. A zero-sum configuration is a caller contract
/// violation and produces meaningless (NaN) normalized weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub semantic: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            semantic: 40.0,
            skills: 25.0,
            experience: 20.0,
            education: 15.0,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.semantic + self.skills + self.experience + self.education
    }

    /// Scale the weights so they sum to one.
    pub fn normalized(&self) -> Weights {
        let total = self.sum();
        Weights {
            semantic: self.semantic / total,
            skills: self.skills / total,
            experience: self.experience / total,
            education: self.education / total,
        }
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weights (\n\tsemantic: {},\n\tskills: {},\n\texperience: {},\n\teducation: {}\n)",
            self.semantic, self.skills, self.experience, self.education
        )
    }
}

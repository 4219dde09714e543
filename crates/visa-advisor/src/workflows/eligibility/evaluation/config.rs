use serde::{Deserialize, Serialize};

/// Destination policy dials applied after the score is clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Lower-cased destinations that demand a stronger file.
    pub strict_destinations: Vec<String>,
    /// Scores below this get a caution verdict for strict destinations.
    pub strict_destination_minimum: u8,
    /// Scores below this get a rejection verdict for any destination.
    pub rejection_ceiling: u8,
}

impl EvaluationConfig {
    pub fn is_strict(&self, country: &str) -> bool {
        self.strict_destinations
            .iter()
            .any(|strict| strict.as_str() == country)
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            strict_destinations: ["germany", "switzerland", "austria", "belgium"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            strict_destination_minimum: 65,
            rejection_ceiling: 40,
        }
    }
}

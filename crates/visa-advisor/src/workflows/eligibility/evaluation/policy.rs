use super::super::domain::display_country;
use super::config::EvaluationConfig;
use serde::{Deserialize, Serialize};

/// Assessment of the destination the applicant asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationVerdict {
    LikelyRefusal,
    StrictDestination,
    GoodMatch,
}

impl DestinationVerdict {
    /// First matching rule wins: refusal, then strict destination, then good match.
    pub fn classify(score: u8, country: &str, config: &EvaluationConfig) -> Self {
        if score < config.rejection_ceiling {
            DestinationVerdict::LikelyRefusal
        } else if config.is_strict(country) && score < config.strict_destination_minimum {
            DestinationVerdict::StrictDestination
        } else {
            DestinationVerdict::GoodMatch
        }
    }

    pub fn message(self, country: &str, client_name: &str) -> String {
        let country = display_country(country);
        match self {
            DestinationVerdict::LikelyRefusal => format!(
                "{country} is very likely to refuse {client_name}'s file at this stage."
            ),
            DestinationVerdict::StrictDestination => format!(
                "{country} is a strict destination; {client_name}'s file needs strengthening before applying."
            ),
            DestinationVerdict::GoodMatch => format!(
                "{country} is a good match for the current strength of {client_name}'s file."
            ),
        }
    }
}

pub(crate) fn destination_verdict(
    target_country: Option<&str>,
    client_name: &str,
    score: u8,
    config: &EvaluationConfig,
) -> Option<(DestinationVerdict, String)> {
    let country = target_country?;
    let verdict = DestinationVerdict::classify(score, country, config);
    Some((verdict, verdict.message(country, client_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_takes_precedence_over_strict_destination() {
        let config = EvaluationConfig::default();
        assert_eq!(
            DestinationVerdict::classify(35, "germany", &config),
            DestinationVerdict::LikelyRefusal
        );
    }

    #[test]
    fn strict_cutoff_sits_inside_the_good_band() {
        let config = EvaluationConfig::default();
        assert_eq!(
            DestinationVerdict::classify(64, "austria", &config),
            DestinationVerdict::StrictDestination
        );
        assert_eq!(
            DestinationVerdict::classify(65, "austria", &config),
            DestinationVerdict::GoodMatch
        );
        assert_eq!(
            DestinationVerdict::classify(45, "spain", &config),
            DestinationVerdict::GoodMatch
        );
    }

    #[test]
    fn message_capitalizes_country_and_names_client() {
        let message = DestinationVerdict::StrictDestination.message("switzerland", "Mona");
        assert!(message.starts_with("Switzerland is a strict destination"));
        assert!(message.contains("Mona's file"));
    }

    #[test]
    fn missing_target_skips_verdict() {
        let config = EvaluationConfig::default();
        assert!(destination_verdict(None, "Mona", 90, &config).is_none());
    }
}

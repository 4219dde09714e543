mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::DestinationVerdict;
pub use rules::CriterionKind;

use super::domain::{ApplicantProfile, RawProfile};
use super::strategy::{self, BandKind, StrategyBand, STRATEGY_TABLE};
use policy::destination_verdict;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying the scoring criteria and destination policy to a profile.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> EvaluationResult {
        let tally = rules::score_profile(profile);
        let score = tally.clamped_score();
        let band = resolve_band(score);

        let verdict = destination_verdict(
            profile.target_country.as_deref(),
            &profile.client_name,
            score,
            &self.config,
        );

        debug!(
            raw_score = tally.raw_score,
            score,
            band = band.kind.label(),
            destination = ?verdict.as_ref().map(|(verdict, _)| *verdict),
            "applicant evaluated"
        );

        let (destination_outlook, destination_verdict) = match verdict {
            Some((verdict, message)) => (Some(verdict), message),
            None => (None, String::new()),
        };

        EvaluationResult {
            client_name: profile.client_name.clone(),
            score,
            band: band.kind,
            band_status: band.status.to_string(),
            recommended_countries: band.recommended_countries(),
            supporting_reasons: tally.reasons,
            improvement_suggestions: tally.improvements,
            destination_outlook,
            destination_verdict,
            evidence: band.evidence.to_string(),
            caution: band.caution.to_string(),
            breakdown: tally.components,
        }
    }

    pub fn evaluate_raw(&self, raw: &RawProfile) -> EvaluationResult {
        self.evaluate(&ApplicantProfile::from_raw(raw))
    }
}

/// Evaluate a raw field map with the built-in destination policy.
pub fn evaluate(raw: &RawProfile) -> EvaluationResult {
    EvaluationEngine::default().evaluate_raw(raw)
}

fn resolve_band(score: u8) -> &'static StrategyBand {
    strategy::lookup(score).unwrap_or(&STRATEGY_TABLE[STRATEGY_TABLE.len() - 1])
}

/// Points a single criterion contributed, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: CriterionKind,
    pub points: i16,
}

/// Recommendation handed back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub client_name: String,
    pub score: u8,
    pub band: BandKind,
    pub band_status: String,
    pub recommended_countries: String,
    pub supporting_reasons: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_outlook: Option<DestinationVerdict>,
    /// Empty when no target country was given.
    pub destination_verdict: String,
    pub evidence: String,
    pub caution: String,
    pub breakdown: Vec<ScoreComponent>,
}

impl EvaluationResult {
    pub fn summary(&self) -> String {
        format!(
            "{}: {}/100 ({}) - {}",
            self.client_name,
            self.score,
            self.band.label(),
            self.recommended_countries
        )
    }
}

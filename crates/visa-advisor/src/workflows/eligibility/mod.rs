//! Visa eligibility scoring: profile intake, criteria evaluation, strategy bands, and the
//! destination verdict.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, Education, JobType, LanguageLevel, MaritalStatus, RawProfile,
    TravelHistory, DEFAULT_CLIENT_NAME, DEFAULT_TRIP_DURATION_DAYS,
};
pub use evaluation::{
    evaluate, CriterionKind, DestinationVerdict, EvaluationConfig, EvaluationEngine,
    EvaluationResult, ScoreComponent,
};
pub use intake::{ProfileImportError, ProfileImporter};
pub use router::eligibility_router;
pub use strategy::{bands, lookup, BandKind, StrategyBand, NOT_RECOMMENDED_MESSAGE};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::eligibility::domain::{ApplicantProfile, RawProfile};
use crate::workflows::eligibility::evaluation::{EvaluationConfig, EvaluationEngine};

pub(super) fn raw(pairs: &[(&str, &str)]) -> RawProfile {
    RawProfile::from_pairs(pairs.iter().copied())
}

pub(super) fn profile(pairs: &[(&str, &str)]) -> ApplicantProfile {
    ApplicantProfile::from_raw(&raw(pairs))
}

pub(super) fn evaluation_engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::default())
}

/// Government employee with every strength the form can express.
pub(super) fn strong_applicant() -> RawProfile {
    raw(&[
        ("client_name", "Karim"),
        ("bank_balance", "200000"),
        ("job_type", "government"),
        ("salary", "16000"),
        ("has_hr_letter", "yes"),
        ("age", "40"),
        ("marital_status", "married"),
        ("children", "2"),
        ("education", "post_grad"),
        ("language", "fluent"),
        ("travel_history_level", "schengen"),
        ("previous_refusal", "no"),
        ("trip_duration_days", "7"),
    ])
}

/// Scores exactly 50: balance 20, government 20, HR letter 5, age 5.
pub(super) fn medium_applicant(target_country: &str) -> RawProfile {
    raw(&[
        ("client_name", "Nour"),
        ("bank_balance", "70000"),
        ("job_type", "government"),
        ("has_hr_letter", "yes"),
        ("age", "30"),
        ("target_country", target_country),
    ])
}

/// Scores exactly 30: balance 10, government 20.
pub(super) fn weak_applicant(target_country: &str) -> RawProfile {
    raw(&[
        ("client_name", "Omar"),
        ("bank_balance", "30000"),
        ("job_type", "government"),
        ("target_country", target_country),
    ])
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

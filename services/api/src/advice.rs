use clap::Args;
use std::path::PathBuf;
use visa_advisor::config::AppConfig;
use visa_advisor::error::AppError;
use visa_advisor::workflows::eligibility::{
    EvaluationEngine, EvaluationResult, ProfileImporter, RawProfile,
};

use crate::infra::parse_field;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Profile field as key=value (repeatable), e.g. --field bank_balance=80000
    #[arg(long = "field", value_parser = parse_field)]
    pub(crate) fields: Vec<(String, String)>,
    /// Flat JSON object with profile fields; --field values override it
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export whose header row names the profile fields
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;
    let profile = profile_from_args(args)?;
    let result = engine.evaluate_raw(&profile);
    render_result(&result);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;
    let profiles = ProfileImporter::from_path(&args.csv)?;

    println!("Evaluated {} applicant(s) from {}", profiles.len(), args.csv.display());
    for profile in &profiles {
        let result = engine.evaluate_raw(profile);
        println!("- {}", result.summary());
        if !result.destination_verdict.is_empty() {
            println!("  {}", result.destination_verdict);
        }
    }

    Ok(())
}

fn configured_engine() -> Result<EvaluationEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(EvaluationEngine::new(config.evaluation))
}

pub(crate) fn profile_from_args(args: EvaluateArgs) -> Result<RawProfile, AppError> {
    let mut profile = match args.profile {
        Some(path) => ProfileImporter::json_from_path(path)?,
        None => RawProfile::new(),
    };

    for (key, value) in args.fields {
        profile.insert(key, value);
    }

    Ok(profile)
}

fn render_result(result: &EvaluationResult) {
    println!("Eligibility report for {}", result.client_name);
    println!("Score: {}/100 ({})", result.score, result.band.label());
    println!("Status: {}", result.band_status);
    println!("Recommended destinations: {}", result.recommended_countries);

    if !result.destination_verdict.is_empty() {
        println!("\nChosen destination\n- {}", result.destination_verdict);
    }

    if result.supporting_reasons.is_empty() {
        println!("\nStrengths: none");
    } else {
        println!("\nStrengths");
        for reason in &result.supporting_reasons {
            println!("- {reason}");
        }
    }

    if result.improvement_suggestions.is_empty() {
        println!("\nImprovements: none");
    } else {
        println!("\nImprovements");
        for suggestion in &result.improvement_suggestions {
            println!("- {suggestion}");
        }
    }

    println!("\nWhy these destinations\n{}", result.evidence);
    println!("\nCaution\n{}", result.caution);
}

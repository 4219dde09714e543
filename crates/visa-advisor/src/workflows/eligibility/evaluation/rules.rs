use super::super::domain::{
    ApplicantProfile, Education, JobType, LanguageLevel, MaritalStatus, TravelHistory,
};
use super::ScoreComponent;
use serde::{Deserialize, Serialize};

/// Scoring criteria, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    BankBalance,
    JobType,
    Salary,
    HrLetter,
    Age,
    MaritalStatus,
    Children,
    Education,
    Language,
    TravelHistory,
    PreviousRefusal,
    TripDuration,
}

/// Outcome of a single criterion before it is folded into the tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Contribution {
    pub points: i16,
    pub reason: Option<String>,
    pub improvement: Option<String>,
}

impl Contribution {
    fn points(points: i16) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    fn reason(points: i16, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
            improvement: None,
        }
    }

    fn improvement(points: i16, improvement: impl Into<String>) -> Self {
        Self {
            points,
            reason: None,
            improvement: Some(improvement.into()),
        }
    }
}

type Criterion = fn(&ApplicantProfile) -> Contribution;

pub(crate) const CRITERIA: [(CriterionKind, Criterion); 12] = [
    (CriterionKind::BankBalance, bank_balance),
    (CriterionKind::JobType, job_type),
    (CriterionKind::Salary, salary),
    (CriterionKind::HrLetter, hr_letter),
    (CriterionKind::Age, age),
    (CriterionKind::MaritalStatus, marital_status),
    (CriterionKind::Children, children),
    (CriterionKind::Education, education),
    (CriterionKind::Language, language),
    (CriterionKind::TravelHistory, travel_history),
    (CriterionKind::PreviousRefusal, previous_refusal),
    (CriterionKind::TripDuration, trip_duration),
];

/// Running totals while folding the criteria.
#[derive(Debug, Default)]
pub(crate) struct ScoreTally {
    pub raw_score: i16,
    pub components: Vec<ScoreComponent>,
    pub reasons: Vec<String>,
    pub improvements: Vec<String>,
}

impl ScoreTally {
    fn absorb(mut self, criterion: CriterionKind, contribution: Contribution) -> Self {
        self.raw_score += contribution.points;
        self.components.push(ScoreComponent {
            criterion,
            points: contribution.points,
        });
        self.reasons.extend(contribution.reason);
        self.improvements.extend(contribution.improvement);
        self
    }

    /// Raw score bounded to 0..=100.
    pub fn clamped_score(&self) -> u8 {
        self.raw_score.clamp(0, 100) as u8
    }
}

pub(crate) fn score_profile(profile: &ApplicantProfile) -> ScoreTally {
    CRITERIA
        .iter()
        .fold(ScoreTally::default(), |tally, (criterion, rule)| {
            tally.absorb(*criterion, rule(profile))
        })
}

fn bank_balance(profile: &ApplicantProfile) -> Contribution {
    match profile.bank_balance {
        balance if balance >= 150_000 => {
            Contribution::reason(30, "Excellent bank balance (above 150,000)")
        }
        balance if balance >= 70_000 => {
            Contribution::reason(20, "Good bank balance, suitable for the trip")
        }
        balance if balance >= 30_000 => Contribution::improvement(
            10,
            "Try raising the balance above 70,000 to strengthen the file",
        ),
        _ => Contribution::improvement(
            0,
            "The current balance is weak; the embassy may doubt you can cover the trip costs",
        ),
    }
}

fn job_type(profile: &ApplicantProfile) -> Contribution {
    let points = match profile.job_type {
        JobType::Government => 20,
        JobType::Private => 15,
        JobType::Freelance => 10,
        JobType::Unemployed | JobType::Unrecognized => 0,
    };
    Contribution::points(points)
}

fn salary(profile: &ApplicantProfile) -> Contribution {
    if profile.salary >= 15_000 {
        Contribution::reason(5, "High monthly salary proves financial capacity")
    } else {
        Contribution::default()
    }
}

fn hr_letter(profile: &ApplicantProfile) -> Contribution {
    if profile.has_hr_letter {
        Contribution::reason(5, "An HR letter backs up the credibility of your employment")
    } else if profile.job_type != JobType::Unemployed {
        Contribution::improvement(0, "Provide a stamped HR letter from your employer")
    } else {
        Contribution::default()
    }
}

fn age(profile: &ApplicantProfile) -> Contribution {
    match profile.age {
        0 => Contribution::default(),
        age if age < 25 => Contribution::improvement(
            -5,
            "At a young age, attach proof of property ownership or current university enrolment",
        ),
        age if age > 55 => Contribution::reason(
            10,
            "The over-55 age group gives a strong impression of intent to return",
        ),
        _ => Contribution::reason(5, "Age falls within the range of professional and social stability"),
    }
}

fn marital_status(profile: &ApplicantProfile) -> Contribution {
    match profile.marital_status {
        MaritalStatus::Married => {
            Contribution::reason(5, "Being married counts as a strong tie to return home")
        }
        MaritalStatus::Other => Contribution::default(),
    }
}

fn children(profile: &ApplicantProfile) -> Contribution {
    if profile.children > 0 {
        Contribution::reason(
            5,
            format!(
                "Having children ({}) strengthens family ties at home",
                profile.children
            ),
        )
    } else {
        Contribution::default()
    }
}

fn education(profile: &ApplicantProfile) -> Contribution {
    const DEGREE_REASON: &str = "A higher degree builds confidence in your professional background";
    match profile.education {
        Education::PostGraduate => Contribution::reason(10, DEGREE_REASON),
        Education::Bachelor => Contribution::reason(7, DEGREE_REASON),
        Education::HighSchool => Contribution::points(3),
        Education::Other => Contribution::default(),
    }
}

fn language(profile: &ApplicantProfile) -> Contribution {
    const LANGUAGE_REASON: &str =
        "Language proficiency eases communication and reduces the consul's doubts";
    match profile.language {
        LanguageLevel::Fluent => Contribution::reason(10, LANGUAGE_REASON),
        LanguageLevel::Intermediate => Contribution::reason(7, LANGUAGE_REASON),
        LanguageLevel::Basic => Contribution::points(3),
        LanguageLevel::Unspecified => Contribution::default(),
    }
}

fn travel_history(profile: &ApplicantProfile) -> Contribution {
    let points = match profile.travel_history {
        TravelHistory::Schengen => 10,
        TravelHistory::Asia => 7,
        TravelHistory::Arab => 4,
        TravelHistory::Unspecified => 0,
    };
    Contribution::points(points)
}

fn previous_refusal(profile: &ApplicantProfile) -> Contribution {
    if profile.previous_refusal {
        Contribution::improvement(
            -10,
            "Attach a cover letter that addresses the previous refusal",
        )
    } else {
        Contribution::default()
    }
}

fn trip_duration(profile: &ApplicantProfile) -> Contribution {
    if profile.trip_duration_days > 15 {
        Contribution::improvement(
            -5,
            "Keeping the first trip under 10 days makes the request more plausible",
        )
    } else {
        Contribution::default()
    }
}

use std::collections::BTreeMap;
use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Name used in verdicts when the applicant did not give one.
pub const DEFAULT_CLIENT_NAME: &str = "valued client";

/// Trip length assumed when the form omits it.
pub const DEFAULT_TRIP_DURATION_DAYS: u32 = 7;

/// Flat field map exactly as the form or JSON object submitted it.
///
/// Keys are case-sensitive. JSON values are coerced to text on the way in: integral numbers
/// become integer text, booleans become `"yes"`/`"no"`, and nulls, arrays, and objects are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawProfile(BTreeMap<String, String>);

impl RawProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn from_json_fields(fields: BTreeMap<String, Value>) -> Self {
        Self(
            fields
                .into_iter()
                .filter_map(|(key, value)| coerce_json_value(value).map(|text| (key, text)))
                .collect(),
        )
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    fn count(&self, key: &str) -> u64 {
        self.get(key).map(parse_count).unwrap_or(0)
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key).map(str::trim) == Some("yes")
    }
}

impl<'de> Deserialize<'de> for RawProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_json_fields(fields))
    }
}

fn coerce_json_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(coerce_json_number(&number)),
        Value::Bool(flag) => Some(if flag { "yes" } else { "no" }.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral JSON numbers (including `150000.0` and `1e20`) become integer text so they
/// parse like their form equivalents; anything else keeps its JSON spelling.
fn coerce_json_number(number: &Number) -> String {
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }

    match number.as_f64() {
        Some(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            // `as` saturates at u64::MAX for values beyond its range.
            (value as u64).to_string()
        }
        _ => number.to_string(),
    }
}

/// Lenient integer parse: values too large for `u64` saturate, anything else that is not a
/// non-negative integer counts as zero.
pub(crate) fn parse_count(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(value) => value,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

fn saturate_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Employment category declared on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Government,
    Private,
    Freelance,
    /// The applicant explicitly answered "none".
    Unemployed,
    /// Missing or unknown answer.
    Unrecognized,
}

impl JobType {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("government") => Self::Government,
            Some("private") => Self::Private,
            Some("freelance") => Self::Freelance,
            Some("none") => Self::Unemployed,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Married,
    Other,
}

impl MaritalStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("married") => Self::Married,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    PostGraduate,
    Bachelor,
    HighSchool,
    Other,
}

impl Education {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("post_grad") => Self::PostGraduate,
            Some("bachelor") => Self::Bachelor,
            Some("high_school") => Self::HighSchool,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    Fluent,
    Intermediate,
    Basic,
    Unspecified,
}

impl LanguageLevel {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("fluent") => Self::Fluent,
            Some("intermediate") => Self::Intermediate,
            Some("basic") => Self::Basic,
            _ => Self::Unspecified,
        }
    }
}

/// Most demanding region the applicant has previously been granted a visa for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelHistory {
    Schengen,
    Asia,
    Arab,
    Unspecified,
}

impl TravelHistory {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("schengen") => Self::Schengen,
            Some("asia") => Self::Asia,
            Some("arab") => Self::Arab,
            _ => Self::Unspecified,
        }
    }
}

/// Typed view of a [`RawProfile`]; construction never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub client_name: String,
    pub bank_balance: u64,
    pub job_type: JobType,
    pub salary: u64,
    pub has_hr_letter: bool,
    /// Zero means the age was not provided.
    pub age: u32,
    pub marital_status: MaritalStatus,
    pub children: u32,
    pub education: Education,
    pub language: LanguageLevel,
    pub travel_history: TravelHistory,
    pub previous_refusal: bool,
    pub trip_duration_days: u32,
    /// Trimmed and lower-cased; `None` when blank.
    pub target_country: Option<String>,
}

impl ApplicantProfile {
    pub fn from_raw(raw: &RawProfile) -> Self {
        let client_name = raw
            .get("client_name")
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_CLIENT_NAME)
            .to_string();

        let trip_duration_days = raw
            .get("trip_duration_days")
            .map(|value| saturate_u32(parse_count(value)))
            .unwrap_or(DEFAULT_TRIP_DURATION_DAYS);

        let target_country = raw
            .get("target_country")
            .map(|country| country.trim().to_lowercase())
            .filter(|country| !country.is_empty());

        Self {
            client_name,
            bank_balance: raw.count("bank_balance"),
            job_type: JobType::from_raw(raw.get("job_type")),
            salary: raw.count("salary"),
            has_hr_letter: raw.flag("has_hr_letter"),
            age: saturate_u32(raw.count("age")),
            marital_status: MaritalStatus::from_raw(raw.get("marital_status")),
            children: saturate_u32(raw.count("children")),
            education: Education::from_raw(raw.get("education")),
            language: LanguageLevel::from_raw(raw.get("language")),
            travel_history: TravelHistory::from_raw(raw.get("travel_history_level")),
            previous_refusal: raw.flag("previous_refusal"),
            trip_duration_days,
            target_country,
        }
    }
}

/// Capitalizes the first character and lower-cases the rest, for display in verdicts.
pub(crate) fn display_country(country: &str) -> String {
    let mut chars = country.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

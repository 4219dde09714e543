use serde::{Deserialize, Serialize};

/// Shown in place of a country list when the band recommends none.
pub const NOT_RECOMMENDED_MESSAGE: &str = "Not recommended to apply at this time";

/// Eligibility tier an evaluated file falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandKind {
    Weak,
    Medium,
    Good,
    Strong,
}

impl BandKind {
    pub const fn label(self) -> &'static str {
        match self {
            BandKind::Weak => "weak",
            BandKind::Medium => "medium",
            BandKind::Good => "good",
            BandKind::Strong => "strong",
        }
    }
}

/// One score range of the strategy table with its narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyBand {
    pub kind: BandKind,
    pub low: u8,
    pub high: u8,
    pub status: &'static str,
    pub countries: &'static [&'static str],
    pub evidence: &'static str,
    pub caution: &'static str,
}

impl StrategyBand {
    pub const fn contains(&self, score: u8) -> bool {
        self.low <= score && score <= self.high
    }

    pub fn recommended_countries(&self) -> String {
        if self.countries.is_empty() {
            NOT_RECOMMENDED_MESSAGE.to_string()
        } else {
            self.countries.join(" / ")
        }
    }
}

/// Bands ordered weak to strong; ranges partition 0..=100.
pub static STRATEGY_TABLE: [StrategyBand; 4] = [
    StrategyBand {
        kind: BandKind::Weak,
        low: 0,
        high: 39,
        status: "File needs improvement (currently weak)",
        countries: &[],
        evidence: "Based on the current criteria the file lacks sufficient ties to the home country. \
                   Applying now risks a refusal that will weigh on future Schengen applications.",
        caution: "Embassies currently refuse files that do not show clear financial and professional \
                  stability (Article 32 of the Visa Code).",
    },
    StrategyBand {
        kind: BandKind::Medium,
        low: 40,
        high: 59,
        status: "Average file (acceptable for flexible tourist destinations)",
        countries: &["Greece", "Spain", "Italy", "Lithuania", "Croatia"],
        evidence: "These countries rely economically on tourism, so their consulates lean towards \
                   flexibility with average files to keep tourist numbers up.",
        caution: "Avoid the Nordic countries (Denmark/Norway) and Germany for now; they expect a \
                  stronger travel history and more precise proof of funds.",
    },
    StrategyBand {
        kind: BandKind::Good,
        low: 60,
        high: 79,
        status: "Very good file (high acceptance chances)",
        countries: &["France", "Netherlands", "Portugal", "Czech Republic", "Hungary"],
        evidence: "The balance between education, language, and bank balance makes you a reliable \
                   traveller. France and the Netherlands grant multiple-entry visas to files like yours.",
        caution: "Your chances are strong, but double-check every document; the Netherlands does not \
                  tolerate inconsistencies in bookings.",
    },
    StrategyBand {
        kind: BandKind::Strong,
        low: 80,
        high: 100,
        status: "Excellent file (elite travellers)",
        countries: &["Germany", "Switzerland", "Austria", "Norway", "Belgium"],
        evidence: "Your file meets the highest legal standards. You can apply to the strictest \
                   embassies with confidence in a high acceptance rate.",
        caution: "No technical obstacles; you qualify for a long-validity circulation visa directly.",
    },
];

pub fn bands() -> &'static [StrategyBand] {
    &STRATEGY_TABLE
}

/// Band whose inclusive range contains `score`, or `None` above 100.
pub fn lookup(score: u8) -> Option<&'static StrategyBand> {
    STRATEGY_TABLE.iter().find(|band| band.contains(score))
}

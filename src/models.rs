use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Happy,
    Sad,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of each label for one calendar day. All three keys are required
/// when reading a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DayRecord {
    #[serde(rename = "Happy")]
    pub happy: u64,
    #[serde(rename = "Sad")]
    pub sad: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
}

impl DayRecord {
    pub fn count_mut(&mut self, label: SentimentLabel) -> &mut u64 {
        match label {
            SentimentLabel::Happy => &mut self.happy,
            SentimentLabel::Sad => &mut self.sad,
            SentimentLabel::Neutral => &mut self.neutral,
        }
    }

    pub fn total(&self) -> u64 {
        self.happy
            .saturating_add(self.sad)
            .saturating_add(self.neutral)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DonateRequest {
    pub text: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LabelPercentages {
    pub happy: f64,
    pub sad: f64,
    pub neutral: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub counts: DayRecord,
    pub total: u64,
    pub percentages: Option<LabelPercentages>,
    pub dominant: Option<SentimentLabel>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub date: NaiveDate,
    pub sentiment: SentimentLabel,
    pub summary: DaySummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DonateResponse {
    pub sentiment: SentimentLabel,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheerResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub counts: DayRecord,
    pub dominant: Option<SentimentLabel>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub end_date: NaiveDate,
    pub last_7_days: Vec<DailyPoint>,
    pub totals: DayRecord,
    pub dominant: Option<SentimentLabel>,
}

use crate::ledger::Ledger;
use crate::models::{DailyPoint, DayRecord, DaySummary, LabelPercentages, StatsResponse};
use chrono::{Duration, NaiveDate};

pub const NO_DATA_MESSAGE: &str = "No data available for the selected date.";

pub fn summarize_day(date: NaiveDate, counts: DayRecord) -> DaySummary {
    let total = counts.total();
    let dominant = counts.dominant_label();
    let percentages = (total > 0).then(|| {
        let share = |count: u64| count as f64 / total as f64 * 100.0;
        LabelPercentages {
            happy: share(counts.happy),
            sad: share(counts.sad),
            neutral: share(counts.neutral),
        }
    });
    let message = match dominant {
        Some(label) => format!("Your average sentiment for {date} is {label} {}.", label.emoji()),
        None => NO_DATA_MESSAGE.to_string(),
    };

    DaySummary {
        date,
        counts,
        total,
        percentages,
        dominant,
        message,
    }
}

/// Seven days ending at `end`, oldest first. Days without a record count
/// as zero.
pub fn build_stats_at(end: NaiveDate, ledger: &Ledger) -> StatsResponse {
    const WINDOW: i64 = 7;

    let mut last_7_days = Vec::with_capacity(WINDOW as usize);
    let mut totals = DayRecord::default();
    for offset in (0..WINDOW).rev() {
        let date = end - Duration::days(offset);
        let counts = ledger.day(date).copied().unwrap_or_default();
        totals.happy = totals.happy.saturating_add(counts.happy);
        totals.sad = totals.sad.saturating_add(counts.sad);
        totals.neutral = totals.neutral.saturating_add(counts.neutral);
        last_7_days.push(DailyPoint {
            date,
            counts,
            dominant: counts.dominant_label(),
        });
    }

    StatsResponse {
        end_date: end,
        last_7_days,
        dominant: totals.dominant_label(),
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;

    #[test]
    fn summary_reports_percentages_and_dominant() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let summary = summarize_day(date, DayRecord { happy: 2, sad: 1, neutral: 1 });

        assert_eq!(summary.total, 4);
        assert_eq!(summary.dominant, Some(SentimentLabel::Happy));
        assert_eq!(
            summary.percentages,
            Some(LabelPercentages { happy: 50.0, sad: 25.0, neutral: 25.0 })
        );
        assert!(summary.message.contains("2025-06-01"));
        assert!(summary.message.contains("Happy"));
    }

    #[test]
    fn summary_without_data() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let summary = summarize_day(date, DayRecord::default());

        assert_eq!(summary.total, 0);
        assert_eq!(summary.dominant, None);
        assert_eq!(summary.percentages, None);
        assert_eq!(summary.message, NO_DATA_MESSAGE);
    }

    #[test]
    fn stats_last_7_days_includes_each_day() {
        let mut ledger = Ledger::new();
        let end = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let two_days_ago = end - Duration::days(2);
        ledger.ensure_day(two_days_ago);
        ledger.increment(two_days_ago, SentimentLabel::Sad).unwrap();
        ledger.increment(two_days_ago, SentimentLabel::Sad).unwrap();
        ledger.ensure_day(end);
        ledger.increment(end, SentimentLabel::Happy).unwrap();

        let stats = build_stats_at(end, &ledger);
        assert_eq!(stats.last_7_days.len(), 7);
        assert_eq!(stats.last_7_days.first().unwrap().date, end - Duration::days(6));
        assert_eq!(stats.last_7_days.last().unwrap().date, end);

        let point = stats
            .last_7_days
            .iter()
            .find(|day| day.date == two_days_ago)
            .expect("missing day");
        assert_eq!(point.counts, DayRecord { happy: 0, sad: 2, neutral: 0 });
        assert_eq!(point.dominant, Some(SentimentLabel::Sad));

        assert_eq!(stats.totals, DayRecord { happy: 1, sad: 2, neutral: 0 });
        assert_eq!(stats.dominant, Some(SentimentLabel::Sad));
    }

    #[test]
    fn stats_ignore_days_outside_window() {
        let mut ledger = Ledger::new();
        let end = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let old = end - Duration::days(7);
        ledger.ensure_day(old);
        ledger.increment(old, SentimentLabel::Happy).unwrap();

        let stats = build_stats_at(end, &ledger);
        assert_eq!(stats.totals, DayRecord::default());
        assert_eq!(stats.dominant, None);
    }
}

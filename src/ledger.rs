//! Per-day sentiment counts.
//!
//! A [`Ledger`] is a plain value: it knows nothing about where it is stored
//! or which date the page currently shows. Callers pass the date in and
//! persist the ledger themselves after every change.

use crate::classifier::SentimentClassifier;
use crate::models::{DayRecord, SentimentLabel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("text is empty")]
    EmptyText,

    #[error("no record for {0}")]
    UnknownDate(NaiveDate),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a zeroed record for `date` if none exists. Returns `true` when
    /// a record was created.
    pub fn ensure_day(&mut self, date: NaiveDate) -> bool {
        if self.days.contains_key(&date) {
            return false;
        }
        self.days.insert(date, DayRecord::default());
        true
    }

    /// Adds one observation of `label` to `date`. The date must have been
    /// created with [`Ledger::ensure_day`].
    pub fn increment(
        &mut self,
        date: NaiveDate,
        label: SentimentLabel,
    ) -> Result<DayRecord, LedgerError> {
        let record = self
            .days
            .get_mut(&date)
            .ok_or(LedgerError::UnknownDate(date))?;
        let count = record.count_mut(label);
        *count = count.saturating_add(1);
        Ok(*record)
    }

    /// Classifies `text` and counts the result under `date`. Blank text is
    /// rejected before the classifier is consulted and leaves the ledger
    /// untouched.
    pub fn record_text(
        &mut self,
        date: NaiveDate,
        text: &str,
        classifier: &dyn SentimentClassifier,
    ) -> Result<SentimentLabel, LedgerError> {
        if text.trim().is_empty() {
            return Err(LedgerError::EmptyText);
        }
        let label = classifier.classify(text);
        self.ensure_day(date);
        self.increment(date, label)?;
        Ok(label)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl DayRecord {
    /// The label with the strictly greatest count. Any tie for the top count
    /// resolves to `Neutral`; a day with no observations has no dominant
    /// label.
    pub fn dominant_label(&self) -> Option<SentimentLabel> {
        if self.total() == 0 {
            return None;
        }
        let label = if self.happy > self.sad && self.happy > self.neutral {
            SentimentLabel::Happy
        } else if self.sad > self.happy && self.sad > self.neutral {
            SentimentLabel::Sad
        } else {
            SentimentLabel::Neutral
        };
        Some(label)
    }
}

// ABOUTME: Daily log entry (one per user per calendar date) and the partial update merged into it
// ABOUTME: Dates serialize as YYYY-MM-DD; absent numeric fields contribute nothing to aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of intake, weight and notes
///
/// Ordering by `date` is the same as lexicographic ordering of the
/// `YYYY-MM-DD` wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogEntry {
    /// Calendar date
    pub date: NaiveDate,
    /// Calories eaten (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein eaten (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLogEntry {
    /// Empty entry for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            calories: None,
            protein: None,
            weight: None,
            notes: None,
        }
    }

    /// Set calories
    #[must_use]
    pub const fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set protein
    #[must_use]
    pub const fn with_protein(mut self, protein: f64) -> Self {
        self.protein = Some(protein);
        self
    }

    /// Set weight
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Subset of fields written to a date; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLogPatch {
    /// Calories eaten (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein eaten (grams)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Body weight (kg)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Free-form note
    #[serde(default)]
    pub notes: Option<String>,
}

impl DailyLogPatch {
    /// Food log: calories and protein together
    #[must_use]
    pub const fn food(calories: f64, protein: f64) -> Self {
        Self {
            calories: Some(calories),
            protein: Some(protein),
            weight: None,
            notes: None,
        }
    }

    /// Weigh-in
    #[must_use]
    pub const fn weight(weight: f64) -> Self {
        Self {
            calories: None,
            protein: None,
            weight: Some(weight),
            notes: None,
        }
    }

    /// Note
    pub fn note(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::default()
        }
    }

    /// Merge into an existing entry, keeping fields the patch does not set
    pub fn apply_to(self, entry: &mut DailyLogEntry) {
        if let Some(calories) = self.calories {
            entry.calories = Some(calories);
        }
        if let Some(protein) = self.protein {
            entry.protein = Some(protein);
        }
        if let Some(weight) = self.weight {
            entry.weight = Some(weight);
        }
        if let Some(notes) = self.notes {
            entry.notes = Some(notes);
        }
    }

    /// Entry for `date` holding only the patched fields
    #[must_use]
    pub fn into_entry(self, date: NaiveDate) -> DailyLogEntry {
        let mut entry = DailyLogEntry::new(date);
        self.apply_to(&mut entry);
        entry
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_patch_merges_instead_of_replacing() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut entry = DailyLogPatch::food(2100.0, 150.0).into_entry(date);

        DailyLogPatch::weight(80.2).apply_to(&mut entry);

        assert_eq!(entry.calories, Some(2100.0));
        assert_eq!(entry.protein, Some(150.0));
        assert_eq!(entry.weight, Some(80.2));
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_entry_wire_format() {
        let json = r#"{"date":"2024-01-08","weight":79.3}"#;
        let entry: DailyLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(entry.weight, Some(79.3));
        assert!(entry.calories.is_none());
        assert_eq!(serde_json::to_string(&entry).unwrap(), json);

        assert!(serde_json::from_str::<DailyLogEntry>(r#"{"date":"2024-13-01"}"#).is_err());
    }
}

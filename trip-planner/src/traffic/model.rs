//! Traffic multipliers by day type.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use indexmap::IndexMap;

use crate::domain::DomainError;

/// Whether a trip happens on a weekday or at the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Saturday and Sunday are the weekend; every other day is a weekday.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_weekday(date.weekday())
    }

    pub fn for_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }

    /// Fare multiplier for tickets bought on this day type.
    ///
    /// Weekend tickets are discounted by ten percent.
    pub fn fare_factor(&self) -> f64 {
        match self {
            DayType::Weekday => 1.0,
            DayType::Weekend => 0.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error building a traffic model from multiplier tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrafficModelError {
    /// No traffic labels were given
    #[error("traffic model needs at least one label")]
    EmptyVocabulary,

    /// Weekday and weekend tables use different labels
    #[error("weekday and weekend tables must use the same labels")]
    MismatchedLabels,

    /// A multiplier was zero, negative, or not finite
    #[error("multiplier for {label} must be positive, got {multiplier}")]
    NonPositiveMultiplier { label: String, multiplier: f64 },
}

/// Maps a traffic label to a travel-time multiplier, per day type.
///
/// Both day types share a single label vocabulary, so a label drawn by a
/// [`crate::traffic::TrafficSampler`] is valid on any day.
///
/// # Examples
///
/// ```
/// use trip_planner::traffic::{DayType, TrafficModel};
///
/// let model = TrafficModel::default();
/// assert_eq!(model.multiplier_for(DayType::Weekday, "moderate").unwrap(), 1.0);
/// assert_eq!(model.multiplier_for(DayType::Weekend, "high").unwrap(), 1.6);
/// assert!(model.multiplier_for(DayType::Weekday, "gridlock").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficModel {
    weekday: IndexMap<String, f64>,
    weekend: IndexMap<String, f64>,
}

impl TrafficModel {
    /// Build a model from weekday and weekend tables.
    ///
    /// Label order follows the weekday table.
    pub fn new<L, W, E>(weekday: W, weekend: E) -> Result<Self, TrafficModelError>
    where
        L: Into<String>,
        W: IntoIterator<Item = (L, f64)>,
        E: IntoIterator<Item = (L, f64)>,
    {
        let weekday = collect_table(weekday)?;
        let weekend = collect_table(weekend)?;

        if weekday.is_empty() {
            return Err(TrafficModelError::EmptyVocabulary);
        }

        let weekday_labels: HashSet<&String> = weekday.keys().collect();
        let weekend_labels: HashSet<&String> = weekend.keys().collect();
        if weekday_labels != weekend_labels {
            return Err(TrafficModelError::MismatchedLabels);
        }

        Ok(Self { weekday, weekend })
    }

    /// Multiplier for `label` on the given day type.
    pub fn multiplier_for(&self, day_type: DayType, label: &str) -> Result<f64, DomainError> {
        self.table(day_type)
            .get(label)
            .copied()
            .ok_or_else(|| DomainError::UnknownTrafficLabel(label.to_string()))
    }

    /// The shared label vocabulary.
    pub fn labels(&self) -> Vec<&str> {
        self.weekday.keys().map(String::as_str).collect()
    }

    /// Check whether a label is part of the vocabulary.
    pub fn has_label(&self, label: &str) -> bool {
        self.weekday.contains_key(label)
    }

    /// Day type at the calendar day of `instant`, in its own time zone.
    pub fn day_type_for<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DayType {
        DayType::for_date(instant.date_naive())
    }

    fn table(&self, day_type: DayType) -> &IndexMap<String, f64> {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }
}

impl Default for TrafficModel {
    /// Low, moderate and high traffic; weekends are slower across the board.
    fn default() -> Self {
        let table = |low: f64, moderate: f64, high: f64| {
            IndexMap::from([
                ("low".to_string(), low),
                ("moderate".to_string(), moderate),
                ("high".to_string(), high),
            ])
        };
        Self {
            weekday: table(0.8, 1.0, 1.3),
            weekend: table(1.1, 1.3, 1.6),
        }
    }
}

fn collect_table<L, I>(entries: I) -> Result<IndexMap<String, f64>, TrafficModelError>
where
    L: Into<String>,
    I: IntoIterator<Item = (L, f64)>,
{
    let mut table = IndexMap::new();
    for (label, multiplier) in entries {
        let label = label.into();
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(TrafficModelError::NonPositiveMultiplier { label, multiplier });
        }
        table.insert(label, multiplier);
    }
    Ok(table)
}

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use ironweek_domain as domain;

const MANUAL: &str = "manual";

/// Persisted state of the lifter: 1RM table, performance log and new 1RM estimates.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Document {
    #[serde(rename = "1RM", default)]
    pub one_rep_max: BTreeMap<String, f64>,
    #[serde(default)]
    pub logs: BTreeMap<String, LogEntry>,
    #[serde(rename = "new_1RM", default)]
    pub new_one_rep_max: BTreeMap<String, NewOneRepMax>,
}

impl Document {
    #[must_use]
    pub fn with_baselines(config: &domain::ProgramConfig) -> Self {
        Self {
            one_rep_max: config.baselines.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn one_rep_max_table(&self) -> domain::OneRepMaxTable {
        self.one_rep_max
            .iter()
            .map(|(exercise, value)| (exercise.clone(), *value))
            .collect()
    }

    pub fn set_one_rep_max_table(&mut self, table: &domain::OneRepMaxTable) {
        self.one_rep_max = table
            .iter()
            .map(|(exercise, value)| (exercise.clone(), *value))
            .collect();
    }

    /// Performance log of all entries with a valid key. Invalid keys are skipped.
    #[must_use]
    pub fn performance_log(&self) -> domain::PerformanceLog {
        self.logs
            .iter()
            .filter_map(|(key, entry)| match key.parse::<domain::LogKey>() {
                Ok(key) => Some((key, domain::PerformanceEntry::from(entry))),
                Err(err) => {
                    warn!("skipping log entry: {err}");
                    None
                }
            })
            .collect()
    }

    pub fn record(&mut self, key: domain::LogKey, entry: domain::PerformanceEntry) {
        self.logs.insert(key.to_string(), LogEntry::from(entry));
    }

    #[must_use]
    pub fn new_one_rep_max_values(&self) -> BTreeMap<String, domain::NewOneRepMax> {
        self.new_one_rep_max
            .iter()
            .filter_map(|(exercise, value)| match value {
                NewOneRepMax::Estimated(value) => {
                    Some((exercise.clone(), domain::NewOneRepMax::Estimated(*value)))
                }
                NewOneRepMax::Label(label) if label == MANUAL => {
                    Some((exercise.clone(), domain::NewOneRepMax::Manual))
                }
                NewOneRepMax::Label(label) => {
                    warn!("skipping new 1RM of {exercise}: unexpected value \"{label}\"");
                    None
                }
            })
            .collect()
    }

    pub fn set_new_one_rep_max(&mut self, exercise: &str, value: domain::NewOneRepMax) {
        self.new_one_rep_max
            .insert(exercise.to_string(), NewOneRepMax::from(value));
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct LogEntry {
    #[serde(default)]
    pub actual_weight: f64,
    #[serde(default)]
    pub actual_reps: u32,
}

impl From<&LogEntry> for domain::PerformanceEntry {
    fn from(value: &LogEntry) -> Self {
        Self {
            actual_weight: value.actual_weight,
            actual_reps: value.actual_reps,
        }
    }
}

impl From<domain::PerformanceEntry> for LogEntry {
    fn from(value: domain::PerformanceEntry) -> Self {
        Self {
            actual_weight: value.actual_weight,
            actual_reps: value.actual_reps,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NewOneRepMax {
    Estimated(f64),
    Label(String),
}

impl From<domain::NewOneRepMax> for NewOneRepMax {
    fn from(value: domain::NewOneRepMax) -> Self {
        match value {
            domain::NewOneRepMax::Estimated(value) => NewOneRepMax::Estimated(value),
            domain::NewOneRepMax::Manual => NewOneRepMax::Label(MANUAL.to_string()),
        }
    }
}

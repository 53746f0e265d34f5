use std::collections::BTreeMap;

use crate::ProgramConfig;

/// The lifter's 1RM values by exercise name.
///
/// For the pull-up exercise the value is the maximum number of unbroken reps.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OneRepMaxTable {
    values: BTreeMap<String, f64>,
}

impl OneRepMaxTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table populated with the configured baseline values.
    #[must_use]
    pub fn from_baselines(config: &ProgramConfig) -> Self {
        Self {
            values: config.baselines.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, exercise: &str) -> Option<f64> {
        self.values.get(exercise).copied()
    }

    /// Value for the exercise, or the configured baseline if the table has no entry.
    #[must_use]
    pub fn get_or_baseline(&self, exercise: &str, config: &ProgramConfig) -> f64 {
        self.get(exercise)
            .unwrap_or_else(|| config.baseline(exercise))
    }

    pub fn set(&mut self, exercise: &str, value: f64) -> Option<f64> {
        self.values.insert(exercise.to_string(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.values.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, f64)> for OneRepMaxTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

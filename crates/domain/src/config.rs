use std::collections::BTreeMap;

use crate::{Quantity, Week};

pub const PULLUP_EXERCISE_NAME: &str = "Pull-Up Variation";

/// Constants of the training program.
///
/// The configuration is immutable once handed to the engine. Alternative program variants are
/// expressed by constructing a different configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramConfig {
    pub weight_rounding: f64,
    pub main_lift: MainLiftConfig,
    pub accessory: AccessoryConfig,
    pub pullup: PullUpConfig,
    /// Default 1RM values used for exercises missing from the lifter's table.
    pub baselines: BTreeMap<String, f64>,
}

impl ProgramConfig {
    #[must_use]
    pub fn baseline(&self, exercise: &str) -> f64 {
        self.baselines.get(exercise).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_pullup(&self, exercise: &str) -> bool {
        exercise == self.pullup.exercise_name
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            weight_rounding: 5.0,
            main_lift: MainLiftConfig::default(),
            accessory: AccessoryConfig::default(),
            pullup: PullUpConfig::default(),
            baselines: BTreeMap::from([
                ("Back Squat".to_string(), 275.0),
                ("Deadlift".to_string(), 140.0),
                ("Incline DB Press".to_string(), 80.0),
                ("Overhead Press (OHP)".to_string(), 155.0),
                (PULLUP_EXERCISE_NAME.to_string(), 8.0),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainLiftConfig {
    /// Sets per week, indexed by week 1 to 6.
    pub sets: [Quantity; 6],
    /// Reps per week, indexed by week 1 to 6.
    pub reps: [Quantity; 6],
    pub initial_percentage: f64,
    pub increase_on_success: f64,
    pub deload_percentage: f64,
}

impl MainLiftConfig {
    #[must_use]
    pub fn sets(&self, week: Week) -> &Quantity {
        &self.sets[week.index()]
    }

    #[must_use]
    pub fn reps(&self, week: Week) -> &Quantity {
        &self.reps[week.index()]
    }

    /// Total reps prescribed for a week, using the lower bound of each range.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub fn prescribed_total_reps(&self, week: Week) -> u32 {
        self.sets(week)
            .numeric_sets()
            .saturating_mul(self.reps(week).target_reps())
    }
}

impl Default for MainLiftConfig {
    fn default() -> Self {
        Self {
            sets: [
                Quantity::Range(3, 4),
                Quantity::Range(3, 4),
                Quantity::Range(3, 4),
                Quantity::Range(3, 4),
                Quantity::Range(3, 4),
                Quantity::Range(2, 3),
            ],
            reps: [
                Quantity::Range(8, 10),
                Quantity::Range(8, 10),
                Quantity::Range(5, 6),
                Quantity::Range(5, 6),
                Quantity::Range(3, 5),
                Quantity::Range(6, 8),
            ],
            initial_percentage: 0.625,
            increase_on_success: 0.04,
            deload_percentage: 0.55,
        }
    }
}

/// Deload volume of accessory and core slots. Regular volume comes from the template.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessoryConfig {
    pub deload_sets: Quantity,
    pub deload_reps: Quantity,
}

impl Default for AccessoryConfig {
    fn default() -> Self {
        Self {
            deload_sets: Quantity::Fixed(2),
            deload_reps: Quantity::Fixed(12),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullUpConfig {
    pub exercise_name: String,
    pub sets: u32,
    pub reps: Quantity,
    pub reps_per_set_threshold: u32,
    pub increment: f64,
    pub deload_sets: u32,
    pub deload_reps: u32,
    pub deload_percentage: f64,
}

impl Default for PullUpConfig {
    fn default() -> Self {
        Self {
            exercise_name: PULLUP_EXERCISE_NAME.to_string(),
            sets: 3,
            reps: Quantity::Range(8, 10),
            reps_per_set_threshold: 10,
            increment: 5.0,
            deload_sets: 2,
            deload_reps: 5,
            deload_percentage: 0.55,
        }
    }
}

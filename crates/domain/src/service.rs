use std::collections::BTreeMap;

use log::{debug, error, info};

use crate::{
    Engine, LogKey, NewOneRepMax, OneRepMaxTable, PerformanceEntry, PerformanceLog, Position,
    ReadError, UpdateError, Week, WeekPrescription, coerce_integer, coerce_number,
    estimate_new_one_rep_max_from_input,
};

/// Storage of the lifter's 1RM table, performance log and new 1RM estimates.
pub trait TrainingRepository {
    fn read_one_rep_max(&self) -> Result<OneRepMaxTable, ReadError>;
    fn replace_one_rep_max(&self, table: OneRepMaxTable) -> Result<OneRepMaxTable, UpdateError>;
    fn read_performance_log(&self) -> Result<PerformanceLog, ReadError>;
    fn write_performance_entry(
        &self,
        key: LogKey,
        entry: PerformanceEntry,
    ) -> Result<PerformanceEntry, UpdateError>;
    fn read_new_one_rep_max(&self) -> Result<BTreeMap<String, NewOneRepMax>, ReadError>;
    fn write_new_one_rep_max(
        &self,
        exercise: &str,
        value: NewOneRepMax,
    ) -> Result<NewOneRepMax, UpdateError>;
}

pub struct Service<R> {
    repository: R,
    engine: Engine,
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoDocument) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: TrainingRepository> Service<R> {
    pub fn new(repository: R, engine: Engine) -> Self {
        Self { repository, engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn get_week(&self, week: Week) -> Result<WeekPrescription, ReadError> {
        let one_rep_max = self.get_one_rep_max()?;
        let log = log_on_error!(
            self.repository.read_performance_log(),
            ReadError,
            "read",
            "performance log"
        )?;
        Ok(self.engine.prescribe_week(week, &one_rep_max, &log))
    }

    pub fn get_one_rep_max(&self) -> Result<OneRepMaxTable, ReadError> {
        log_on_error!(
            self.repository.read_one_rep_max(),
            ReadError,
            "read",
            "1RM table"
        )
    }

    /// Replace the 1RM table by the entered values.
    ///
    /// Values that are not numbers are replaced by the configured baseline of the exercise.
    pub fn set_one_rep_max(&self, inputs: &[(&str, &str)]) -> Result<OneRepMaxTable, UpdateError> {
        let config = self.engine.config();
        let table = inputs
            .iter()
            .map(|(exercise, value)| {
                (
                    (*exercise).to_string(),
                    coerce_number(value, config.baseline(exercise)),
                )
            })
            .collect();
        log_on_error!(
            self.repository.replace_one_rep_max(table),
            UpdateError,
            "replace",
            "1RM table"
        )
    }

    /// Record the actual performance of a slot, replacing any earlier entry.
    ///
    /// Text that is not a number is recorded as 0.
    pub fn log_performance(
        &self,
        week: Week,
        position: Position,
        weight: &str,
        reps: &str,
    ) -> Result<PerformanceEntry, UpdateError> {
        let key = LogKey { week, position };
        if self.engine.template().slot(week, position).is_none() {
            return Err(UpdateError::UnknownSlot(key));
        }
        let entry = PerformanceEntry {
            actual_weight: coerce_number(weight, 0.0),
            actual_reps: coerce_integer(reps, 0),
        };
        debug!("log {key}: {} x {}", entry.actual_weight, entry.actual_reps);
        log_on_error!(
            self.repository.write_performance_entry(key, entry),
            UpdateError,
            "write",
            "performance entry"
        )
    }

    /// Estimate and store the new 1RM of an exercise from its final week performance.
    pub fn calculate_new_one_rep_max(
        &self,
        exercise: &str,
        weight: &str,
        reps: &str,
    ) -> Result<NewOneRepMax, UpdateError> {
        let value =
            estimate_new_one_rep_max_from_input(self.engine.config(), exercise, weight, reps)?;
        log_on_error!(
            self.repository.write_new_one_rep_max(exercise, value),
            UpdateError,
            "write",
            "new 1RM"
        )
    }

    /// Copy all estimated new 1RM values into the 1RM table.
    ///
    /// Exercises whose new 1RM has to be calculated manually keep their current value.
    pub fn adopt_new_one_rep_max(&self) -> Result<OneRepMaxTable, UpdateError> {
        let mut table = self.get_one_rep_max()?;
        let estimates = log_on_error!(
            self.repository.read_new_one_rep_max(),
            ReadError,
            "read",
            "new 1RM"
        )?;
        for (exercise, value) in estimates {
            if let NewOneRepMax::Estimated(value) = value {
                info!("adopt new 1RM of {exercise}: {value}");
                table.set(&exercise, value);
            }
        }
        log_on_error!(
            self.repository.replace_one_rep_max(table),
            UpdateError,
            "replace",
            "1RM table"
        )
    }
}

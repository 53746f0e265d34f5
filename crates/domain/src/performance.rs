use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{Position, Week};

/// Key of a logged performance: week, day index and exercise index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogKey {
    pub week: Week,
    pub position: Position,
}

impl LogKey {
    #[must_use]
    pub fn new(week: Week, day: usize, exercise: usize) -> Self {
        Self {
            week,
            position: Position { day, exercise },
        }
    }
}

impl fmt::Display for LogKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Week{}_Day{}_Ex{}",
            self.week, self.position.day, self.position.exercise
        )
    }
}

impl FromStr for LogKey {
    type Err = LogKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LogKeyError::Invalid(s.to_string());
        let mut parts = s.split('_');
        let (Some(week), Some(day), Some(exercise), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let week = index::<u8>(week, "Week").ok_or_else(invalid)?;
        let day = index::<usize>(day, "Day").ok_or_else(invalid)?;
        let exercise = index::<usize>(exercise, "Ex").ok_or_else(invalid)?;
        let week = Week::new(week).map_err(|_| invalid())?;
        Ok(LogKey::new(week, day, exercise))
    }
}

/// Number following `prefix`, written in canonical form: ASCII digits only, no leading zeros.
fn index<T: FromStr>(part: &str, prefix: &str) -> Option<T> {
    let digits = part.strip_prefix(prefix)?;
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if canonical { digits.parse().ok() } else { None }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LogKeyError {
    #[error("invalid log key: {0}")]
    Invalid(String),
}

/// Actual performance logged for one slot in one week.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PerformanceEntry {
    pub actual_weight: f64,
    pub actual_reps: u32,
}

/// Logged performances of the lifter. Entries are only inserted or overwritten.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PerformanceLog {
    entries: BTreeMap<LogKey, PerformanceEntry>,
}

impl PerformanceLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &LogKey) -> Option<&PerformanceEntry> {
        self.entries.get(key)
    }

    /// Insert an entry, replacing any previous entry with the same key.
    pub fn record(&mut self, key: LogKey, entry: PerformanceEntry) -> Option<PerformanceEntry> {
        self.entries.insert(key, entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogKey, &PerformanceEntry)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(LogKey, PerformanceEntry)> for PerformanceLog {
    fn from_iter<T: IntoIterator<Item = (LogKey, PerformanceEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn key(week: u8, day: usize, exercise: usize) -> LogKey {
        LogKey::new(Week::new(week).unwrap(), day, exercise)
    }

    #[test]
    fn test_log_key_display() {
        assert_eq!(key(2, 0, 3).to_string(), "Week2_Day0_Ex3");
    }

    #[rstest]
    #[case("Week1_Day0_Ex0", Ok(key(1, 0, 0)))]
    #[case("Week6_Day3_Ex4", Ok(key(6, 3, 4)))]
    #[case("Week7_Day0_Ex0", Err(LogKeyError::Invalid("Week7_Day0_Ex0".to_string())))]
    #[case("Week1_Day0", Err(LogKeyError::Invalid("Week1_Day0".to_string())))]
    #[case("Week1_Day0_Ex0_X", Err(LogKeyError::Invalid("Week1_Day0_Ex0_X".to_string())))]
    #[case("Week1_DayA_Ex0", Err(LogKeyError::Invalid("Week1_DayA_Ex0".to_string())))]
    #[case("W1_D0_E0", Err(LogKeyError::Invalid("W1_D0_E0".to_string())))]
    #[case("Week+2_Day1_Ex0", Err(LogKeyError::Invalid("Week+2_Day1_Ex0".to_string())))]
    #[case("Week2_Day01_Ex0", Err(LogKeyError::Invalid("Week2_Day01_Ex0".to_string())))]
    #[case("Week2_Day1_Ex00", Err(LogKeyError::Invalid("Week2_Day1_Ex00".to_string())))]
    #[case("Week02_Day1_Ex0", Err(LogKeyError::Invalid("Week02_Day1_Ex0".to_string())))]
    #[case("Week2_Day_Ex0", Err(LogKeyError::Invalid("Week2_Day_Ex0".to_string())))]
    #[case("Week2_Day10_Ex0", Ok(key(2, 10, 0)))]
    fn test_log_key_from_str(#[case] input: &str, #[case] expected: Result<LogKey, LogKeyError>) {
        assert_eq!(input.parse::<LogKey>(), expected);
    }

    #[test]
    fn test_performance_log_record_overwrites() {
        let mut log = PerformanceLog::new();
        let first = PerformanceEntry {
            actual_weight: 185.0,
            actual_reps: 30,
        };
        let second = PerformanceEntry {
            actual_weight: 190.0,
            actual_reps: 28,
        };
        assert_eq!(log.record(key(2, 1, 0), first), None);
        assert_eq!(log.record(key(2, 1, 0), second), Some(first));
        assert_eq!(log.get(&key(2, 1, 0)), Some(&second));
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(&key(3, 1, 0)), None);
    }
}

use std::{collections::BTreeMap, fs, io, path::Path};

use anyhow::anyhow;
use log::info;
use serde::Deserialize;

use ironweek_domain as domain;

/// Load a program configuration from a JSON file.
///
/// Fields missing from the file keep their default value. Baselines are merged into the
/// default baselines.
pub fn load_config(path: impl AsRef<Path>) -> Result<domain::ProgramConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|err| anyhow!(err).context(format!("failed to read {}", path.display())))?;
    parse_config(&content)
}

/// Load a program configuration from a JSON file, or use the default configuration if the
/// file does not exist.
pub fn load_config_or_default(
    path: impl AsRef<Path>,
) -> Result<domain::ProgramConfig, ConfigError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("{} not found, using default configuration", path.display());
            Ok(domain::ProgramConfig::default())
        }
        _ => load_config(path),
    }
}

pub fn parse_config(content: &str) -> Result<domain::ProgramConfig, ConfigError> {
    let file: ConfigFile = serde_json::from_str(content)?;
    file.apply(domain::ProgramConfig::default())
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{field} must contain one value per week (6 != {len})")]
    WeekTable { field: &'static str, len: usize },
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    weight_rounding: Option<f64>,
    main_lift: MainLiftFile,
    accessory: AccessoryFile,
    pullup: PullUpFile,
    baselines: BTreeMap<String, f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct MainLiftFile {
    sets: Option<Vec<QuantityValue>>,
    reps: Option<Vec<QuantityValue>>,
    initial_percentage: Option<f64>,
    increase_on_success: Option<f64>,
    deload_percentage: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct AccessoryFile {
    deload_sets: Option<QuantityValue>,
    deload_reps: Option<QuantityValue>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct PullUpFile {
    exercise_name: Option<String>,
    sets: Option<u32>,
    reps: Option<QuantityValue>,
    reps_per_set_threshold: Option<u32>,
    increment: Option<f64>,
    deload_sets: Option<u32>,
    deload_reps: Option<u32>,
    deload_percentage: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum QuantityValue {
    Number(u32),
    Text(String),
}

impl From<QuantityValue> for domain::Quantity {
    fn from(value: QuantityValue) -> Self {
        match value {
            QuantityValue::Number(number) => domain::Quantity::Fixed(number),
            QuantityValue::Text(text) => domain::Quantity::parse(&text),
        }
    }
}

impl ConfigFile {
    fn apply(self, mut config: domain::ProgramConfig) -> Result<domain::ProgramConfig, ConfigError> {
        if let Some(weight_rounding) = self.weight_rounding {
            config.weight_rounding = finite("weight_rounding", weight_rounding)?;
        }

        let main_lift = &mut config.main_lift;
        if let Some(sets) = self.main_lift.sets {
            main_lift.sets = week_table("main_lift.sets", sets)?;
        }
        if let Some(reps) = self.main_lift.reps {
            main_lift.reps = week_table("main_lift.reps", reps)?;
        }
        if let Some(value) = self.main_lift.initial_percentage {
            main_lift.initial_percentage = finite("main_lift.initial_percentage", value)?;
        }
        if let Some(value) = self.main_lift.increase_on_success {
            main_lift.increase_on_success = finite("main_lift.increase_on_success", value)?;
        }
        if let Some(value) = self.main_lift.deload_percentage {
            main_lift.deload_percentage = finite("main_lift.deload_percentage", value)?;
        }

        if let Some(sets) = self.accessory.deload_sets {
            config.accessory.deload_sets = sets.into();
        }
        if let Some(reps) = self.accessory.deload_reps {
            config.accessory.deload_reps = reps.into();
        }

        let pullup = &mut config.pullup;
        if let Some(name) = self.pullup.exercise_name {
            if let Some(baseline) = config.baselines.remove(&pullup.exercise_name) {
                config.baselines.insert(name.clone(), baseline);
            }
            pullup.exercise_name = name;
        }
        if let Some(sets) = self.pullup.sets {
            pullup.sets = sets;
        }
        if let Some(reps) = self.pullup.reps {
            pullup.reps = reps.into();
        }
        if let Some(threshold) = self.pullup.reps_per_set_threshold {
            pullup.reps_per_set_threshold = threshold;
        }
        if let Some(increment) = self.pullup.increment {
            pullup.increment = finite("pullup.increment", increment)?;
        }
        if let Some(sets) = self.pullup.deload_sets {
            pullup.deload_sets = sets;
        }
        if let Some(reps) = self.pullup.deload_reps {
            pullup.deload_reps = reps;
        }
        if let Some(value) = self.pullup.deload_percentage {
            pullup.deload_percentage = finite("pullup.deload_percentage", value)?;
        }

        for (exercise, value) in self.baselines {
            config.baselines.insert(exercise, finite("baselines", value)?);
        }

        Ok(config)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite(field))
    }
}

fn week_table(
    field: &'static str,
    values: Vec<QuantityValue>,
) -> Result<[domain::Quantity; 6], ConfigError> {
    let len = values.len();
    values
        .into_iter()
        .map(domain::Quantity::from)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| ConfigError::WeekTable { field, len })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_config_empty() {
        assert_eq!(parse_config("{}").unwrap(), domain::ProgramConfig::default());
    }

    #[test]
    fn test_parse_config_overrides() {
        let config = parse_config(
            r#"{
                "weight_rounding": 2.5,
                "main_lift": {
                    "reps": ["5", "5", "3", "3", "1-3", 5],
                    "increase_on_success": 0.025
                },
                "accessory": { "deload_reps": "8-10" },
                "pullup": { "exercise_name": "Chin-Up", "deload_sets": 3 },
                "baselines": { "Back Squat": 300, "Front Squat": 200 }
            }"#,
        )
        .unwrap();

        let mut expected = domain::ProgramConfig::default();
        expected.weight_rounding = 2.5;
        expected.main_lift.reps = [
            domain::Quantity::Fixed(5),
            domain::Quantity::Fixed(5),
            domain::Quantity::Fixed(3),
            domain::Quantity::Fixed(3),
            domain::Quantity::Range(1, 3),
            domain::Quantity::Fixed(5),
        ];
        expected.main_lift.increase_on_success = 0.025;
        expected.accessory.deload_reps = domain::Quantity::Range(8, 10);
        expected.pullup.exercise_name = "Chin-Up".to_string();
        expected.pullup.deload_sets = 3;
        expected.baselines.remove(domain::PULLUP_EXERCISE_NAME);
        expected.baselines.insert("Chin-Up".to_string(), 8.0);
        expected.baselines.insert("Back Squat".to_string(), 300.0);
        expected.baselines.insert("Front Squat".to_string(), 200.0);
        assert_eq!(config, expected);
    }

    #[rstest]
    #[case(r#"{"main_lift": {"sets": ["3-4", "3-4"]}}"#, "main_lift.sets", 2)]
    #[case(r#"{"main_lift": {"reps": [8, 8, 5, 5, 3, 6, 6]}}"#, "main_lift.reps", 7)]
    fn test_parse_config_week_table(
        #[case] content: &str,
        #[case] expected_field: &str,
        #[case] expected_len: usize,
    ) {
        assert!(matches!(
            parse_config(content),
            Err(ConfigError::WeekTable { field, len }) if field == expected_field && len == expected_len
        ));
    }

    #[rstest]
    #[case(r#"{"weeks": 8}"#)]
    #[case(r#"{"weight_rounding": "five"}"#)]
    #[case(r#"{"pullup": {"sets": -1}}"#)]
    #[case("[")]
    fn test_parse_config_invalid_json(#[case] content: &str) {
        assert!(matches!(parse_config(content), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_config_or_default(dir.path().join("config.json")).unwrap(),
            domain::ProgramConfig::default()
        );
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"pullup": {"increment": 2.5}}"#).unwrap();
        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config.pullup.increment, 2.5);
        assert!(matches!(
            load_config(dir.path().join("missing.json")),
            Err(ConfigError::Other(_))
        ));
    }
}

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, anyhow};
use log::{debug, info};

use ironweek_domain as domain;

use crate::Document;

/// Stores the document as a single JSON file.
///
/// Every modification reads the whole document, applies the change and writes it back.
/// Modifications through the same instance are serialized.
pub struct JsonFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    /// Open the document at `path`, creating it with the configured baselines if it does not
    /// exist yet.
    pub fn open(
        path: impl AsRef<Path>,
        config: &domain::ProgramConfig,
    ) -> Result<Self, JsonFileError> {
        let storage = Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        };
        if !storage.path.exists() {
            info!("creating {}", storage.path.display());
            storage.write(&Document::with_baselines(config))?;
        }
        Ok(storage)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Document, JsonFileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(JsonFileError::NotFound);
            }
            Err(err) => {
                return Err(anyhow!(err)
                    .context(format!("failed to read {}", self.path.display()))
                    .into());
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))
            .map_err(JsonFileError::from)
    }

    fn write(&self, document: &Document) -> Result<(), JsonFileError> {
        let content = serde_json::to_string_pretty(document).context("failed to serialize document")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        debug!("wrote {}", self.path.display());
        Ok(())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Document) -> T) -> Result<T, JsonFileError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("lock of {} poisoned", self.path.display()))?;
        let mut document = self.read()?;
        let result = f(&mut document);
        self.write(&document)?;
        Ok(result)
    }
}

impl domain::TrainingRepository for JsonFile {
    fn read_one_rep_max(&self) -> Result<domain::OneRepMaxTable, domain::ReadError> {
        Ok(self.read()?.one_rep_max_table())
    }

    fn replace_one_rep_max(
        &self,
        table: domain::OneRepMaxTable,
    ) -> Result<domain::OneRepMaxTable, domain::UpdateError> {
        self.modify(|document| document.set_one_rep_max_table(&table))?;
        Ok(table)
    }

    fn read_performance_log(&self) -> Result<domain::PerformanceLog, domain::ReadError> {
        Ok(self.read()?.performance_log())
    }

    fn write_performance_entry(
        &self,
        key: domain::LogKey,
        entry: domain::PerformanceEntry,
    ) -> Result<domain::PerformanceEntry, domain::UpdateError> {
        self.modify(|document| document.record(key, entry))?;
        Ok(entry)
    }

    fn read_new_one_rep_max(
        &self,
    ) -> Result<BTreeMap<String, domain::NewOneRepMax>, domain::ReadError> {
        Ok(self.read()?.new_one_rep_max_values())
    }

    fn write_new_one_rep_max(
        &self,
        exercise: &str,
        value: domain::NewOneRepMax,
    ) -> Result<domain::NewOneRepMax, domain::UpdateError> {
        self.modify(|document| document.set_new_one_rep_max(exercise, value))?;
        Ok(value)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum JsonFileError {
    #[error("document not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonFileError> for domain::StorageError {
    fn from(value: JsonFileError) -> Self {
        match value {
            JsonFileError::NotFound => domain::StorageError::NoDocument,
            JsonFileError::Other(err) => domain::StorageError::Other(err.into()),
        }
    }
}

impl From<JsonFileError> for domain::ReadError {
    fn from(value: JsonFileError) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<JsonFileError> for domain::UpdateError {
    fn from(value: JsonFileError) -> Self {
        domain::UpdateError::Storage(value.into())
    }
}

#[cfg(test)]
mod tests {
    use ironweek_domain::TrainingRepository;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn storage() -> (TempDir, JsonFile) {
        let dir = tempfile::tempdir().unwrap();
        let storage =
            JsonFile::open(dir.path().join("workout_data.json"), &domain::ProgramConfig::default())
                .unwrap();
        (dir, storage)
    }

    fn key(week: u8, day: usize, exercise: usize) -> domain::LogKey {
        domain::LogKey::new(domain::Week::new(week).unwrap(), day, exercise)
    }

    #[test]
    fn test_open_creates_document_with_baselines() {
        let (_dir, storage) = storage();
        assert!(storage.path().exists());
        assert_eq!(
            storage.read_one_rep_max().unwrap(),
            domain::OneRepMaxTable::from_baselines(&domain::ProgramConfig::default())
        );
        assert!(storage.read_performance_log().unwrap().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"1RM": {"Deadlift": 150}, "logs": {}, "new_1RM": {}}"#).unwrap();
        let storage = JsonFile::open(&path, &domain::ProgramConfig::default()).unwrap();
        let table = storage.read_one_rep_max().unwrap();
        assert_eq!(table.get("Deadlift"), Some(150.0));
        assert_eq!(table.get("Back Squat"), None);
    }

    #[test]
    fn test_write_performance_entry_last_write_wins() {
        let (_dir, storage) = storage();
        let first = domain::PerformanceEntry {
            actual_weight: 185.0,
            actual_reps: 40,
        };
        let second = domain::PerformanceEntry {
            actual_weight: 190.0,
            actual_reps: 36,
        };
        storage.write_performance_entry(key(2, 1, 0), first).unwrap();
        storage.write_performance_entry(key(2, 3, 0), first).unwrap();
        storage.write_performance_entry(key(2, 1, 0), second).unwrap();
        let log = storage.read_performance_log().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(&key(2, 1, 0)), Some(&second));
        assert_eq!(log.get(&key(2, 3, 0)), Some(&first));
    }

    #[test]
    fn test_replace_one_rep_max_keeps_logs() {
        let (_dir, storage) = storage();
        let entry = domain::PerformanceEntry {
            actual_weight: 10.0,
            actual_reps: 30,
        };
        storage.write_performance_entry(key(1, 0, 2), entry).unwrap();
        let table = domain::OneRepMaxTable::from_iter([("Back Squat".to_string(), 300.0)]);
        storage.replace_one_rep_max(table.clone()).unwrap();
        assert_eq!(storage.read_one_rep_max().unwrap(), table);
        assert_eq!(storage.read_performance_log().unwrap().len(), 1);
    }

    #[test]
    fn test_new_one_rep_max_roundtrip() {
        let (_dir, storage) = storage();
        storage
            .write_new_one_rep_max("Back Squat", domain::NewOneRepMax::Estimated(215.0))
            .unwrap();
        storage
            .write_new_one_rep_max("Pull-Up Variation", domain::NewOneRepMax::Manual)
            .unwrap();
        let values = storage.read_new_one_rep_max().unwrap();
        assert_eq!(
            values.get("Back Squat"),
            Some(&domain::NewOneRepMax::Estimated(215.0))
        );
        assert_eq!(
            values.get("Pull-Up Variation"),
            Some(&domain::NewOneRepMax::Manual)
        );
    }

    #[test]
    fn test_read_missing_document() {
        let (_dir, storage) = storage();
        fs::remove_file(storage.path()).unwrap();
        assert!(matches!(
            storage.read_one_rep_max(),
            Err(domain::ReadError::Storage(domain::StorageError::NoDocument))
        ));
    }

    #[test]
    fn test_read_malformed_document() {
        let (_dir, storage) = storage();
        fs::write(storage.path(), "{").unwrap();
        assert!(matches!(
            storage.read_performance_log(),
            Err(domain::ReadError::Storage(domain::StorageError::Other(_)))
        ));
    }

    #[test]
    fn test_service_with_json_file() {
        let (_dir, storage) = storage();
        let service = domain::Service::new(storage, domain::Engine::default());
        let squat = domain::Position { day: 1, exercise: 0 };
        let week_2 = domain::Week::new(2).unwrap();
        service.set_one_rep_max(&[("Back Squat", "275")]).unwrap();
        service.log_performance(week_2, squat, "185", "40").unwrap();
        let prescriptions = service.get_week(domain::Week::new(3).unwrap()).unwrap();
        assert_eq!(
            prescriptions.days[1].prescriptions[0].target_weight,
            domain::TargetWeight::Load(190.0)
        );
    }
}

use crate::{EstimateError, LogKey};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("no exercise slot at {0}")]
    UnknownSlot(LogKey),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for UpdateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => UpdateError::Storage(storage),
            ReadError::Other(other) => UpdateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no document")]
    NoDocument,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Week;

    #[test]
    fn test_update_error_from_read_error() {
        assert!(matches!(
            UpdateError::from(ReadError::Storage(StorageError::NoDocument)),
            UpdateError::Storage(StorageError::NoDocument)
        ));
        assert!(matches!(
            UpdateError::from(ReadError::Other("foo".into())),
            UpdateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_update_error_display() {
        assert_eq!(
            UpdateError::UnknownSlot(LogKey::new(Week::FIRST, 7, 0)).to_string(),
            "no exercise slot at Week1_Day7_Ex0"
        );
        assert_eq!(
            UpdateError::from(EstimateError::InvalidInput).to_string(),
            "Weight must be a decimal and reps must be an integer"
        );
    }
}

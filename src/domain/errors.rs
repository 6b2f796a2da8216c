use thiserror::Error;

/// Failure talking to the local persistence slot.
///
/// Only infrastructure produces these. The applied-jobs store absorbs every
/// one of them and falls back to what it already holds in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored value is corrupt: {0}")]
    Corrupt(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StorageError::Unavailable("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: quota exceeded");

        let err = StorageError::Corrupt("expected a sequence".to_string());
        assert_eq!(err.to_string(), "Stored value is corrupt: expected a sequence");
    }
}

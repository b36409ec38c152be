use thiserror::Error;

/// Errors that can occur while assembling a wallet-pass archive.
///
/// All of them are unexpected: the only failure class in the system is an
/// internal serialization or compression error, surfaced to the caller as a
/// generic server error.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("Failed to serialize pass document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to assemble archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PassError::Io(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "Failed to write archive entry: disk full");
    }
}

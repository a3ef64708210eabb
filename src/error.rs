//! Error types for the session creator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Session storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Telegram API error: {0}")]
    TelegramError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<grammers_client::InvocationError> for Error {
    fn from(err: grammers_client::InvocationError) -> Self {
        Error::TelegramError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_storage_unavailable() {
        let err = Error::StorageUnavailable("disk full".to_string());
        assert!(err.to_string().contains("Session storage unavailable"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_display_telegram_error() {
        let err = Error::TelegramError("flood wait".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Telegram API error"));
        assert!(msg.contains("flood wait"));
    }

    #[test]
    fn test_error_display_interrupted() {
        let err = Error::Interrupted;
        assert!(err.to_string().contains("Interrupted"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_io_various_kinds() {
        let kinds = [
            std::io::ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::UnexpectedEof,
            std::io::ErrorKind::TimedOut,
        ];

        for kind in kinds {
            let io_err = std::io::Error::new(kind, "test");
            let err: Error = io_err.into();
            assert!(matches!(err, Error::IoError(_)));
        }
    }

    #[test]
    fn test_error_all_variants_debug() {
        let variants: Vec<Error> = vec![
            Error::StorageUnavailable("storage".to_string()),
            Error::TelegramError("telegram".to_string()),
            Error::Interrupted,
            Error::Unknown("unknown".to_string()),
        ];

        for err in variants {
            let debug_str = format!("{:?}", err);
            assert!(!debug_str.is_empty());
        }
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(Error::Unknown("test".to_string()));
        assert!(result.is_err());
    }
}

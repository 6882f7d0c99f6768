use thiserror::Error;

/// Failure of a single celebration lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CelebrationError {
    /// The caller asked for a year outside the supported range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal invariant broke; this is a defect, not a runtime condition.
    #[error("logic error: {0}")]
    Logic(String),
}

impl CelebrationError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CelebrationError::InvalidInput(_))
    }

    pub fn is_logic(&self) -> bool {
        matches!(self, CelebrationError::Logic(_))
    }
}

pub type CelebrationResult<T> = Result<T, CelebrationError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CelebrationError::InvalidInput("year 2019 precedes base year 2020".into());
        assert_eq!("invalid input: year 2019 precedes base year 2020", err.to_string());
        assert!(err.is_invalid_input());
        assert!(!err.is_logic());

        let err = CelebrationError::Logic("no celebrating zone".into());
        assert_eq!("logic error: no celebrating zone", err.to_string());
        assert!(err.is_logic());
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CelebrationError>();
        assert_impl::<ConfigError>();
    }
}

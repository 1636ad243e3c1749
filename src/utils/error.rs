use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Cannot parse commit date '{value}': {reason}")]
    DateParse { value: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn date_parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DateParse {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let git_err = SweepError::git_operation("failed to fetch");
        assert!(matches!(git_err, SweepError::GitOperation { .. }));
        assert_eq!(git_err.to_string(), "Git operation failed: failed to fetch");

        let args_err = SweepError::invalid_args("age cannot be negative");
        assert!(matches!(args_err, SweepError::InvalidArgs { .. }));
        assert_eq!(
            args_err.to_string(),
            "Invalid arguments: age cannot be negative"
        );

        let date_err = SweepError::date_parse("not-a-date", "input is out of range");
        assert!(matches!(date_err, SweepError::DateParse { .. }));
        assert_eq!(
            date_err.to_string(),
            "Cannot parse commit date 'not-a-date': input is out of range"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sweep_err: SweepError = io_err.into();
        assert!(matches!(sweep_err, SweepError::Io(_)));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let sweep_err: SweepError = regex_err.into();
        assert!(matches!(sweep_err, SweepError::Regex(_)));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate project id: {id}")]
    DuplicateProjectId { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Content,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::DuplicateProjectId { .. } => ErrorCategory::Content,
            SiteError::SerializationError(_) => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SiteError::SerializationError(_) => {
                "Retry without --emit-json or check the content for invalid values".to_string()
            }
            SiteError::ConfigError { .. } | SiteError::ConfigValidationError { .. } => {
                "Check the site file for TOML syntax errors and unknown keys".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the site file or on the command line", field)
            }
            SiteError::DuplicateProjectId { id } => {
                format!("Give every [[projects]] entry a unique id ({} is used twice)", id)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not write the site: {}", self),
            ErrorCategory::Configuration => format!("The site configuration is invalid: {}", self),
            ErrorCategory::Content => format!("The portfolio content is invalid: {}", self),
            ErrorCategory::Rendering => format!("The page could not be rendered: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_is_content_error() {
        let err = SiteError::DuplicateProjectId { id: 2 };
        assert_eq!(err.category(), ErrorCategory::Content);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("2"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SiteError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().starts_with("Could not write the site"));
    }

    #[test]
    fn test_every_variant_maps_to_a_failing_severity() {
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let errors = vec![
            SiteError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
            SiteError::from(json_err),
            SiteError::ConfigError { message: "bad".to_string() },
            SiteError::ConfigValidationError {
                field: "site".to_string(),
                message: "bad".to_string(),
            },
            SiteError::InvalidConfigValueError {
                field: "site.nav_offset".to_string(),
                value: "NaN".to_string(),
                reason: "out of range".to_string(),
            },
            SiteError::DuplicateProjectId { id: 1 },
        ];
        for err in errors {
            assert!(err.severity() >= ErrorSeverity::Medium, "{:?}", err);
            assert!(!err.recovery_suggestion().is_empty());
        }
    }
}

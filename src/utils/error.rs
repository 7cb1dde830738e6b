use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown section: {id}")]
    UnknownSectionError { id: String },

    #[error("Duplicate section: {id}")]
    DuplicateSectionError { id: String },

    #[error("Invalid replay step '{step}': {reason}")]
    InvalidStepError { step: String, reason: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
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
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::InvalidStepError { .. } => ErrorCategory::Configuration,
            SiteError::UnknownSectionError { .. } | SiteError::DuplicateSectionError { .. } => {
                ErrorCategory::Content
            }
            SiteError::SerializationError(_) | SiteError::RenderError { .. } => {
                ErrorCategory::Rendering
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::ConfigValidationError { field, .. } => {
                format!("The configuration file could not be parsed ({})", field)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            SiteError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            SiteError::UnknownSectionError { id } => {
                format!("'{}' is not a section this site knows how to render", id)
            }
            SiteError::DuplicateSectionError { id } => {
                format!("Section '{}' is listed more than once", id)
            }
            SiteError::InvalidStepError { step, reason } => {
                format!("Replay step '{}' is invalid: {}", step, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::IoError(_) => "Check that the paths exist and are writable",
            SiteError::ConfigValidationError { .. } => {
                "Check the TOML syntax and that every ${VAR} is exported"
            }
            SiteError::InvalidConfigValueError { .. } | SiteError::MissingConfigError { .. } => {
                "Fix the named configuration value and run again"
            }
            SiteError::UnknownSectionError { .. } => {
                "Use only: home, about, skills, projects, experience, contact"
            }
            SiteError::DuplicateSectionError { .. } => "Remove the repeated section id",
            SiteError::InvalidStepError { .. } => {
                "Steps look like scroll:900, toggle, click:about, hover:0, leave:0, pointer:10,20"
            }
            SiteError::SerializationError(_) | SiteError::RenderError { .. } => {
                "Run again with --verbose and report the log"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let io = SiteError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let dup = SiteError::DuplicateSectionError {
            id: "about".to_string(),
        };
        assert_eq!(dup.category(), ErrorCategory::Content);
        assert_eq!(dup.severity(), ErrorSeverity::High);
        assert!(dup.user_friendly_message().contains("about"));
    }
}

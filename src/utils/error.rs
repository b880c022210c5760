use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodemodError {
    #[error("IO error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory traversal failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Invalid rewrite pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Internal,
}

impl CodemodError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } | Self::WalkError(_) => ErrorCategory::FileSystem,
            Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                ErrorCategory::Configuration
            }
            Self::PatternError(_) | Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::FileSystem => 2,
            ErrorCategory::Internal => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Run the tool from the backend root so relative paths resolve"
                }
                std::io::ErrorKind::PermissionDenied => "Check file permissions on the target",
                std::io::ErrorKind::InvalidData => "The file is not valid UTF-8 text",
                _ => "Check that the target files are readable and writable",
            },
            Self::WalkError(_) => "Check that the root directory exists and is readable",
            Self::TomlError(_) => "Fix the syntax of the configuration file",
            Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and configuration file values"
            }
            Self::PatternError(_) | Self::SerializationError(_) => {
                "This is a bug in the rewrite rules; please report it"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => {
                format!("Could not access {}: {}", path.display(), source)
            }
            Self::WalkError(e) => format!("Could not walk the source tree: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodemodError>;

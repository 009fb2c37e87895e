use thiserror::Error;

#[derive(Error, Debug)]
pub enum FractalError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Malformed input: no module termination found! Module started at {position}\n\tInput string: {input}")]
    MalformedModuleError { position: usize, input: String },

    #[error("L-system string of '{rule}' grew past {limit} bytes")]
    LStringTooLongError { rule: String, limit: usize },

    #[error("Unknown rule: {name}")]
    UnknownRuleError { name: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Input,
    Render,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FractalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FractalError::IoError(_) => ErrorCategory::Io,
            FractalError::ZipError(_)
            | FractalError::CsvError(_)
            | FractalError::SerializationError(_) => ErrorCategory::Output,
            FractalError::ConfigError { .. }
            | FractalError::ConfigValidationError { .. }
            | FractalError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            FractalError::MalformedModuleError { .. }
            | FractalError::LStringTooLongError { .. }
            | FractalError::UnknownRuleError { .. } => ErrorCategory::Input,
            FractalError::RenderError { .. } => ErrorCategory::Render,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Render => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FractalError::IoError(e) => format!("File system operation failed: {}", e),
            FractalError::ZipError(_) => "Could not write the frame archive".to_string(),
            FractalError::CsvError(_) => "Could not write the segment table".to_string(),
            FractalError::SerializationError(_) => "Could not write the frame manifest".to_string(),
            FractalError::UnknownRuleError { name } => format!("There is no rule named '{}'", name),
            FractalError::LStringTooLongError { rule, limit } => {
                format!(
                    "'{}' grows past {} bytes at this iteration count",
                    rule, limit
                )
            }
            FractalError::MalformedModuleError { position, .. } => {
                format!("The L-system string has an unterminated module at {}", position)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FractalError::IoError(_) => "Check that the output directory exists and is writable",
            FractalError::ZipError(_) => "Retry without --zip to write loose frame files",
            FractalError::CsvError(_) | FractalError::SerializationError(_) => {
                "Check free disk space and retry"
            }
            FractalError::ConfigError { .. }
            | FractalError::ConfigValidationError { .. }
            | FractalError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags and try again"
            }
            FractalError::MalformedModuleError { .. } => {
                "Close every module with ')' e.g. F(10) instead of F(10"
            }
            FractalError::LStringTooLongError { .. } => "Lower the iteration count for this rule",
            FractalError::UnknownRuleError { .. } => {
                "Run `fractal list` to see the available rules"
            }
            FractalError::RenderError { .. } => "Try a smaller iteration count or canvas size",
        }
    }
}

pub type Result<T> = std::result::Result<T, FractalError>;

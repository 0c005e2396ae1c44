use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("file must be in CSV format")]
    FormatError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("parse error on line {line}, column {column}: {message}")]
    DecodeError {
        line: u64,
        column: u64,
        message: String,
    },

    #[error("each record must have 3 fields: organization, user, and role")]
    FieldCountError { line: Option<u64>, found: usize },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad invocation: wrong extension, empty path.
    Input,
    /// The file could not be opened or read.
    Io,
    /// The file was read but its content is not a valid roles table.
    Data,
    Internal,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FormatError { .. } | EtlError::ConfigError { .. } => ErrorCategory::Input,
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => ErrorCategory::Io,
            EtlError::CsvError(_)
            | EtlError::DecodeError { .. }
            | EtlError::FieldCountError { .. } => ErrorCategory::Data,
            EtlError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::Io => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::FormatError { path } => {
                format!("rename or convert '{}' to a file ending in .csv", path)
            }
            EtlError::ConfigError { .. } => "pass the path of a .csv file as the only argument".to_string(),
            EtlError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "check that the path is relative to the current directory".to_string()
                }
                std::io::ErrorKind::PermissionDenied => "check the file permissions".to_string(),
                _ => "check that the file is readable".to_string(),
            },
            EtlError::CsvError(_) => "check the quoting of the CSV rows".to_string(),
            EtlError::DecodeError { line, .. } => format!(
                "line {} has a stray or unbalanced quote; double quotes inside a quoted field (\"\")",
                line
            ),
            EtlError::FieldCountError { line: Some(line), found } => format!(
                "line {} has {} field(s); expected organization,user,role",
                line, found
            ),
            EtlError::FieldCountError { line: None, found } => {
                format!("a record has {} field(s); expected organization,user,role", found)
            }
            EtlError::SerializationError(_) => "this is a bug, please report it".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

use crate::utils::error::{EtlError, Result};

pub const CSV_EXTENSION: &str = ".csv";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

/// Case-sensitive suffix check on the name only; the file itself is not touched.
pub fn validate_file_extension(file: &str, allowed_extension: &str) -> Result<()> {
    if file.ends_with(allowed_extension) {
        return Ok(());
    }

    Err(EtlError::FormatError {
        path: file.to_string(),
    })
}

use crate::utils::error::{CodemodError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CodemodError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CodemodError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    if !extension.starts_with('.') || extension.len() < 2 {
        return Err(CodemodError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must start with '.' followed by at least one character"
                .to_string(),
        });
    }

    if extension.contains(['/', '\\', '\0']) {
        return Err(CodemodError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension cannot contain path separators".to_string(),
        });
    }

    Ok(())
}

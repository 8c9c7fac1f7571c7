use crate::utils::error::{OrderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty(field_name, path)?;

    if path.contains('\0') {
        return Err(OrderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_accepts_value() {
        assert!(validate_non_empty("customer", "C1").is_ok());
    }

    #[test]
    fn test_validate_non_empty_rejects_blank() {
        let err = validate_non_empty("customer", "   ").unwrap_err();
        assert!(matches!(err, OrderError::InvalidConfigValue { field, .. } if field == "customer"));
    }

    #[test]
    fn test_validate_path_rejects_null_bytes() {
        assert!(validate_path("catalog", "bad\0path.json").is_err());
        assert!(validate_path("catalog", "catalog.json").is_ok());
    }
}

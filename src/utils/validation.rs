use crate::utils::error::{PlotError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PlotError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Python dotted module path, e.g. `ngi_visualizations.plot_complexity_curves`.
pub fn validate_python_module(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let valid = value.split('.').all(|part| {
        let mut chars = part.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    });

    if !valid {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid Python module path".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("runfn", "sample.run").is_ok());
        assert!(validate_path("runfn", "").is_err());
        assert!(validate_path("runfn", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        assert_eq!(validate_required_field("runfn", &present).unwrap(), "x");

        let missing: Option<String> = None;
        let err = validate_required_field("runfn", &missing).unwrap_err();
        assert!(matches!(err, PlotError::MissingConfigError { field } if field == "runfn"));
    }

    #[test]
    fn test_validate_python_module() {
        assert!(
            validate_python_module("plot_module", "ngi_visualizations.plot_complexity_curves")
                .is_ok()
        );
        assert!(validate_python_module("plot_module", "   ").is_err());
        assert!(validate_python_module("plot_module", "ngi..plot").is_err());
        assert!(validate_python_module("plot_module", "1ngi.plot").is_err());
        assert!(validate_python_module("plot_module", "ngi;import os").is_err());
    }
}

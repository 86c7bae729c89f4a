//! Shared validation helpers and messages.

use validator::{ValidationError, ValidationErrors};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_STATUS: &str = "Status must be \"watched\" or \"unwatched\"";

/// Custom `validator` rule: the value must contain a non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Human-readable message of the first error recorded against `field`.
///
/// Falls back to the rule code when the rule carries no message.
pub fn field_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    let field_errors = errors.field_errors();
    let first = field_errors.get(field)?.first()?;
    Some(
        first
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| first.code.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fail() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn non_blank_values_pass() {
        assert!(validate_not_blank("Dune").is_ok());
        assert!(validate_not_blank("  Alien ").is_ok());
    }
}

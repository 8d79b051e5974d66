//! Client-side validation of create/update payloads.
//!
//! Payloads are checked with their `validator` rules before any request is
//! sent, and all failures are reported on one line.

use anyhow::anyhow;
use validator::{Validate, ValidationErrors};

pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join(", ")
}

/// Validates `value`, turning failures into a single error message.
pub fn validated<T: Validate>(value: T) -> anyhow::Result<T> {
    value
        .validate()
        .map_err(|errors| anyhow!("Validation failed: {}", format_errors(&errors)))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguaboard_models::languages::CreateLanguageDto;
    use linguaboard_models::users::CreateParentDto;

    #[test]
    fn test_valid_payload_passes_through() {
        let dto = validated(CreateLanguageDto {
            code: "EN".into(),
            name: "English".into(),
        })
        .unwrap();
        assert_eq!(dto.code, "EN");
    }

    #[test]
    fn test_messages_are_joined() {
        let err = validated(CreateLanguageDto {
            code: String::new(),
            name: String::new(),
        })
        .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains(", "));
    }

    #[test]
    fn test_field_without_message_is_named() {
        let dto = CreateParentDto {
            name: "Awa".into(),
            email: "not-an-email".into(),
            password: "secret".into(),
            phone: Some("+221700000000".into()),
            parent_pin: "1234".into(),
            preferred_language: None,
            country: None,
            timezone: None,
            subscription_status: None,
        };
        let err = validated(dto).unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}

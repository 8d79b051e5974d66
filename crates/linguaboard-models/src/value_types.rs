//! Strongly-typed value types with validation for domain primitives.
//!
//! This module provides validated wrappers for the values the dashboard
//! collects from an operator (email addresses, parent PINs) and the closed
//! string enums the backend uses on the wire.
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_models::value_types::{Difficulty, Email, ParentPin};
//!
//! let email: Email = "admin@example.com".parse()?;
//! let pin: ParentPin = "1234".parse()?;
//! let level: Difficulty = "Medium".parse()?;
//! assert_eq!(level.as_str(), "medium");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The email address is invalid.
    InvalidEmail(String),
    /// The parent PIN is invalid.
    InvalidPin(String),
    /// The value is not one of the enum's wire names.
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            Self::InvalidPin(msg) => write!(f, "Invalid PIN: {}", msg),
            Self::UnknownVariant {
                kind,
                value,
                expected,
            } => write!(f, "Unknown {} '{}' (expected one of: {})", kind, value, expected),
        }
    }
}

// ============================================================================
// Email
// ============================================================================

/// A validated email address.
///
/// # Example
///
/// ```ignore
/// use linguaboard_models::value_types::Email;
///
/// let email: Email = "parent@example.com".parse().unwrap();
/// assert_eq!(email.domain(), "example.com");
///
/// assert!("not-an-email".parse::<Email>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into().trim().to_string();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the domain part (after @) of the email.
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    fn validate(email: &str) -> Result<(), ValueTypeError> {
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }

        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// ParentPin
// ============================================================================

/// The numeric PIN a parent uses to unlock parental settings in the app.
///
/// Between 4 and 6 ASCII digits.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ParentPin(String);

impl ParentPin {
    const MIN_DIGITS: usize = 4;
    const MAX_DIGITS: usize = 6;

    pub fn new(pin: impl Into<String>) -> Result<Self, ValueTypeError> {
        let pin = pin.into();
        Self::validate(&pin)?;
        Ok(Self(pin))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    pub(crate) fn validate(pin: &str) -> Result<(), ValueTypeError> {
        if !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValueTypeError::InvalidPin("PIN must contain digits only".into()));
        }

        let len = pin.len();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&len) {
            return Err(ValueTypeError::InvalidPin(format!(
                "PIN must have {} to {} digits, got {}",
                Self::MIN_DIGITS,
                Self::MAX_DIGITS,
                len
            )));
        }

        Ok(())
    }
}

// Never print the PIN itself.
impl fmt::Debug for ParentPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParentPin(****)")
    }
}

impl FromStr for ParentPin {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<ParentPin> for String {
    fn from(pin: ParentPin) -> String {
        pin.0
    }
}

// ============================================================================
// Wire enums
// ============================================================================

/// Macro to define a closed string enum as the backend spells it.
///
/// Parsing is case-insensitive so operators can type `easy` for `Easy`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValueTypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ValueTypeError::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

wire_enum!(
    /// Difficulty of a lesson or word.
    Difficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
);

wire_enum!(
    /// Difficulty of a word's example sentence. Capitalized on the wire.
    SentenceDifficulty {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
    }
);

wire_enum!(
    /// Kind of content a lesson holds.
    LessonType {
        Word => "word",
        Sentence => "sentence",
        Paragraph => "paragraph",
    }
);

wire_enum!(
    /// Lesson type filter for the admin lesson list.
    LessonTypeFilter {
        Word => "word",
        Sentence => "sentence",
        Paragraph => "paragraph",
        All => "all",
    }
);

wire_enum!(
    /// Parent activation filter.
    ParentStatus {
        Active => "active",
        Inactive => "inactive",
        All => "all",
    }
);

wire_enum!(
    /// Time window of the children leaderboard.
    LeaderboardPeriod {
        Today => "today",
        Month => "month",
        All => "all",
    }
);

wire_enum!(
    SubscriptionStatus {
        Free => "free",
        Premium => "premium",
        Trial => "trial",
    }
);

wire_enum!(
    /// Interface language of a parent account.
    PreferredLanguage {
        En => "en",
        Fr => "fr",
    }
);

impl Default for LessonTypeFilter {
    fn default() -> Self {
        Self::All
    }
}

impl Default for ParentStatus {
    fn default() -> Self {
        Self::All
    }
}

impl Default for LeaderboardPeriod {
    fn default() -> Self {
        Self::All
    }
}

impl From<LessonType> for LessonTypeFilter {
    fn from(value: LessonType) -> Self {
        match value {
            LessonType::Word => Self::Word,
            LessonType::Sentence => Self::Sentence,
            LessonType::Paragraph => Self::Paragraph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = Email::new(" admin@example.com ").unwrap();
        assert_eq!(email.as_str(), "admin@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_email_invalid() {
        assert!(matches!(
            Email::new(""),
            Err(ValueTypeError::InvalidEmail(_))
        ));
        assert!("no-at-sign".parse::<Email>().is_err());
    }

    #[test]
    fn test_email_deserialize_validates() {
        let ok: Result<Email, _> = serde_json::from_str(r#""a@b.io""#);
        assert!(ok.is_ok());
        let bad: Result<Email, _> = serde_json::from_str(r#""nope""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_pin_length() {
        assert!(ParentPin::new("1234").is_ok());
        assert!(ParentPin::new("123456").is_ok());
        assert!(ParentPin::new("123").is_err());
        assert!(ParentPin::new("1234567").is_err());
    }

    #[test]
    fn test_pin_digits_only() {
        let err = ParentPin::new("12a4").unwrap_err();
        assert_eq!(err.to_string(), "Invalid PIN: PIN must contain digits only");
    }

    #[test]
    fn test_pin_debug_is_masked() {
        let pin = ParentPin::new("9876").unwrap();
        assert_eq!(format!("{:?}", pin), "ParentPin(****)");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            r#""medium""#
        );
        assert_eq!(
            serde_json::to_string(&SentenceDifficulty::Medium).unwrap(),
            r#""Medium""#
        );
        let status: SubscriptionStatus = serde_json::from_str(r#""trial""#).unwrap();
        assert_eq!(status, SubscriptionStatus::Trial);
    }

    #[test]
    fn test_enum_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            "easy".parse::<SentenceDifficulty>().unwrap(),
            SentenceDifficulty::Easy
        );
        assert_eq!("Fr".parse::<PreferredLanguage>().unwrap(), PreferredLanguage::Fr);
    }

    #[test]
    fn test_enum_parse_unknown() {
        let err = "weekly".parse::<LeaderboardPeriod>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown LeaderboardPeriod 'weekly' (expected one of: today, month, all)"
        );
    }

    #[test]
    fn test_filter_defaults() {
        assert_eq!(LessonTypeFilter::default(), LessonTypeFilter::All);
        assert_eq!(ParentStatus::default().as_str(), "all");
        assert_eq!(LeaderboardPeriod::default().as_str(), "all");
        assert_eq!(
            LessonTypeFilter::from(LessonType::Paragraph),
            LessonTypeFilter::Paragraph
        );
    }
}

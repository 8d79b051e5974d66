//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend identifies every document by an opaque `_id` string. Each
//! entity gets its own wrapper so a `DomainId` can never be passed where a
//! `LessonId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_models::ids::{DomainId, LessonId};
//!
//! fn lessons_of(domain: &DomainId) { /* ... */ }
//!
//! let domain_id: DomainId = "665f1c2ab1e4d2a9c0f3a111".parse()?;
//! lessons_of(&domain_id);       // OK
//! // lessons_of(&LessonId::new("x")); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyIdError(&'static str);

impl std::error::Error for EmptyIdError {}

impl fmt::Display for EmptyIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cannot be empty", self.0)
    }
}

/// Macro to define a strongly-typed ID newtype.
///
/// The generated type serializes as the bare string and compares by value.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an identifier returned by the backend.
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner String.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::str::FromStr for $name {
            type Err = EmptyIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(EmptyIdError(stringify!($name)));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for parent and admin users.
    UserId
);

define_id!(
    /// Strongly-typed ID for Child entities.
    ChildId
);

define_id!(
    /// Strongly-typed ID for Language entities.
    LanguageId
);

define_id!(
    /// Strongly-typed ID for Domain entities.
    DomainId
);

define_id!(
    /// Strongly-typed ID for Lesson entities.
    LessonId
);

define_id!(
    /// Strongly-typed ID for Word entities.
    WordId
);

define_id!(
    /// Strongly-typed ID for Sentence entities.
    SentenceId
);

define_id!(
    /// Strongly-typed ID for Paragraph entities.
    ParagraphId
);

define_id!(
    /// Strongly-typed ID for completed tests.
    TestId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: DomainId = " 665f1c2ab1e4d2a9c0f3a111 ".parse().unwrap();
        assert_eq!(id.as_str(), "665f1c2ab1e4d2a9c0f3a111");
    }

    #[test]
    fn test_id_from_str_empty() {
        let result: Result<LessonId, _> = "   ".parse();
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "LessonId cannot be empty");
    }

    #[test]
    fn test_id_debug() {
        let id = WordId::new("abc123");
        assert_eq!(format!("{:?}", id), "WordId(abc123)");
    }

    #[test]
    fn test_id_display() {
        let id = LanguageId::from("1");
        assert_eq!(format!("{}", id), "1");
    }

    #[test]
    fn test_id_serialize_transparent() {
        let id = UserId::new("u-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""u-1""#);

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_compares_with_str() {
        let id = ChildId::new("c-9");
        assert_eq!(id, "c-9");
        assert!(id == *"c-9");
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ParagraphId::new("a"));
        set.insert(ParagraphId::new("b"));
        set.insert(ParagraphId::new("a"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_id_conversion_roundtrip() {
        let id: SentenceId = String::from("s-1").into();
        let raw: String = id.into();
        assert_eq!(raw, "s-1");
    }
}

//! Strongly-typed value objects used by the lead submission.
//!
//! Lead fields are accepted leniently: the only invariant is that a value is
//! present and non-empty. Email and phone formats are left for the upstream
//! CRM to judge, and values are forwarded exactly as the caller typed them.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string was empty.
    #[error("value cannot be empty")]
    EmptyString,
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a non-empty value, keeping it verbatim.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(LeadName, "Full name of the lead, non-empty.");

non_empty_string_newtype!(
    LeadEmail,
    "Email address of the lead. Only presence is enforced."
);

non_empty_string_newtype!(
    LeadPhone,
    "Phone number of the lead. Only presence is enforced."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_values() {
        assert_eq!(LeadName::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(LeadEmail::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(LeadPhone::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn keeps_values_verbatim() {
        let name = LeadName::new("  Ana Silva ").unwrap();
        assert_eq!(name.as_str(), "  Ana Silva ");

        // No format checks beyond presence.
        let email = LeadEmail::new("not-an-email").unwrap();
        assert_eq!(email.into_inner(), "not-an-email");

        let phone = LeadPhone::try_from("+55 (11) 99999-9999").unwrap();
        assert_eq!(&*phone, "+55 (11) 99999-9999");
    }

    #[test]
    fn deserialization_enforces_non_empty() {
        let parsed: Result<LeadName, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());

        let parsed: LeadName = serde_json::from_str("\"Ana\"").unwrap();
        assert_eq!(parsed.as_str(), "Ana");
    }
}

//! User records and the payload used to create them

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A registered user
///
/// Both fields are non-empty when the record is created. Nothing else is
/// checked: no trimming, no email format, no uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

/// Body of a `POST /users` request
///
/// Fields the service does not know about are ignored by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl NewUser {
    /// Convenience constructor with both fields set
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Turn the payload into a [`User`]
    ///
    /// A field is missing when it is absent, `null` or the empty string.
    /// Whitespace-only values are kept as they are.
    pub fn validate(self) -> Result<User, ValidationError> {
        match (present(self.name), present(self.email)) {
            (Some(name), Some(email)) => Ok(User { name, email }),
            _ => Err(ValidationError::missing_name_or_email()),
        }
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

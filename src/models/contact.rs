//! Contact model: one entry in the contact book.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record.
///
/// Immutable value object holding a display name plus validated phone and
/// email fields. Because `PhoneNumber` and `EmailAddress` validate on both
/// construction and deserialization, every `Contact` in existence satisfies
/// the format invariants; nothing ever needs to re-check them.
///
/// The name is free-form text. Rejecting an empty name is a front-end
/// decision, not enforced here.
///
/// Contacts carry no identifier; a contact's position in the
/// [`ContactStore`](crate::store::ContactStore) is its only identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Display name, accepted as-is
    pub name: String,

    /// Phone number in `DDD-DDDD-DDDD` format
    pub phone: PhoneNumber,

    /// Email address in `local@domain.tld` shape
    pub email: EmailAddress,
}

impl Contact {
    /// Create a new contact from raw strings, validating phone then email.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` or `ValidationError::InvalidEmail`
    /// for the first field that fails its format check.
    pub fn new(
        name: impl Into<String>,
        phone: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        let email = EmailAddress::new(email)?;

        Ok(Self {
            name: name.into(),
            phone,
            email,
        })
    }

    /// Create a contact from already-validated parts.
    pub fn from_parts(name: impl Into<String>, phone: PhoneNumber, email: EmailAddress) -> Self {
        Self {
            name: name.into(),
            phone,
            email,
        }
    }
}

// Detail view of a contact, one labeled field per line
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nPhone: {}\nEmail: {}",
            self.name, self.phone, self.email
        )
    }
}

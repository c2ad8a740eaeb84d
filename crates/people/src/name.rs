use serde::{Deserialize, Serialize};

use contrast_core::ValueObject;

/// A person's name, modeled as a value object.
///
/// Both fields are private and there are no mutators: once constructed, an
/// instance never changes. Equality and hashing are derived structurally, so
/// two instances built from the same strings are equal and hash alike no
/// matter where they are allocated. "Modification" happens through the
/// with-update methods, which allocate a new instance and leave the source
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    given_name: String,
    family_name: String,
}

impl PersonName {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// With-update: a new instance with the given name replaced.
    ///
    /// The source instance is unaffected; `self` is only read.
    pub fn with_given_name(&self, given_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: self.family_name.clone(),
        }
    }

    /// With-update: a new instance with the family name replaced.
    pub fn with_family_name(&self, family_name: impl Into<String>) -> Self {
        Self {
            given_name: self.given_name.clone(),
            family_name: family_name.into(),
        }
    }

    /// Destructure into the constituent fields, in declaration order.
    pub fn into_parts(self) -> (String, String) {
        (self.given_name, self.family_name)
    }
}

impl ValueObject for PersonName {}

impl core::fmt::Display for PersonName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PersonName {{ given_name = {}, family_name = {} }}",
            self.given_name, self.family_name
        )
    }
}

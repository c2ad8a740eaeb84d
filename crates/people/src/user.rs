use serde::{Deserialize, Serialize};

use contrast_core::{UserId, ValueObject};

use crate::name::PersonName;

/// A user: a [`PersonName`] extended with a numeric identifier.
///
/// This is the "subtype" of the value object, modeled by composition rather
/// than inheritance: the base fields live in the inner [`PersonName`] and the
/// accessors delegate to it. Equality and hashing cover all fields, the
/// identifier included, so two users with the same name but different ids are
/// not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: PersonName,
}

impl User {
    pub fn new(id: UserId, name: PersonName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn given_name(&self) -> &str {
        self.name.given_name()
    }

    pub fn family_name(&self) -> &str {
        self.name.family_name()
    }

    /// Greeting embedding the given name.
    pub fn greeting(&self) -> String {
        format!("Hello {}", self.given_name())
    }

    /// With-update: a new user with the given name replaced.
    pub fn with_given_name(&self, given_name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: self.name.with_given_name(given_name),
        }
    }

    /// Destructure into the constituent fields, identifier first.
    pub fn into_parts(self) -> (UserId, String, String) {
        let (given, family) = self.name.into_parts();
        (self.id, given, family)
    }
}

impl ValueObject for User {}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "User {{ id = {}, given_name = {}, family_name = {} }}",
            self.id,
            self.given_name(),
            self.family_name()
        )
    }
}

use contrast_core::{identity_hash, same_instance};

/// A person's name, modeled as a conventional mutable object.
///
/// Same two fields as [`crate::PersonName`], but this type implements neither
/// `PartialEq` nor `Hash`: the only equality it offers is identity (same
/// allocation), via [`PersonCard::is`], and the only hash is identity-derived.
/// Two cards built from identical field values therefore compare as NOT
/// equal. That divergence from the value object is the point of the
/// demonstration and must not be "fixed" by deriving structural equality.
///
/// Fields are settable only at construction; there are no mutators.
#[derive(Debug, Clone)]
pub struct PersonCard {
    given_name: String,
    family_name: String,
}

impl PersonCard {
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

    /// Identity equality: whether `self` and `other` are the same allocation.
    pub fn is(&self, other: &Self) -> bool {
        same_instance(self, other)
    }

    /// Identity-derived hash code (the allocation's address).
    pub fn identity_code(&self) -> u64 {
        identity_hash(self)
    }

    /// Manual decomposition into the two fields, in declaration order.
    ///
    /// Unlike the value object's consuming destructure, this has to be an
    /// explicitly provided operation; nothing about the type grants it.
    pub fn deconstruct(&self) -> (&str, &str) {
        (&self.given_name, &self.family_name)
    }
}

impl core::fmt::Display for PersonCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // No structural rendering; just the type name, the way a type with
        // no display contract of its own would print.
        f.write_str("PersonCard")
    }
}

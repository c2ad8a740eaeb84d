use serde::{Deserialize, Serialize};

use contrast_core::ValueObject;

/// A name whose given-name accessor is shadowed by a transformation.
///
/// The full given name is stored, but [`InitialedName::given_name`] only ever
/// exposes its first character. There is deliberately no way to write the
/// field after construction, so the transformation cannot be bypassed.
///
/// This is a cautionary example, not a recommended pattern: an accessor that
/// silently returns something other than what was stored makes the type lie
/// about its own data. It is kept here because the divergence between the
/// stored and exposed representation is what the demonstration shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InitialedName {
    given_name: String,
    family_name: String,
}

impl InitialedName {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    /// The transformed given name: only the first character of what was
    /// stored. Empty input stays empty.
    pub fn given_name(&self) -> &str {
        let end = self.given_name.chars().next().map_or(0, char::len_utf8);
        &self.given_name[..end]
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Transformed given name followed by the family name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name(), self.family_name)
    }

    /// Greeting embedding the (transformed) given name.
    pub fn greeting(&self) -> String {
        format!("Hello {}", self.given_name())
    }
}

impl ValueObject for InitialedName {}

impl core::fmt::Display for InitialedName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Renders the accessor's view, not the stored field.
        write!(
            f,
            "InitialedName {{ given_name = {}, family_name = {} }}",
            self.given_name(),
            self.family_name
        )
    }
}

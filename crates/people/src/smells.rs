//! Negative examples: value objects declared wrong.

use serde::{Deserialize, Serialize};

/// A value object gone wrong: every field is freely reassignable.
///
/// Structural equality and hashing are still derived, but nothing stops a
/// holder from overwriting a field after construction, so the "equal now,
/// equal forever" guarantee the value-object pattern promises does not hold.
/// An instance used as a `HashMap` key and then reassigned is simply lost.
///
/// Do not model data this way; this type exists only so the demonstration
/// can show what is defeated. Compare [`crate::PersonName`], which keeps its
/// fields private and offers with-updates instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LooseName {
    pub given_name: String,
    pub family_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use contrast_core::structural_hash;

    #[test]
    fn fields_are_reassignable_after_creation() {
        let mut name = LooseName {
            given_name: "Ana".to_string(),
            family_name: "Helena".to_string(),
        };
        name.given_name = "Maria".to_string();
        assert_eq!(name.given_name, "Maria");
    }

    #[test]
    fn reassignment_silently_changes_equality_and_hash() {
        let a = LooseName {
            given_name: "Ana".to_string(),
            family_name: "Helena".to_string(),
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        let hash_before = structural_hash(&b);

        b.given_name = "Maria".to_string();
        assert_ne!(a, b);
        assert_ne!(hash_before, structural_hash(&b));
    }
}

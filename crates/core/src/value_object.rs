//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects with the same values are equal, hash alike, and are
//! interchangeable - which allocation holds them never matters.

use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Identity Object
///
/// - **Value object**: no identity; two instances with the same field values
///   are equal and share a hash.
/// - **Identity object**: equality is "same allocation"; two instances with
///   identical field values still compare as distinct (see
///   [`crate::identity`]).
///
/// ## Immutability
///
/// Once created, a value object never changes. To "modify" one, create a new
/// instance with the replaced values (a with-update). This ensures:
/// - **Thread safety**: immutable objects are safe to share across threads
/// - **Predictability**: a value object can't be modified behind your back
/// - **Value semantics**: values behave like primitives (copy, compare, hash)
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: with-updates start from a copy of the source
/// - **Eq + Hash**: structural equality and hashing derived from all fields
/// - **Debug**: value objects should be debuggable
pub trait ValueObject: Clone + Eq + Hash + core::fmt::Debug {}

/// Structural hash of a value, as a printable `u64`.
///
/// This is the hash a `HashMap`/`HashSet` would see: derived from the value's
/// field contents, so equal values produce equal hashes. Not stable across
/// processes; only within-run comparisons are meaningful.
pub fn structural_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_share_a_structural_hash() {
        let a = ("Ana".to_string(), "Helena".to_string());
        let b = ("Ana".to_string(), "Helena".to_string());
        assert_eq!(structural_hash(&a), structural_hash(&b));
    }

    #[test]
    fn structural_hash_is_stable_within_a_run() {
        let a = ("Joao".to_string(), "Pereira".to_string());
        assert_eq!(structural_hash(&a), structural_hash(&a));
    }
}

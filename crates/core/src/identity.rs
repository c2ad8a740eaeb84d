//! Identity comparison: equality by allocation, not value.
//!
//! The counterpart to [`crate::value_object`]. Types that deliberately do not
//! implement `PartialEq`/`Hash` leave identity as the only equality available;
//! these helpers make that comparison explicit at the call site.

/// Whether two references denote the same allocation.
///
/// This is reference equality: it is `false` for two distinct instances even
/// when their field values are identical. That divergence from structural
/// equality is exactly what the demonstration contrasts.
pub fn same_instance<T: ?Sized>(a: &T, b: &T) -> bool {
    core::ptr::eq(a, b)
}

/// Identity-derived hash of a value: its address, as a printable `u64`.
///
/// Two instances with identical field values get different identity hashes,
/// and the same instance gets the same one. Meaningless across runs and not
/// stable across moves; only good for demonstrating the contrast with
/// [`crate::value_object::structural_hash`].
pub fn identity_hash<T: ?Sized>(value: &T) -> u64 {
    core::ptr::from_ref(value).cast::<()>() as usize as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_instance_is_true_only_for_the_same_reference() {
        let a = String::from("Ana");
        let b = String::from("Ana");
        assert!(same_instance(&a, &a));
        assert!(!same_instance(&a, &b));
    }

    #[test]
    fn identity_hash_distinguishes_equal_valued_instances() {
        let a = String::from("Ana");
        let b = String::from("Ana");
        assert_eq!(identity_hash(&a), identity_hash(&a));
        assert_ne!(identity_hash(&a), identity_hash(&b));
    }
}

//! Inbound Ports (Driving Ports)
//!
//! The query surface shared by buildable and loaded filters. Consumers that
//! only need membership answers depend on this trait, never on `insert`.

/// Read-side contract of a Bloom filter
///
/// Implementations are immutable while queried, so a single instance can be
/// shared across threads without locking.
pub trait MembershipQuery: Send + Sync {
    /// Test if an element might be in the set.
    ///
    /// Never returns `false` for an element that was inserted.
    fn contains(&self, element: &[u8]) -> bool;

    /// Filter size in bits (m)
    fn size_bits(&self) -> usize;

    /// Number of hash functions (k)
    fn hash_count(&self) -> usize;

    /// Number of insertions recorded when the filter was built (n)
    fn elements_inserted(&self) -> usize;

    /// Theoretical false positive rate for the recorded element count
    fn false_positive_rate(&self) -> f64 {
        crate::domain::parameters::calculate_fpr(
            self.size_bits(),
            self.elements_inserted(),
            self.hash_count(),
        )
    }
}

impl<T: MembershipQuery + ?Sized> MembershipQuery for std::sync::Arc<T> {
    fn contains(&self, element: &[u8]) -> bool {
        (**self).contains(element)
    }

    fn size_bits(&self) -> usize {
        (**self).size_bits()
    }

    fn hash_count(&self) -> usize {
        (**self).hash_count()
    }

    fn elements_inserted(&self) -> usize {
        (**self).elements_inserted()
    }
}

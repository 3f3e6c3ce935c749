//! Order-sensitive digests over a sequence's live elements.
//!
//! Each live element is hashed with a fixed-seed hasher, and the
//! per-element digests are folded left to right through [`combine`].
//! Equal sequences therefore always produce equal digests, across calls
//! and across processes, while reordering the elements changes the result
//! with high probability. [`Sequence::digest_eq`] uses the digest as a
//! cheap, collision-prone substitute for structural equality — callers
//! needing exactness compare with `==`.

use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

use crate::sequence::Sequence;

/// Fixed odd constant folded into every combining step.
const MIX: u64 = 0xc70f_6907;

// Nothing-up-my-sleeve seeds (hex digits of pi) for the per-element
// hasher, so digests do not vary with process-level hasher randomness.
const SEED0: u64 = 0x243f_6a88_85a3_08d3;
const SEED1: u64 = 0x1319_8a2e_0370_7344;
const SEED2: u64 = 0xa409_3822_299f_31d0;
const SEED3: u64 = 0x082e_fa98_ec4e_6c89;

/// Fold one element digest into a running seed.
///
/// `seed ^ (digest + MIX + (seed << 7) + (seed >> 3))`, with wrapping
/// arithmetic. The shifted seed contributions make the result sensitive
/// to element order, not just the element multiset.
pub fn combine(seed: u64, digest: u64) -> u64 {
    seed ^ digest
        .wrapping_add(MIX)
        .wrapping_add(seed << 7)
        .wrapping_add(seed >> 3)
}

/// Digest a single element with the fixed-seed hasher.
fn element_digest<T: Hash>(value: &T) -> u64 {
    RandomState::with_seeds(SEED0, SEED1, SEED2, SEED3).hash_one(value)
}

impl<T: Hash> Sequence<T> {
    /// Order-sensitive digest of the live elements.
    ///
    /// Deterministic: sequences that compare equal produce equal digests
    /// on every call. The placeholder tail does not participate.
    pub fn digest(&self) -> u64 {
        self.iter()
            .fold(0, |seed, value| combine(seed, element_digest(value)))
    }

    /// Whether two sequences have equal digests.
    ///
    /// Cheaper than `==` for repeated comparisons of long sequences, but
    /// collisions are possible; equal digests do not prove equal contents.
    pub fn digest_eq(&self, other: &Sequence<T>) -> bool {
        self.digest() == other.digest()
    }
}

impl<T: Hash> Hash for Sequence<T> {
    /// Feeds the order-sensitive digest to the caller's hasher, so a
    /// sequence can serve as a key in hashed collections. Consistent with
    /// `Eq`: equal sequences hash identically.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.digest());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_across_calls() {
        let seq = Sequence::from([1u32, 2, 3]);
        assert_eq!(seq.digest(), seq.digest());
    }

    #[test]
    fn equal_sequences_digest_equal() {
        let a = Sequence::from([1u32, 2, 3]);
        let mut b = Sequence::with_capacity(100);
        b.extend([1u32, 2, 3]);
        assert_eq!(a, b);
        assert!(a.digest_eq(&b));
    }

    #[test]
    fn element_order_changes_digest() {
        let a = Sequence::from([1u32, 2, 3]);
        let b = Sequence::from([1u32, 3, 2]);
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn length_changes_digest() {
        let a = Sequence::from([1u32, 2]);
        let b = Sequence::from([1u32, 2, 3]);
        assert!(!a.digest_eq(&b));
    }

    #[test]
    fn empty_sequence_digest_is_zero_seed() {
        let seq: Sequence<u32> = Sequence::new();
        assert_eq!(seq.digest(), 0);
    }

    #[test]
    fn combine_matches_documented_formula() {
        let seed = 0x0123_4567_89ab_cdefu64;
        let digest = 0xfedc_ba98_7654_3210u64;
        let expected = seed
            ^ digest
                .wrapping_add(0xc70f_6907)
                .wrapping_add(seed << 7)
                .wrapping_add(seed >> 3);
        assert_eq!(combine(seed, digest), expected);
    }

    #[test]
    fn sequence_works_as_hash_map_key() {
        use std::collections::HashMap;

        let mut index: HashMap<Sequence<u32>, &str> = HashMap::new();
        index.insert(Sequence::from([1, 2, 3]), "first");
        assert_eq!(index.get(&Sequence::from([1, 2, 3])), Some(&"first"));
        assert_eq!(index.get(&Sequence::from([3, 2, 1])), None);
    }
}

//! Deterministic, context-seeded randomness for probabilistic counter
//! increments.
//!
//! The state table's transition function (`state::transition`) needs a
//! uniform 32-bit word whenever a counter is in its saturating region.
//! Carrying an RNG stream across the compress/decompress boundary would
//! mean the encoder and decoder have to stay lock-step on every draw, for
//! every model, forever — fragile, and unnecessary. prisirv seeds
//! `fastrand` once with a fixed value and lets every call draw from that
//! single shared stream (`fv.rs`'s `fastrand::seed(1)`); here each counter
//! instead reseeds a fresh [`fastrand::Rng`] from a hash of the context
//! that addresses it and how many times it's been touched, so both sides
//! of the coder land on the same word without exchanging anything beyond
//! the bits already being coded, and without a process-wide stream to
//! keep in lockstep.
use fastrand::Rng;

/// Derive a uniform 32-bit word from a context hash and an update count.
///
/// Both the encoder and the decoder call this with the same `context` and
/// `calls` for a given counter, because both process the same bit history
/// in the same order; the result is therefore identical on both sides.
pub fn mix(context: u64, calls: u32) -> u32 {
    let seed = context ^ (calls as u64).wrapping_mul(0x2545_F491_4F6C_DD1D);
    Rng::with_seed(seed).u32(..)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_give_same_word() {
        assert_eq!(mix(42, 7), mix(42, 7));
    }

    #[test]
    fn different_calls_usually_give_different_words() {
        assert_ne!(mix(42, 7), mix(42, 8));
    }

    #[test]
    fn different_contexts_usually_give_different_words() {
        assert_ne!(mix(42, 7), mix(43, 7));
    }
}

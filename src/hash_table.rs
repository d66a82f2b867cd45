//! Open-addressing table mapping a context hash to its [`Counter`].
//!
//! Grounded in prisirv's `hash_table.rs`, which maps a 32-bit context to a
//! slot of raw state bytes guarded by an 8-bit checksum, probing three
//! candidate buckets and evicting whichever has seen the fewest bits.
//! Reworked here into a safe table of `(checksum, Counter)` slots instead
//! of returning a raw pointer into a byte array — prisirv's version predates
//! the `Counter`/`Record` split used here and needs the pointer so several
//! model orders can share one underlying byte arena; this table only ever
//! serves one order, so there's nothing to share and a safe `&mut Counter`
//! is enough.
use crate::counter::Counter;

const BUCKET: usize = 4;

struct Slot {
    checksum: u8,
    counter: Counter,
}

pub struct HashTable {
    slots: Vec<Option<Slot>>,
    mask: usize,
}

impl HashTable {
    /// `n` is the number of buckets and must be a power of two.
    pub fn new(n: usize) -> HashTable {
        assert!(n.is_power_of_two());
        let capacity = n * BUCKET;
        HashTable {
            slots: (0..capacity).map(|_| None).collect(),
            mask: n - 1,
        }
    }

    /// Fetch (creating if absent) the counter for context `ctx`, evicting
    /// the least-seen slot in its bucket on a collision.
    pub fn get(&mut self, ctx: u64) -> &mut Counter {
        let h = hash(ctx);
        let checksum = (h >> 56) as u8;
        let bucket = (h as usize) & self.mask;
        let base = bucket * BUCKET;

        if let Some(i) = (0..BUCKET).find(|&i| {
            matches!(&self.slots[base + i], Some(s) if s.checksum == checksum)
        }) {
            return &mut self.slots[base + i].as_mut().unwrap().counter;
        }

        let victim = (0..BUCKET)
            .min_by_key(|&i| match &self.slots[base + i] {
                None => 0,
                Some(s) => s.counter.get0() + s.counter.get1() + 1,
            })
            .unwrap();
        self.slots[base + victim] = Some(Slot {
            checksum,
            counter: Counter::new(ctx),
        });
        &mut self.slots[base + victim].as_mut().unwrap().counter
    }
}

fn hash(ctx: u64) -> u64 {
    let mut x = ctx;
    x = x.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x ^= x >> 29;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^ (x >> 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_context_returns_the_same_counter_state() {
        let mut t = HashTable::new(16);
        t.get(42).add(1);
        assert_eq!(t.get(42).get1(), 1);
    }

    #[test]
    fn distinct_contexts_do_not_interfere_in_the_common_case() {
        let mut t = HashTable::new(1024);
        t.get(1).add(1);
        t.get(2).add(0);
        assert_eq!(t.get(1).get1(), 1);
        assert_eq!(t.get(2).get0(), 1);
    }
}

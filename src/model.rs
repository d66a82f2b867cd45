//! Context models feeding the predictor's probability mix.
//!
//! [`NonstationaryModel`] is grounded in
//! `examples/original_source/proj/models/nonst_ppm.cpp`'s `NonstationaryPPM`:
//! for N context lengths (the last whole bytes plus the partial current
//! byte) it keeps one bit-history counter per length, and predicts by
//! summing each length's counts weighted by `(length+1)^2` — longer
//! matches count for more. `N` is reduced from the original's 8 to 6 here;
//! lengths 0 and 1 are small enough to index directly, lengths 2 through 5
//! go through a [`HashTable`] the way the original routes lengths 2
//! through N-1 through its `Hashtable<Counter, 24>`.
use crate::counter::Counter;
use crate::hash_table::HashTable;

const N: usize = 6;
const HASH_TABLE_BUCKETS: usize = 1 << 18;

pub trait Model {
    /// Add this model's weighted vote to the running `(n0, n1)` totals.
    fn predict(&mut self, n0: &mut u64, n1: &mut u64);
    /// Advance every context length's counter by the bit just coded, then
    /// reposition for the bit (or byte) that follows.
    fn update(&mut self, bit: i32);
}

pub struct NonstationaryModel {
    /// Current partial byte, 1-255, with a leading 1 bit (PAQ convention:
    /// doubles as an index and as "how many bits of this byte so far").
    c0: u32,
    /// Previous whole byte.
    c1: u32,
    counter0: Vec<Counter>,
    counter1: Vec<Counter>,
    counter_long: HashTable,
    /// Rolling hash of the last 0..N-1 bytes, one per context length.
    hash: [u32; N],
    cursor: [Cursor; N],
}

#[derive(Clone, Copy)]
enum Cursor {
    Direct0(u32),
    Direct1(u32),
    Hashed(u64),
}

impl NonstationaryModel {
    pub fn new() -> NonstationaryModel {
        NonstationaryModel {
            c0: 1,
            c1: 0,
            counter0: (0..256).map(|i| Counter::new(i as u64)).collect(),
            counter1: (0..65536).map(|i| Counter::new(i as u64 | (1 << 32))).collect(),
            counter_long: HashTable::new(HASH_TABLE_BUCKETS),
            hash: [0; N],
            cursor: [Cursor::Direct0(1), Cursor::Direct1(1), Cursor::Hashed(0), Cursor::Hashed(0), Cursor::Hashed(0), Cursor::Hashed(0)],
        }
    }

    fn counter_at(&mut self, i: usize) -> &mut Counter {
        match self.cursor[i] {
            Cursor::Direct0(c0) => &mut self.counter0[c0 as usize],
            Cursor::Direct1(idx) => &mut self.counter1[idx as usize],
            Cursor::Hashed(ctx) => self.counter_long.get(ctx),
        }
    }
}

impl Default for NonstationaryModel {
    fn default() -> NonstationaryModel {
        NonstationaryModel::new()
    }
}

impl Model for NonstationaryModel {
    fn predict(&mut self, n0: &mut u64, n1: &mut u64) {
        for i in 0..N {
            let weight = ((i + 1) * (i + 1)) as u64;
            let c = self.counter_at(i);
            *n0 += c.get0() as u64 * weight;
            *n1 += c.get1() as u64 * weight;
        }
    }

    fn update(&mut self, bit: i32) {
        for i in 0..N {
            self.counter_at(i).add(bit);
        }

        self.c0 = (self.c0 << 1) | bit as u32;
        if self.c0 >= 256 {
            for i in (1..N).rev() {
                self.hash[i] = (self.hash[i - 1].wrapping_add(self.c0)).wrapping_mul(987_660_757);
            }
            self.c1 = self.c0 - 256;
            self.c0 = 1;
        }

        self.cursor[0] = Cursor::Direct0(self.c0);
        self.cursor[1] = Cursor::Direct1(self.c0 | (self.c1 << 8));
        for i in 2..N {
            let ctx = (self.hash[i] as u64) ^ ((i as u64) << 32) ^ ((self.c0 as u64) << 40);
            self.cursor[i] = Cursor::Hashed(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_predicts_an_even_split() {
        let mut m = NonstationaryModel::new();
        let (mut n0, mut n1) = (0u64, 0u64);
        m.predict(&mut n0, &mut n1);
        assert_eq!((n0, n1), (0, 0));
    }

    #[test]
    fn repeating_a_byte_skews_the_prediction_toward_it() {
        let mut m = NonstationaryModel::new();
        for _ in 0..64 {
            for i in (0..8).rev() {
                let bit = (0b1010_1010u32 >> i) & 1;
                m.update(bit as i32);
            }
        }
        let (mut n0, mut n1) = (0u64, 0u64);
        m.predict(&mut n0, &mut n1);
        assert!(n0 > 0 || n1 > 0);
    }
}

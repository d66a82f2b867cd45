//! Offline generator for [`paq1rs::state::STATE_TABLE`].
//!
//! A Rust port of `stategen.cpp` from the original PAQ1 archiver.
//! `src/state.rs` embeds this program's output rather than regenerating
//! it at every build, matching spec.md's note that either is acceptable;
//! run this binary and paste its output back into `state.rs` if the
//! schedule or decay table below is ever revised.
use std::collections::BTreeMap;

const VAL: [u32; 25] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 20, 24, 28, 32, 48, 64, 96, 128, 256, 512, 1024,
];
const DCR: [usize; 25] = [
    0, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17, 18, 19, 21, 22, 23,
];
const N: usize = 24;

/// A reachable state, indexing into `VAL`/`DCR` by schedule position
/// rather than holding the raw counts directly (mirrors `stategen.cpp`'s
/// `E::n0`/`E::n1`, which are schedule indices despite the field names).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Idx {
    n0: usize,
    n1: usize,
}

fn main() {
    // Breadth-first close the reachable set starting from (0, 0), matching
    // `stategen.cpp`'s fixed-point loop over a map.
    let mut reachable: BTreeMap<Idx, ()> = BTreeMap::new();
    reachable.insert(Idx { n0: 0, n1: 0 }, ());
    loop {
        let before = reachable.len();
        let snapshot: Vec<Idx> = reachable.keys().copied().collect();
        for e in snapshot {
            if e.n0 > 10 {
                reachable.insert(Idx { n0: e.n0, n1: DCR[e.n1] }, ());
            }
            if e.n0 < N - 1 {
                reachable.insert(Idx { n0: e.n0 + 1, n1: DCR[e.n1] }, ());
            }
            if e.n0 > 10 {
                reachable.insert(Idx { n0: DCR[e.n0], n1: e.n1 }, ());
            }
            if e.n1 < N - 1 {
                reachable.insert(Idx { n0: DCR[e.n0], n1: e.n1 + 1 }, ());
            }
        }
        if reachable.len() == before {
            break;
        }
    }

    // Sort by replacement priority: total weighted count first, with
    // states past the direct-increment region (n0 or n1 > 9) pushed after
    // same-weight states that are still in it, ties broken by n0 index.
    let mut states: Vec<Idx> = reachable.keys().copied().collect();
    states.sort_by_key(|e| {
        let v = VAL[e.n0] + VAL[e.n1] + if e.n0 > 9 || e.n1 > 9 { 100 } else { 0 };
        (v, e.n0)
    });

    let find = |n0: usize, n1: usize| -> usize {
        states
            .iter()
            .position(|s| s.n0 == n0 && s.n1 == n1)
            .expect("next state must be in the reachable set")
    };

    println!("pub const STATE_TABLE: [Record; {}] = [", states.len());
    for (i, e) in states.iter().enumerate() {
        let s00 = find(e.n0, DCR[e.n1]);
        let s01 = find(if e.n0 < N - 1 { e.n0 + 1 } else { e.n0 }, DCR[e.n1]);
        let s10 = find(DCR[e.n0], e.n1);
        let s11 = find(DCR[e.n0], if e.n1 < N - 1 { e.n1 + 1 } else { e.n1 });
        let p0 = if e.n0 != N - 1 { 0xFFFF_FFFFu32 / (VAL[e.n0 + 1] - VAL[e.n0]) } else { 0 };
        let p1 = if e.n1 != N - 1 { 0xFFFF_FFFFu32 / (VAL[e.n1 + 1] - VAL[e.n1]) } else { 0 };
        println!(
            "    Record {{ n0: {:5}, n1: {:5}, s00: {:4}, s01: {:4}, s10: {:4}, s11: {:4}, p0: {:10}, p1: {:10} }}, // {}",
            VAL[e.n0], VAL[e.n1], s00, s01, s10, s11, p0, p1, i
        );
    }
    println!("];");
}

//! Bridges [`Coder`](crate::coder::Coder) to the context models.
//!
//! spec.md's Predictor facade is fixed: `probability()` returns a clamped
//! 16-bit estimate of P(next bit = 1), `update(bit)` folds the observed
//! bit back into every model. This mirrors prisirv's `predictor.rs`, which
//! plays the same role between its `Encoder`/`Decoder` and its `cm`
//! models, but prisirv mixes several specialized models through a learned
//! `Mixer`; spec.md asks only for the fixed `(n0, n1)`-weighted combining
//! formula, so there's one model here and no mixing stage.
use crate::model::{Model, NonstationaryModel};

pub struct Predictor {
    model: NonstationaryModel,
}

impl Predictor {
    pub fn new() -> Predictor {
        Predictor {
            model: NonstationaryModel::new(),
        }
    }

    /// P(next bit = 1), scaled to [1, 65534] so the coder's range split
    /// never collapses to an empty interval. Starts both counts at 1
    /// (`coding.cpp`'s `Predictor::p()`: `int n0=1, n1=n0;`), so a fresh
    /// model with nothing yet observed predicts `floor(65535*1/2) =
    /// 32767` rather than an even split invented for the occasion.
    pub fn probability(&mut self) -> u16 {
        let (mut n0, mut n1) = (1u64, 1u64);
        self.model.predict(&mut n0, &mut n1);
        let total = n0 + n1;
        let p = (65535 * n1 / total) as u32;
        p.clamp(1, 65534) as u16
    }

    pub fn update(&mut self, bit: i32) {
        self.model.update(bit);
    }
}

impl Default for Predictor {
    fn default() -> Predictor {
        Predictor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_predictor_is_never_at_the_edges() {
        let mut p = Predictor::new();
        let prob = p.probability();
        assert!(prob >= 1 && prob <= 65534);
    }

    #[test]
    fn probability_never_leaves_the_valid_range() {
        let mut p = Predictor::new();
        for i in 0..2000 {
            p.update(if i % 3 == 0 { 1 } else { 0 });
            let prob = p.probability();
            assert!(prob >= 1 && prob <= 65534);
        }
    }

    #[test]
    fn learns_to_favor_the_repeated_bit() {
        let mut p = Predictor::new();
        for _ in 0..500 {
            p.update(1);
        }
        assert!(p.probability() > 32768);
    }
}

use std::fmt;

use super::Generator;
use crate::item::Item;
use crate::random::RandomSource;
use crate::spec::Weights;

/// Reports a weight that depends on how many items have been drawn through
/// it so far, e.g. to make the first pick from a bucket likelier than the
/// fifth.
#[derive(Debug)]
pub struct WeightGenerator {
    weights: Weights,
    draws: usize,
    inner: Box<Generator>,
}

impl WeightGenerator {
    pub(super) fn new(weights: Weights, inner: Generator) -> Self {
        WeightGenerator {
            weights,
            draws: 0,
            inner: Box::new(inner),
        }
    }

    pub(super) fn weight(&self) -> f64 {
        self.weights.at(self.draws)
    }

    pub(super) fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        let item = self.inner.select(rng)?;
        self.draws += 1;
        Some(item)
    }
}

impl fmt::Display for WeightGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W({}, {})", self.weights, self.inner)
    }
}

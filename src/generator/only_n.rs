use std::fmt;

use super::Generator;
use crate::item::Item;
use crate::random::RandomSource;

/// Lets through at most `n` draw attempts; an attempt that finds the inner
/// generator exhausted still counts
#[derive(Debug)]
pub struct OnlyNGenerator {
    n: usize,
    remaining: usize,
    inner: Box<Generator>,
}

impl OnlyNGenerator {
    pub(super) fn new(n: usize, inner: Generator) -> Self {
        OnlyNGenerator {
            n,
            remaining: n,
            inner: Box::new(inner),
        }
    }

    pub(super) fn weight(&self) -> Option<f64> {
        self.inner.weight()
    }

    pub(super) fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.select(rng)
    }
}

impl fmt::Display for OnlyNGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({}, {})", self.n, self.inner)
    }
}

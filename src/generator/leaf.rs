//! Leaf generators: fixed literals and numeric ranges

use std::fmt;

use crate::item::Item;
use crate::random::RandomSource;

/// Produces its literal once
#[derive(Debug)]
pub struct UniqueGenerator {
    text: String,
    spent: bool,
}

impl UniqueGenerator {
    pub(super) fn new(text: String) -> Self {
        UniqueGenerator { text, spent: false }
    }

    pub(super) fn select(&mut self) -> Option<Item> {
        if self.spent {
            return None;
        }
        self.spent = true;
        Some(Item::new(self.text.clone()))
    }
}

impl fmt::Display for UniqueGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)
    }
}

/// Produces one integer from `[min, max]`, sampled when first selected
#[derive(Debug)]
pub struct RangeGenerator {
    min: i64,
    max: i64,
    spent: bool,
}

impl RangeGenerator {
    pub(super) fn new(min: i64, max: i64) -> Self {
        RangeGenerator {
            min,
            max,
            spent: false,
        }
    }

    pub(super) fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        if self.spent {
            return None;
        }
        self.spent = true;
        let value = rng.int_in_range(self.min, self.max);
        Some(Item::new(value.to_string()))
    }
}

impl fmt::Display for RangeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R({}, {})", self.min, self.max)
    }
}

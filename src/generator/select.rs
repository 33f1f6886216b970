//! Weighted selection among child generators

use std::fmt;

use tracing::debug;

use super::{BuildSettings, Generator};
use crate::item::Item;
use crate::random::RandomSource;
use crate::spec::{write_list, Spec};

/// Picks among its children by weight. A child that turns out to be
/// exhausted is removed for good and the draw is retried among the rest, so
/// one empty branch never fails the whole selection.
#[derive(Debug)]
pub struct SelectGenerator {
    /// Children that may still produce items, in declaration order
    generators: Vec<Generator>,
    default_weight: f64,
}

impl SelectGenerator {
    pub(super) fn new(children: &[Spec], settings: &BuildSettings) -> Self {
        SelectGenerator {
            generators: children
                .iter()
                .map(|child| Generator::build(child, settings))
                .collect(),
            default_weight: settings.default_weight,
        }
    }

    /// Number of children that have not been found exhausted yet
    pub fn remaining(&self) -> usize {
        self.generators.len()
    }

    pub(super) fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        while !self.generators.is_empty() {
            // Weights are re-read every time since a child's weight may
            // change after each of its draws.
            let weights: Vec<f64> = self
                .generators
                .iter()
                .map(|generator| generator.weight().unwrap_or(self.default_weight))
                .collect();

            let index = rng.weighted_index(&weights)?;
            if let Some(item) = self.generators[index].select(rng) {
                return Some(item);
            }

            let exhausted = self.generators.remove(index);
            debug!(
                branch = %exhausted,
                remaining = self.generators.len(),
                "select branch exhausted"
            );
        }
        None
    }
}

impl fmt::Display for SelectGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S([")?;
        write_list(f, &self.generators)?;
        write!(f, "])")
    }
}

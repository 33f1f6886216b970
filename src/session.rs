//! Draw sessions: one generator tree plus the random source it draws from
use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::error::SpecError;
use crate::generator::{BuildSettings, Generator};
use crate::item::Item;
use crate::random::RandomSource;
use crate::spec::Spec;

/// Weight a `Select` assumes for children that express no preference
pub const DEFAULT_WEIGHT: f64 = 100.0;

/// Options for starting a draw session
pub struct DrawOptions<R> {
    /// Random source shared by every generator in the session
    pub rng: R,
    /// Weight used for children with no preference (default 100)
    pub default_weight: f64,
    /// Stop after this many items even if more are available
    pub max_items: Option<usize>,
}

impl<R> DrawOptions<R> {
    /// Create new options with provided random source
    pub fn new(rng: R) -> Self {
        DrawOptions {
            rng,
            default_weight: DEFAULT_WEIGHT,
            max_items: None,
        }
    }

    /// Set the weight for children with no preference
    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Cap the number of items the session hands out
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SpecError> {
        if !self.default_weight.is_finite() || self.default_weight <= 0.0 {
            return Err(SpecError::InvalidWeight {
                value: self.default_weight,
            });
        }
        Ok(())
    }
}

/// A single draw session.
///
/// Created by [`Spec::build`]; owns a fresh generator tree, so sessions
/// built from the same specification never affect each other.
pub struct Session<R> {
    rng: R,
    root: Generator,
    max_items: Option<usize>,
    produced: usize,
}

impl<R: RandomSource> Session<R> {
    pub(crate) fn new(spec: &Spec, options: DrawOptions<R>) -> Self {
        let settings = BuildSettings {
            default_weight: options.default_weight,
        };
        let root = Generator::build(spec, &settings);
        trace!(spec = %spec, max_items = ?options.max_items, "built draw session");

        Session {
            rng: options.rng,
            root,
            max_items: options.max_items,
            produced: 0,
        }
    }

    /// Draw the next item, or `None` once the tree is exhausted or the
    /// session's item cap is reached
    pub fn select(&mut self) -> Option<Item> {
        if self.max_items.is_some_and(|max| self.produced >= max) {
            return None;
        }
        let item = self.root.select(&mut self.rng)?;
        self.produced += 1;
        Some(item)
    }

    /// The root generator's current weight, if it has a preference
    pub fn weight(&self) -> Option<f64> {
        self.root.weight()
    }

    /// Number of items handed out so far
    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn root(&self) -> &Generator {
        &self.root
    }

    /// End the session and get the random source back
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: RandomSource> Iterator for Session<R> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        self.select()
    }
}

impl<R: RandomSource> FusedIterator for Session<R> {}

impl<R> fmt::Display for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl<R> fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("root", &self.root)
            .field("max_items", &self.max_items)
            .field("produced", &self.produced)
            .finish_non_exhaustive()
    }
}

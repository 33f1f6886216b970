//! Generators - the per-session, stateful side of a specification tree
// Leaf generators
mod leaf;

// Combinators
mod format;
mod limit_per_line;
mod only_n;
mod select;
mod weight;

pub use format::FormatGenerator;
pub use leaf::{RangeGenerator, UniqueGenerator};
pub use limit_per_line::LimitPerLineGenerator;
pub use only_n::OnlyNGenerator;
pub use select::SelectGenerator;
pub use weight::WeightGenerator;

use crate::item::Item;
use crate::random::RandomSource;
use crate::spec::{Spec, SpecKind};
use std::fmt;

/// Settings shared by every generator built for one session
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuildSettings {
    /// Weight used by a `Select` for children with no preference
    pub default_weight: f64,
}

/// One node of a session's generator tree, mirroring one `Spec` node.
///
/// `select` returns `None` once the generator is exhausted and keeps
/// returning `None` afterwards.
#[derive(Debug)]
pub enum Generator {
    Unique(UniqueGenerator),
    Range(RangeGenerator),
    Select(SelectGenerator),
    Format(FormatGenerator),
    Weight(WeightGenerator),
    OnlyN(OnlyNGenerator),
    LimitPerLine(LimitPerLineGenerator),
}

impl Generator {
    pub(crate) fn build(spec: &Spec, settings: &BuildSettings) -> Generator {
        match spec.kind() {
            SpecKind::Unique(text) => Generator::Unique(UniqueGenerator::new(text.clone())),
            SpecKind::Range { min, max } => Generator::Range(RangeGenerator::new(*min, *max)),
            SpecKind::Select(children) => {
                Generator::Select(SelectGenerator::new(children, settings))
            }
            SpecKind::Format { template, groups } => {
                Generator::Format(FormatGenerator::new(template.clone(), groups, settings))
            }
            SpecKind::Weight { weights, inner } => Generator::Weight(WeightGenerator::new(
                weights.clone(),
                Generator::build(inner, settings),
            )),
            SpecKind::OnlyN { n, inner } => {
                Generator::OnlyN(OnlyNGenerator::new(*n, Generator::build(inner, settings)))
            }
            SpecKind::LimitPerLine {
                limit,
                group,
                inner,
            } => Generator::LimitPerLine(LimitPerLineGenerator::new(
                *limit,
                *group,
                Generator::build(inner, settings),
            )),
        }
    }

    /// The weight to report to an enclosing `Select`, or `None` for no
    /// preference
    pub fn weight(&self) -> Option<f64> {
        match self {
            Generator::Unique(_) | Generator::Range(_) => None,
            Generator::Select(_) | Generator::Format(_) => None,
            Generator::Weight(generator) => Some(generator.weight()),
            Generator::OnlyN(generator) => generator.weight(),
            Generator::LimitPerLine(generator) => generator.weight(),
        }
    }

    /// Draw the next item, or `None` once exhausted
    pub fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        match self {
            Generator::Unique(generator) => generator.select(),
            Generator::Range(generator) => generator.select(rng),
            Generator::Select(generator) => generator.select(rng),
            Generator::Format(generator) => generator.select(rng),
            Generator::Weight(generator) => generator.select(rng),
            Generator::OnlyN(generator) => generator.select(rng),
            Generator::LimitPerLine(generator) => generator.select(rng),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Unique(generator) => fmt::Display::fmt(generator, f),
            Generator::Range(generator) => fmt::Display::fmt(generator, f),
            Generator::Select(generator) => fmt::Display::fmt(generator, f),
            Generator::Format(generator) => fmt::Display::fmt(generator, f),
            Generator::Weight(generator) => fmt::Display::fmt(generator, f),
            Generator::OnlyN(generator) => fmt::Display::fmt(generator, f),
            Generator::LimitPerLine(generator) => fmt::Display::fmt(generator, f),
        }
    }
}

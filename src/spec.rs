//! The immutable specification tree
//!
//! A [`Spec`] describes a space of items. It is never mutated after it is
//! built, so one tree can start any number of independent draw sessions.
//! All state lives in the generators that [`Spec::build`] creates.

use std::fmt;
use std::sync::Arc;

use crate::error::SpecError;
use crate::factory;
use crate::item::LimitGroupId;
use crate::random::RandomSource;
use crate::session::{DrawOptions, Session};
use crate::template::Template;

#[derive(Debug, Clone, PartialEq)]
pub enum Weights {
    Fixed(f64),
    /// One weight per successful draw; the last one repeats
    Sequence(Vec<f64>),
}

impl Weights {
    /// The weight to report after `draws` successful draws
    pub fn at(&self, draws: usize) -> f64 {
        match self {
            Weights::Fixed(weight) => *weight,
            Weights::Sequence(weights) => {
                let last = weights.len().saturating_sub(1);
                weights.get(draws.min(last)).copied().unwrap_or(0.0)
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SpecError> {
        let values = match self {
            Weights::Fixed(weight) => std::slice::from_ref(weight),
            Weights::Sequence(weights) if weights.is_empty() => {
                return Err(SpecError::EmptyWeights)
            }
            Weights::Sequence(weights) => weights.as_slice(),
        };
        match values.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            Some(value) => Err(SpecError::InvalidWeight { value: *value }),
            None => Ok(()),
        }
    }
}

impl From<f64> for Weights {
    fn from(weight: f64) -> Self {
        Weights::Fixed(weight)
    }
}

impl From<Vec<f64>> for Weights {
    fn from(weights: Vec<f64>) -> Self {
        Weights::Sequence(weights)
    }
}

impl From<&[f64]> for Weights {
    fn from(weights: &[f64]) -> Self {
        Weights::Sequence(weights.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Weights {
    fn from(weights: [f64; N]) -> Self {
        Weights::Sequence(weights.to_vec())
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weights::Fixed(weight) => write!(f, "{}", weight),
            Weights::Sequence(weights) => {
                write!(f, "[")?;
                for (i, weight) in weights.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", weight)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// The closed set of specification variants
#[derive(Debug)]
pub enum SpecKind {
    /// A literal produced exactly once
    Unique(String),
    /// One integer sampled from `[min, max]`
    Range { min: i64, max: i64 },
    /// Weighted choice among children, each drawable until exhausted
    Select(Vec<Spec>),
    /// A template filled from one group per placeholder index
    Format { template: Template, groups: Vec<Spec> },
    Weight { weights: Weights, inner: Spec },
    OnlyN { n: usize, inner: Spec },
    /// Tags every item from `inner` with `group -> limit`
    LimitPerLine {
        limit: usize,
        group: LimitGroupId,
        inner: Spec,
    },
}

/// An immutable, cheaply clonable specification node.
///
/// Construct these through the functions in [`crate::factory`]; they check
/// the configuration up front so a built tree can always be drawn from.
#[derive(Debug, Clone)]
pub struct Spec(Arc<SpecKind>);

impl Spec {
    pub(crate) fn from_kind(kind: SpecKind) -> Self {
        Spec(Arc::new(kind))
    }

    pub fn kind(&self) -> &SpecKind {
        &self.0
    }

    /// Start a draw session with the default options
    pub fn build<R: RandomSource>(&self, rng: R) -> Session<R> {
        Session::new(self, DrawOptions::new(rng))
    }

    /// Start a draw session with custom options
    pub fn build_with<R: RandomSource>(
        &self,
        options: DrawOptions<R>,
    ) -> Result<Session<R>, SpecError> {
        options.validate()?;
        Ok(Session::new(self, options))
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            SpecKind::Unique(text) => write!(f, "{:?}", text),
            SpecKind::Range { min, max } => write!(f, "R({}, {})", min, max),
            SpecKind::Select(children) => {
                write!(f, "S([")?;
                write_list(f, children)?;
                write!(f, "])")
            }
            SpecKind::Format { template, groups } => {
                write!(f, "F({:?}", template.source())?;
                for group in groups {
                    write!(f, ", {}", group)?;
                }
                write!(f, ")")
            }
            SpecKind::Weight { weights, inner } => write!(f, "W({}, {})", weights, inner),
            SpecKind::OnlyN { n, inner } => write!(f, "N({}, {})", n, inner),
            SpecKind::LimitPerLine { limit, inner, .. } => {
                write!(f, "LimitPerLine({}, {})", limit, inner)
            }
        }
    }
}

pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Anything that can stand where a specification is expected.
///
/// Strings and numbers become [`SpecKind::Unique`] leaves, and lists become a
/// [`SpecKind::Select`] over their normalized elements. A
/// `Result<Spec, SpecError>` is accepted too, so fallible constructors nest
/// without `?` and the first error surfaces from the outermost call.
pub trait IntoSpec {
    fn into_spec(self) -> Result<Spec, SpecError>;
}

impl IntoSpec for Spec {
    fn into_spec(self) -> Result<Spec, SpecError> {
        Ok(self)
    }
}

impl IntoSpec for &Spec {
    fn into_spec(self) -> Result<Spec, SpecError> {
        Ok(self.clone())
    }
}

impl IntoSpec for Result<Spec, SpecError> {
    fn into_spec(self) -> Result<Spec, SpecError> {
        self
    }
}

impl IntoSpec for &str {
    fn into_spec(self) -> Result<Spec, SpecError> {
        Ok(factory::unique(self))
    }
}

impl IntoSpec for String {
    fn into_spec(self) -> Result<Spec, SpecError> {
        Ok(factory::unique(self))
    }
}

impl IntoSpec for &String {
    fn into_spec(self) -> Result<Spec, SpecError> {
        Ok(factory::unique(self.as_str()))
    }
}

impl IntoSpec for char {
    fn into_spec(self) -> Result<Spec, SpecError> {
        Ok(factory::unique(self.to_string()))
    }
}

macro_rules! impl_into_spec_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl IntoSpec for $ty {
                fn into_spec(self) -> Result<Spec, SpecError> {
                    Ok(factory::unique(self.to_string()))
                }
            }
        )*
    };
}

impl_into_spec_for_numbers!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl<T: IntoSpec> IntoSpec for Vec<T> {
    fn into_spec(self) -> Result<Spec, SpecError> {
        factory::select(self)
    }
}

impl<T: IntoSpec, const N: usize> IntoSpec for [T; N] {
    fn into_spec(self) -> Result<Spec, SpecError> {
        factory::select(self)
    }
}

impl From<&str> for Spec {
    fn from(text: &str) -> Self {
        factory::unique(text)
    }
}

impl From<String> for Spec {
    fn from(text: String) -> Self {
        factory::unique(text)
    }
}

/// Postfix forms of the wrapping combinators
///
/// ```
/// use itemgen::{select, Combinators};
///
/// let kills = select(["Centipedes", "Bulls", "Ogres"])
///     .only(2)
///     .weight([400.0, 100.0]);
/// assert!(kills.is_ok());
/// ```
pub trait Combinators: IntoSpec + Sized {
    fn weight(self, weights: impl Into<Weights>) -> Result<Spec, SpecError> {
        factory::weight(weights, self)
    }

    fn only(self, n: usize) -> Result<Spec, SpecError> {
        factory::only(n, self)
    }

    fn limit_per_line(self, limit: usize) -> Result<Spec, SpecError> {
        factory::limit_per_line(limit, self)
    }
}

impl<T: IntoSpec> Combinators for T {}

/// Collect heterogeneous values into a list of specifications.
///
/// The result is a `Vec<Result<Spec, SpecError>>`, which itself normalizes
/// into a `Select`.
#[macro_export]
macro_rules! specs {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::IntoSpec::into_spec($item)),*]
    };
}

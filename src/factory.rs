//! Constructors for specification trees
//!
//! Every fallible constructor checks its configuration immediately and
//! accepts anything implementing [`IntoSpec`], including the `Result` of
//! another constructor, so trees read as one nested expression:
//!
//! ```
//! use itemgen::{format, one_of, range, select};
//!
//! let spec = select([
//!     format("Collect {0} prayer necklaces", range(6, 9)),
//!     format("Defeat {0}", one_of(["Father Owl", "Sword Saint"])),
//! ]);
//! assert!(spec.is_ok());
//! ```

use crate::error::{SpecError, TemplateError};
use crate::item::LimitGroupId;
use crate::spec::{IntoSpec, Spec, SpecKind, Weights};
use crate::template::Template;

/// A literal produced exactly once per session
pub fn unique(text: impl Into<String>) -> Spec {
    Spec::from_kind(SpecKind::Unique(text.into()))
}

/// One integer sampled uniformly from `[min, max]`
pub fn range(min: i64, max: i64) -> Result<Spec, SpecError> {
    if min > max {
        return Err(SpecError::InvalidRange { min, max });
    }
    Ok(Spec::from_kind(SpecKind::Range { min, max }))
}

/// Weighted choice among `children`; an exhausted child is dropped and the
/// draw retried among the rest
pub fn select<I>(children: I) -> Result<Spec, SpecError>
where
    I: IntoIterator,
    I::Item: IntoSpec,
{
    let children = collect_specs(children)?;
    if children.is_empty() {
        return Err(SpecError::EmptySelect);
    }
    Ok(Spec::from_kind(SpecKind::Select(children)))
}

/// Fill the `{0}` placeholders of `template` from a single group
pub fn format(template: &str, group: impl IntoSpec) -> Result<Spec, SpecError> {
    format_with(template, (group,))
}

/// Fill `template` from several groups, one per placeholder index.
///
/// `groups` is a tuple of up to four specifications, `()` for a template
/// without placeholders, or a `Vec` where each element is one group.
pub fn format_with(template: &str, groups: impl IntoGroups) -> Result<Spec, SpecError> {
    let groups = groups.into_groups()?;
    let parsed = Template::parse(template).map_err(|error| template_error(template, error))?;
    parsed
        .check_groups(groups.len())
        .map_err(|error| template_error(template, error))?;

    Ok(Spec::from_kind(SpecKind::Format {
        template: parsed,
        groups,
    }))
}

/// Override the weight `spec` reports to its parent `select`.
///
/// A sequence gives the weight before the first, second, ... successful
/// draw, repeating its last entry.
pub fn weight(weights: impl Into<Weights>, spec: impl IntoSpec) -> Result<Spec, SpecError> {
    let inner = spec.into_spec()?;
    let weights = weights.into();
    weights.validate()?;
    Ok(Spec::from_kind(SpecKind::Weight { weights, inner }))
}

/// Allow at most `n` draws from `spec`
pub fn only(n: usize, spec: impl IntoSpec) -> Result<Spec, SpecError> {
    let inner = spec.into_spec()?;
    if n == 0 {
        return Err(SpecError::ZeroCount);
    }
    Ok(Spec::from_kind(SpecKind::OnlyN { n, inner }))
}

/// Exactly one draw from a selection over `children`
pub fn one_of<I>(children: I) -> Result<Spec, SpecError>
where
    I: IntoIterator,
    I::Item: IntoSpec,
{
    only(1, select(children))
}

/// Tag every item drawn from `spec` so that a layout can keep at most
/// `limit` of them on one line
pub fn limit_per_line(limit: usize, spec: impl IntoSpec) -> Result<Spec, SpecError> {
    let inner = spec.into_spec()?;
    Ok(Spec::from_kind(SpecKind::LimitPerLine {
        limit,
        group: LimitGroupId::next(),
        inner,
    }))
}

/// The group list of a `format_with` call
pub trait IntoGroups {
    fn into_groups(self) -> Result<Vec<Spec>, SpecError>;
}

impl IntoGroups for () {
    fn into_groups(self) -> Result<Vec<Spec>, SpecError> {
        Ok(Vec::new())
    }
}

impl<T: IntoSpec> IntoGroups for Vec<T> {
    fn into_groups(self) -> Result<Vec<Spec>, SpecError> {
        collect_specs(self)
    }
}

macro_rules! impl_into_groups_for_tuples {
    ($(($($name:ident),+)),*) => {
        $(
            impl<$($name: IntoSpec),+> IntoGroups for ($($name,)+) {
                #[allow(non_snake_case)]
                fn into_groups(self) -> Result<Vec<Spec>, SpecError> {
                    let ($($name,)+) = self;
                    Ok(vec![$($name.into_spec()?),+])
                }
            }
        )*
    };
}

impl_into_groups_for_tuples!((A), (A, B), (A, B, C), (A, B, C, D));

fn collect_specs<I>(items: I) -> Result<Vec<Spec>, SpecError>
where
    I: IntoIterator,
    I::Item: IntoSpec,
{
    items.into_iter().map(IntoSpec::into_spec).collect()
}

fn template_error(template: &str, error: TemplateError) -> SpecError {
    SpecError::Template {
        template: template.to_string(),
        error,
    }
}

//! Phrasing helpers built from the primitive combinators

use crate::error::SpecError;
use crate::factory::{format, one_of, range, select};
use crate::spec::{IntoSpec, Spec};

/// Alternative templates for [`subset`]
#[derive(Debug, Clone, Default)]
pub struct SubsetPhrasing {
    /// Template for "{0} of this kind"; defaults to the singular template
    /// with an `s` appended
    pub count: Option<String>,
    /// Template used when two items are named; defaults like `count`
    pub plural: Option<String>,
}

impl SubsetPhrasing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }
}

/// Ask for an interesting subset of a labeled set of interchangeable items.
///
/// Produces exactly one of three phrasings: a count ("{0} Mid-Air skills"),
/// a named pair ("Mid-Air Combat Arts and Deflection skills") or a single
/// named item ("Mid-Air Deflection skill"). With exactly three items the
/// count is 1 or 2, since asking for all three is the same as naming them;
/// larger sets ask for between `len - 3` and `len`.
///
/// ```
/// use itemgen::{subset, SubsetPhrasing};
///
/// let skills = subset(
///     "Mid-Air {0} skill",
///     ["Combat Arts", "Deflection", "Prosthetic Tool"],
///     SubsetPhrasing::new().with_count("{0} Mid-Air skills"),
/// );
/// assert!(skills.is_ok());
/// ```
pub fn subset<I>(singular: &str, items: I, phrasing: SubsetPhrasing) -> Result<Spec, SpecError>
where
    I: IntoIterator,
    I::Item: IntoSpec,
{
    let items = items
        .into_iter()
        .map(IntoSpec::into_spec)
        .collect::<Result<Vec<_>, _>>()?;
    let len = items.len();
    if len < 3 {
        return Err(SpecError::SubsetTooSmall { len });
    }

    let pluralized = format!("{}s", singular);
    let count = phrasing.count.unwrap_or_else(|| pluralized.clone());
    let plural = phrasing.plural.unwrap_or(pluralized);

    let amount = if len == 3 {
        one_of([1, 2])
    } else {
        range(len as i64 - 3, len as i64)
    };

    one_of(crate::specs![
        format(&count, amount),
        format(&plural, format("{0} and {0}", select(items.clone()))),
        format(singular, select(items)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_subset_yields_one_phrase() {
        let spec = subset(
            "Mid-Air {0} skill",
            ["Combat Arts", "Deflection", "Prosthetic Tool"],
            SubsetPhrasing::new().with_count("{0} Mid-Air skills"),
        )
        .unwrap();

        for seed in 0..30 {
            let items: Vec<String> = spec
                .build(StdRng::seed_from_u64(seed))
                .map(|item| item.text)
                .collect();
            assert_eq!(items.len(), 1);

            let text = &items[0];
            let is_count = text == "1 Mid-Air skills" || text == "2 Mid-Air skills";
            let is_pair = text.contains(" and ") && text.ends_with("skills");
            let is_single = text.starts_with("Mid-Air ") && text.ends_with(" skill");
            assert!(is_count || is_pair || is_single, "unexpected phrase {:?}", text);
        }
    }

    #[test]
    fn test_larger_sets_use_a_range() {
        let spec = subset(
            "{0} Karma skill",
            ["a", "b", "c", "d", "e"],
            SubsetPhrasing::new(),
        )
        .unwrap();
        let text = spec.to_string();
        assert!(text.contains("R(2, 5)"), "{}", text);
    }

    #[test]
    fn test_subset_needs_three_items() {
        let result = subset("{0}", ["a", "b"], SubsetPhrasing::new());
        assert_eq!(result.unwrap_err(), SpecError::SubsetTooSmall { len: 2 });
    }
}

use std::fmt;

use super::Generator;
use crate::item::{Item, LimitGroupId};
use crate::random::RandomSource;

/// Tags every item from its inner generator with `group -> limit`.
///
/// Nothing is limited here; the layout that places items reads the tag.
#[derive(Debug)]
pub struct LimitPerLineGenerator {
    limit: usize,
    group: LimitGroupId,
    inner: Box<Generator>,
}

impl LimitPerLineGenerator {
    pub(super) fn new(limit: usize, group: LimitGroupId, inner: Generator) -> Self {
        LimitPerLineGenerator {
            limit,
            group,
            inner: Box::new(inner),
        }
    }

    pub(super) fn weight(&self) -> Option<f64> {
        self.inner.weight()
    }

    pub(super) fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        let mut item = self.inner.select(rng)?;
        item.tag(self.group, self.limit);
        Some(item)
    }
}

impl fmt::Display for LimitPerLineGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LimitPerLine({}, {})", self.limit, self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{limit_per_line, select};
    use crate::generator::BuildSettings;
    use crate::session::DEFAULT_WEIGHT;
    use crate::spec::{Spec, SpecKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn group_of(spec: &Spec) -> LimitGroupId {
        match spec.kind() {
            SpecKind::LimitPerLine { group, .. } => *group,
            other => panic!("expected LimitPerLine, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_wrappers_add_both_tags() {
        let inner = limit_per_line(1, select(["no healing", "no prosthetics"])).unwrap();
        let outer = limit_per_line(3, inner.clone()).unwrap();
        let mut generator = Generator::build(
            &outer,
            &BuildSettings {
                default_weight: DEFAULT_WEIGHT,
            },
        );
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..2 {
            let item = generator.select(&mut rng).unwrap();
            assert_eq!(item.limit_for(group_of(&inner)), Some(1));
            assert_eq!(item.limit_for(group_of(&outer)), Some(3));
        }
        assert!(generator.select(&mut rng).is_none());
    }
}

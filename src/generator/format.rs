//! Template filling from sub-generators

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::{BuildSettings, Generator};
use crate::item::Item;
use crate::random::RandomSource;
use crate::spec::Spec;
use crate::template::Template;

/// Fills a template with one draw per placeholder occurrence.
///
/// Either every placeholder is filled or nothing is returned: as soon as any
/// group runs dry the whole format is exhausted, and the sub-items already
/// drawn for that attempt are dropped.
#[derive(Debug)]
pub struct FormatGenerator {
    template: Template,
    groups: Vec<Generator>,
    exhausted: bool,
}

impl FormatGenerator {
    pub(super) fn new(template: Template, groups: &[Spec], settings: &BuildSettings) -> Self {
        FormatGenerator {
            template,
            groups: groups
                .iter()
                .map(|group| Generator::build(group, settings))
                .collect(),
            exhausted: false,
        }
    }

    pub(super) fn select<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        if self.exhausted {
            return None;
        }

        // Without placeholders this is a plain literal
        if !self.template.has_placeholders() {
            self.exhausted = true;
            return Some(Item::new(self.template.render::<String>(&[])));
        }

        let mut fills = Vec::new();
        let mut limits = BTreeMap::new();
        for index in self.template.placeholders() {
            let drawn = self
                .groups
                .get_mut(index)
                .and_then(|group| group.select(rng));
            match drawn {
                Some(item) => {
                    fills.push(item.text);
                    limits.extend(item.limits_per_line);
                }
                None => {
                    debug!(
                        template = self.template.source(),
                        group = index,
                        "format group exhausted"
                    );
                    self.exhausted = true;
                    return None;
                }
            }
        }

        let mut item = Item::new(self.template.render(&fills));
        item.merge_tags(limits);
        Some(item)
    }
}

impl fmt::Display for FormatGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F({:?}", self.template.source())?;
        for group in &self.groups {
            write!(f, ", {}", group)?;
        }
        write!(f, ")")
    }
}

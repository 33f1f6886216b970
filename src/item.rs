//! Items produced by a draw session
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIMIT_GROUP: AtomicU64 = AtomicU64::new(0);

/// Identifies one `LimitPerLine` wrapper.
///
/// Ids are handed out from a process-wide counter when the wrapper is
/// constructed, so two wrappers never share an id even if they wrap
/// identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitGroupId(u64);

impl LimitGroupId {
    pub(crate) fn next() -> Self {
        LimitGroupId(NEXT_LIMIT_GROUP.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LimitGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One generated entry: its rendered text plus the occurrence-limit groups
/// it belongs to.
///
/// The engine only attaches these tags. Whoever lays the items out is
/// responsible for keeping at most `limit` items of a group on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub limits_per_line: BTreeMap<LimitGroupId, usize>,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            limits_per_line: BTreeMap::new(),
        }
    }

    /// The per-line limit for `group`, if this item is tagged with it
    pub fn limit_for(&self, group: LimitGroupId) -> Option<usize> {
        self.limits_per_line.get(&group).copied()
    }

    pub(crate) fn tag(&mut self, group: LimitGroupId, limit: usize) {
        self.limits_per_line.insert(group, limit);
    }

    pub(crate) fn merge_tags(&mut self, other: BTreeMap<LimitGroupId, usize>) {
        self.limits_per_line.extend(other);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

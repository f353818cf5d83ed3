//! Items shown by the selection prompt

use std::fmt;

use crate::mru::Partition;

/// Section label above the recently opened repositories
pub const RECENT_HEADER: &str = "Recently opened";
/// Section label above the full repository list
pub const ALL_HEADER: &str = "All repositories";

/// One row of the picker: a section separator or a selectable repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickItem {
    /// Non-selectable section separator
    Header { label: String },
    /// Selectable repository
    Entry { repo: String, label: String },
}

impl PickItem {
    pub fn header(label: impl Into<String>) -> Self {
        Self::Header {
            label: label.into(),
        }
    }

    /// An entry labelled with its own identifier.
    pub fn entry(repo: impl Into<String>) -> Self {
        let repo = repo.into();
        Self::Entry {
            label: repo.clone(),
            repo,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Header { label } | Self::Entry { label, .. } => label,
        }
    }

    /// The repository identifier, for selectable rows.
    pub fn repo(&self) -> Option<&str> {
        match self {
            Self::Entry { repo, .. } => Some(repo),
            Self::Header { .. } => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Entry { .. })
    }
}

impl fmt::Display for PickItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Build the sectioned item list for a partition.
///
/// Recent repositories come first under their own header (omitted when
/// there are none), followed by the rest under [`ALL_HEADER`]. Both sections
/// keep the order of the partition.
pub fn build_items(partition: &Partition) -> Vec<PickItem> {
    let mut items = Vec::with_capacity(partition.len() + 2);

    if !partition.recent.is_empty() {
        items.push(PickItem::header(RECENT_HEADER));
        items.extend(partition.recent.iter().map(|repo| PickItem::entry(repo.as_str())));
    }

    items.push(PickItem::header(ALL_HEADER));
    items.extend(partition.remaining.iter().map(|repo| PickItem::entry(repo.as_str())));

    items
}

//! # Column Specifications
//!
//! A [`ColumnSpec`] declares one table column: what to show (a field), how
//! to label it, which side of the cell absorbs padding, and how important
//! the column is when the terminal gets narrow. These are pure data — the
//! list engine interprets them; the config file supplies them.

use serde::{Deserialize, Serialize};

/// Named fields a column can display.
///
/// Not every record variant carries every field; asking a record for a
/// field it lacks is a configuration defect and panics (see
/// [`Record::field`](crate::core::record::Record::field)).
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum FieldId {
    Id,
    Title,
    ChannelTitle,
    SubscriberCount,
    ViewCount,
    VideoCount,
    PublishedAt,
    LikePercentage,
    Duration,
}

/// Which side of a cell receives padding.
///
/// Convention (the pad names the *padded* side, not where content ends up):
/// - `Left`: padding inserted on the left, content flushes right.
/// - `Right`: padding inserted on the right, content flushes left.
/// - `None`: fixed-width column, content right-aligned within the label's
///   width (the numeric convention).
///
/// `Left` and `Right` columns are *stretchy*: leftover terminal width is
/// distributed to them. `None` columns keep their intrinsic width.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pad {
    #[default]
    None,
    Left,
    Right,
}

impl Pad {
    /// Stretchy columns absorb leftover width after fitting.
    pub fn is_stretchy(self) -> bool {
        matches!(self, Pad::Left | Pad::Right)
    }
}

/// Declarative description of one table column.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ColumnSpec {
    /// Header caption; also sets the column's intrinsic width for
    /// non-text fields.
    pub label: String,
    /// Which record field this column displays.
    pub field: FieldId,
    /// Padding side; see [`Pad`].
    #[serde(default)]
    pub pad: Pad,
    /// Higher priority survives width pressure longer. Ties are broken by
    /// declaration order: of two equal-priority columns, the later one is
    /// dropped first.
    pub priority: u32,
}

impl ColumnSpec {
    pub fn new(label: &str, field: FieldId, pad: Pad, priority: u32) -> Self {
        Self {
            label: label.to_string(),
            field,
            pad,
            priority,
        }
    }
}

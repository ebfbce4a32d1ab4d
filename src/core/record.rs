//! # Records
//!
//! The list engine is generic over "things with named, displayable
//! fields". The [`Record`] trait is that capability: given a [`FieldId`],
//! produce a typed [`FieldValue`] which knows how to render itself for a
//! table cell. Concrete record shapes (channels, videos) live in
//! `api::types`; nothing in the engine knows which one it is holding.

use chrono::{DateTime, Utc};

use crate::core::columns::FieldId;

/// A typed field value extracted from a record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free text, clipped by the renderer.
    Text(String),
    /// View/subscriber/video counts.
    Count(u64),
    /// Like ratio in percent; `None` when nobody has rated (guards the
    /// division by zero).
    Percentage(Option<f64>),
    /// Length in whole seconds.
    Duration(u64),
    /// Publication timestamp.
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// Renders the value for a table cell.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Percentage(Some(p)) => format!("{p:.0}%"),
            FieldValue::Percentage(None) => String::new(),
            FieldValue::Duration(secs) => format_duration(*secs),
            FieldValue::Date(d) => d.format("%b %d %Y").to_string(),
        }
    }
}

/// `H:MM:SS` for an hour or longer, `M:SS` below.
fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = secs % 3600 / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// The capability the list engine needs from its rows.
pub trait Record {
    /// Returns the value for `field`.
    ///
    /// # Panics
    ///
    /// Panics if this record variant does not carry `field`. A column spec
    /// naming a missing field is a configuration defect, not a recoverable
    /// runtime condition.
    fn field(&self, field: FieldId) -> FieldValue;

    /// Display string for `field`, as shown in a cell before padding.
    fn display(&self, field: FieldId) -> String {
        self.field(field).display()
    }
}

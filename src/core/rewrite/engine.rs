//! Substitution engine: ordered, multi-form literal replacement.
//!
//! For every mapping (longest stale pattern first) the engine runs one global
//! replacement per [`WrapForm`], each pass feeding the next. There is no
//! boundary detection and no overlap protection: a replacement's output is
//! visible to every later, shorter mapping.

use crate::mapping::{MappingEntry, MappingTable};

/// A textual surrounding a route may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapForm {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl WrapForm {
    pub fn wrap(&self, pattern: &str) -> String {
        format!("{}{}{}", self.prefix, pattern, self.suffix)
    }
}

/// Wrapped forms, in application order.
pub const WRAP_FORMS: &[WrapForm] = &[
    WrapForm {
        prefix: "",
        suffix: "",
    },
    WrapForm {
        prefix: "`",
        suffix: "`",
    },
    WrapForm {
        prefix: "\"",
        suffix: "\"",
    },
    WrapForm {
        prefix: "](",
        suffix: "",
    },
];

/// Apply a single mapping in every wrapped form.
fn apply_entry(content: String, entry: &MappingEntry) -> String {
    WRAP_FORMS.iter().fold(content, |acc, form| {
        let from = form.wrap(&entry.old);
        if acc.contains(&from) {
            acc.replace(&from, &form.wrap(&entry.new))
        } else {
            acc
        }
    })
}

/// Rewrite `content` with every mapping in `table`, longest `old` first.
///
/// Pure function of its inputs. Empty content or an empty table yields an
/// identical copy.
pub fn apply(content: &str, table: &MappingTable) -> String {
    table
        .by_length_desc()
        .into_iter()
        .fold(content.to_string(), apply_entry)
}

//! Read-only access to the embedded per-target output sheets.

use crate::db;
use crate::model::target::Target;

pub use crate::db::{Field, FieldValues, Pattern, TargetSheet, TokenMap};

/// Looks up the sheet of `target`; Bendix output has none.
pub fn get(target: Target) -> Option<&'static TargetSheet> {
    db::get_sheet(target)
}

/// Short human-readable description of what `target` produces.
pub fn describe(target: Target) -> &'static str {
    match get(target) {
        Some(sheet) => sheet.description.as_str(),
        None => match target {
            Target::Bendix => "Bendix helix endpoint file",
            _ => "unknown output",
        },
    }
}

//! Internal database of per-target output sheets.
//!
//! Each supported text target is described by an embedded TOML sheet holding its header
//! lines, body patterns, boolean token map, and optional footer. The sheets are parsed and
//! validated once on first access.

mod loader;
mod pattern;
mod schema;
mod store;

use crate::model::target::Target;

pub use pattern::{Field, FieldValues, Pattern};
pub use store::{TargetSheet, TokenMap};

/// Retrieves the sheet describing `target`.
///
/// # Returns
///
/// `None` for targets written by dedicated code rather than a sheet (Bendix).
pub fn get_sheet(target: Target) -> Option<&'static TargetSheet> {
    store::get_store().sheets_by_target.get(&target)
}

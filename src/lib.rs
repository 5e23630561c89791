//! # domdef
//!
//! **domdef** turns a plain-text list of named residue ranges ("domains") of a biomolecular structure into ready-to-source selection syntax for VMD, PyMOL, and CHARMM, a Bendix helix file, and an XVG block graph of the domains along the sequence.
//!
//! ## Features
//!
//! - **Simple input** – One `name start end` line per domain, `@name expr` lines for compound selections built from `|`, `&`, `!` and parentheses, `#` comments.
//! - **Residue offsets** – A global offset maps crystal numbering onto topology numbering; shifted resids are clamped at 1.
//! - **Data-driven targets** – Every text target is an embedded TOML sheet of header lines, body patterns, and boolean tokens consumed by one generic writer under `io`.
//! - **Faithful ordering** – Domains are written in definition order, including repeated definitions, so downstream scripts see exactly what the input declared.

mod db;
mod model;

pub mod io;
pub mod ops;
pub mod targets;

pub use model::compound::{Compound, CompoundTable};
pub use model::definition::DomainDefinition;
pub use model::domain::{DomainRange, DomainTable};
pub use model::target::Target;

use crate::io::error::Error;
use crate::io::options::WriteOptions;
use crate::io::selection::writer::write_target;
use crate::model::{definition::DomainDefinition, target::Target};
use std::io::Write;

/// Writes `definition` back in the domain-definition input format.
///
/// Residue numbers are written with the offset already applied, so reading the result
/// with offset 0 reproduces the same domains and compounds.
pub fn write<W: Write>(writer: W, definition: &DomainDefinition) -> Result<(), Error> {
    write_target(writer, definition, Target::Domdef, &WriteOptions::default())
}

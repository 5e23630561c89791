mod bendix;
mod context;
mod domdef;
mod error;
mod options;
mod selection;
mod xvg;

use crate::model::{definition::DomainDefinition, target::Target};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

pub use domdef::reader::read as read_domdef;
pub use domdef::writer::write as write_domdef;

pub use selection::writer::{write_charmm, write_pymol, write_vmd};

pub use bendix::writer::write as write_bendix;

pub use xvg::writer::write as write_xvg;

pub use context::IoContext;

pub use options::{DEFAULT_COLOR_ID, DEFAULT_MATERIAL, DEFAULT_REPRESENTATION, WriteOptions};

pub use error::Error;

/// Reads a domain-definition file, adding `offset` to every simple residue number.
pub fn load(path: &Path, offset: i32) -> Result<DomainDefinition, Error> {
    let file = File::open(path).map_err(|e| Error::from_io(e, Some(path.to_path_buf())))?;
    let context = IoContext::new(offset).with_source(path);
    read_domdef(BufReader::new(file), &context)
}

/// Writes `definition` in the format of `target`.
pub fn write_target<W: Write>(
    writer: W,
    definition: &DomainDefinition,
    target: Target,
    options: &WriteOptions,
) -> Result<(), Error> {
    match target {
        Target::Domdef => write_domdef(writer, definition),
        Target::Vmd => write_vmd(writer, definition, options),
        Target::Pymol => write_pymol(writer, definition),
        Target::Charmm => write_charmm(writer, definition),
        Target::Bendix => write_bendix(writer, definition),
        Target::Xvg => write_xvg(writer, definition),
    }
}

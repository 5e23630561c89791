use crate::io::error::Error;
use crate::model::definition::DomainDefinition;
use std::io::Write;

/// Writes the Bendix helix file: every start and end resid on one line.
pub fn write<W: Write>(mut writer: W, definition: &DomainDefinition) -> Result<(), Error> {
    let resids: Vec<String> = definition
        .iter_domains()
        .flat_map(|(_, range)| [range.start.to_string(), range.end.to_string()])
        .collect();

    writeln!(writer, "{}", resids.join(" ")).map_err(|e| Error::from_io(e, None))?;
    writer.flush().map_err(|e| Error::from_io(e, None))
}

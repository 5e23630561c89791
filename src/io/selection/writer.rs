use crate::db::{self, Field, FieldValues, TargetSheet};
use crate::io::error::Error;
use crate::io::options::WriteOptions;
use crate::model::{definition::DomainDefinition, target::Target};
use crate::ops::{self, Transform};
use std::io::Write;

pub fn write_vmd<W: Write>(
    writer: W,
    definition: &DomainDefinition,
    options: &WriteOptions,
) -> Result<(), Error> {
    write_target(writer, definition, Target::Vmd, options)
}

pub fn write_pymol<W: Write>(writer: W, definition: &DomainDefinition) -> Result<(), Error> {
    write_target(writer, definition, Target::Pymol, &WriteOptions::default())
}

pub fn write_charmm<W: Write>(writer: W, definition: &DomainDefinition) -> Result<(), Error> {
    write_target(writer, definition, Target::Charmm, &WriteOptions::default())
}

/// Writes `definition` using the sheet of `target`.
///
/// Output is the header, one line per entry of the domain order, the compound marker,
/// one line per compound, and the sheet footer if it has one.
pub fn write_target<W: Write>(
    writer: W,
    definition: &DomainDefinition,
    target: Target,
    options: &WriteOptions,
) -> Result<(), Error> {
    let sheet = db::get_sheet(target)
        .filter(|sheet| sheet.domain.is_some() && sheet.compound.is_some())
        .ok_or_else(|| ops::Error::unknown_target(target.name()))?;

    let mut ctx = WriterContext::new(writer, sheet);

    ctx.write_header(definition)?;

    ctx.write_domains(definition)?;

    ctx.write_compounds(definition)?;

    ctx.write_footer(definition, options)?;

    ctx.writer.flush().map_err(|e| Error::from_io(e, None))
}

struct WriterContext<'s, W> {
    writer: W,
    sheet: &'s TargetSheet,
}

impl<'s, W: Write> WriterContext<'s, W> {
    fn new(writer: W, sheet: &'s TargetSheet) -> Self {
        Self { writer, sheet }
    }

    fn write_header(&mut self, definition: &DomainDefinition) -> Result<(), Error> {
        let values = FieldValues::new()
            .with(Field::Input, definition.source_label())
            .with(Field::Offset, definition.offset())
            .with(Field::Comment, &self.sheet.comment);

        for line in &self.sheet.header {
            writeln!(self.writer, "{}", line.render(&values))
                .map_err(|e| Error::from_io(e, None))?;
        }
        Ok(())
    }

    fn write_domains(&mut self, definition: &DomainDefinition) -> Result<(), Error> {
        let Some(pattern) = &self.sheet.domain else {
            return Ok(());
        };

        for (name, range) in definition.iter_domains() {
            let values = FieldValues::new()
                .with(Field::Name, name)
                .with(Field::Start, range.start)
                .with(Field::End, range.end)
                .with(Field::Comment, &self.sheet.comment);
            writeln!(self.writer, "{}", pattern.render(&values))
                .map_err(|e| Error::from_io(e, None))?;
        }
        Ok(())
    }

    fn write_compounds(&mut self, definition: &DomainDefinition) -> Result<(), Error> {
        let Some(pattern) = &self.sheet.compound else {
            return Ok(());
        };

        writeln!(self.writer, "{} compound statements", self.sheet.comment)
            .map_err(|e| Error::from_io(e, None))?;

        for compound in definition.compounds() {
            let expr = match &self.sheet.tokens {
                Some(tokens) => Transform::apply_tokens(&compound.definition, tokens),
                None => compound.definition.clone(),
            };
            let values = FieldValues::new()
                .with(Field::Name, &compound.name)
                .with(Field::Definition, expr)
                .with(Field::Comment, &self.sheet.comment);
            writeln!(self.writer, "{}", pattern.render(&values))
                .map_err(|e| Error::from_io(e, None))?;
        }
        Ok(())
    }

    fn write_footer(
        &mut self,
        definition: &DomainDefinition,
        options: &WriteOptions,
    ) -> Result<(), Error> {
        let Some(pattern) = &self.sheet.footer else {
            return Ok(());
        };

        let values = FieldValues::new()
            .with(Field::Color, options.color_id)
            .with(Field::Material, &options.material)
            .with(Field::Representation, &options.representation)
            .with(Field::Selections, definition.domain_order().join(" "))
            .with(Field::Comment, &self.sheet.comment);

        write!(self.writer, "{}", pattern.render(&values)).map_err(|e| Error::from_io(e, None))
    }
}

use crate::io::context::IoContext;
use crate::io::error::Error;
use crate::model::{
    compound::CompoundTable,
    definition::DomainDefinition,
    domain::{DomainRange, DomainTable},
};
use crate::ops::Transform;
use std::io::BufRead;

const COMMENT_MARKER: char = '#';
const COMPOUND_MARKER: char = '@';

pub fn read<R: BufRead>(reader: R, context: &IoContext) -> Result<DomainDefinition, Error> {
    let mut domains = DomainTable::new();
    let mut compounds = CompoundTable::new();

    let mut line_num = 0;

    for line in reader.lines() {
        line_num += 1;
        let line = line.map_err(|e| Error::from_io(e, context.source_buf()))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        if line.starts_with(COMPOUND_MARKER) {
            parse_compound_line(line, line_num, context, &mut compounds)?;
        } else {
            parse_domain_line(line, line_num, context, &mut domains)?;
        }
    }

    log::debug!(
        "read {} domains ({} definitions) and {} compounds from {}",
        domains.len(),
        domains.order().len(),
        compounds.len(),
        source_desc(context)
    );

    DomainDefinition::new(
        domains,
        compounds,
        context.source_buf(),
        context.offset(),
    )
    .ok_or_else(|| Error::empty_model(context.source_buf()))
}

fn parse_compound_line(
    line: &str,
    line_num: usize,
    context: &IoContext,
    compounds: &mut CompoundTable,
) -> Result<(), Error> {
    let mut fields = line.split_whitespace();
    let name = fields
        .next()
        .map(|head| &head[COMPOUND_MARKER.len_utf8()..])
        .unwrap_or_default();

    if name.is_empty() {
        return Err(Error::format(
            context.source_buf(),
            line_num,
            format!("compound name missing after '{}'", COMPOUND_MARKER),
        ));
    }

    let definition = fields.collect::<Vec<_>>().join(" ");

    if compounds.insert(name, &definition).is_some() {
        log::debug!(
            "compound '{}' redefined on line {}; keeping its original position",
            name,
            line_num
        );
    }

    Ok(())
}

fn parse_domain_line(
    line: &str,
    line_num: usize,
    context: &IoContext,
    domains: &mut DomainTable,
) -> Result<(), Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let [name, start, end] = fields.as_slice() else {
        return Err(Error::format(
            context.source_buf(),
            line_num,
            format!(
                "expected 3 fields (name start end), found {}",
                fields.len()
            ),
        ));
    };

    let start = parse_resid(start, "start", line_num, context)?;
    let end = parse_resid(end, "end", line_num, context)?;

    let range = DomainRange::new(
        Transform::offset_resid(start, context.offset()),
        Transform::offset_resid(end, context.offset()),
    );

    if let Some(previous) = domains.insert(name, range) {
        log::warn!(
            "domain '{}' redefined on line {} ({} -> {}); it will be written once per definition",
            name,
            line_num,
            previous,
            range
        );
    }

    Ok(())
}

fn parse_resid(
    value: &str,
    label: &str,
    line_num: usize,
    context: &IoContext,
) -> Result<i32, Error> {
    value.parse::<i32>().map_err(|_| {
        Error::format(
            context.source_buf(),
            line_num,
            format!("invalid {} residue number '{}'", label, value),
        )
    })
}

fn source_desc(context: &IoContext) -> String {
    match context.source() {
        Some(path) => format!("'{}'", path.display()),
        None => "stream".to_string(),
    }
}

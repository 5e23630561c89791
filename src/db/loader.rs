use super::pattern::{Field, Pattern};
use super::schema::TargetSheetFile;
use super::store::{DataStore, TargetSheet, TokenMap};
use std::collections::HashMap;

const HEADER_FIELDS: &[Field] = &[Field::Input, Field::Offset, Field::Comment];
const DOMAIN_FIELDS: &[Field] = &[Field::Name, Field::Start, Field::End, Field::Comment];
const COMPOUND_FIELDS: &[Field] = &[Field::Name, Field::Definition, Field::Comment];
const FOOTER_FIELDS: &[Field] = &[
    Field::Color,
    Field::Material,
    Field::Representation,
    Field::Selections,
    Field::Comment,
];

pub fn load_all_sheets() -> DataStore {
    let mut sheets_by_target = HashMap::new();

    macro_rules! load_sheet {
        ($path:literal) => {
            let content = include_str!(concat!("../../templates/", $path));
            let schema: TargetSheetFile = toml::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse target sheet '{}': {}", $path, e));

            let sheet = build_sheet($path, schema);
            let target = sheet.target;

            if sheets_by_target.insert(target, sheet).is_some() {
                panic!("Duplicate target sheet found: {}", target);
            }
        };
    }

    load_sheet!("domdef.toml");
    load_sheet!("vmd.toml");
    load_sheet!("pymol.toml");
    load_sheet!("charmm.toml");
    load_sheet!("xvg.toml");

    DataStore { sheets_by_target }
}

fn build_sheet(path: &str, schema: TargetSheetFile) -> TargetSheet {
    let header = schema
        .header
        .iter()
        .map(|line| compile(path, "header", line, HEADER_FIELDS))
        .collect();

    let (domain, compound) = match &schema.body {
        Some(body) => (
            Some(compile(path, "body.domain", &body.domain, DOMAIN_FIELDS)),
            Some(compile(path, "body.compound", &body.compound, COMPOUND_FIELDS)),
        ),
        None => (None, None),
    };

    let footer = schema
        .footer
        .as_deref()
        .map(|footer| compile(path, "footer", footer, FOOTER_FIELDS));

    let tokens = schema.tokens.map(|tokens| TokenMap {
        or: tokens.or,
        and: tokens.and,
        not: tokens.not,
    });

    TargetSheet {
        target: schema.info.target,
        description: schema.info.description,
        comment: schema.info.comment,
        header,
        domain,
        compound,
        tokens,
        footer,
    }
}

fn compile(path: &str, role: &str, source: &str, allowed: &[Field]) -> Pattern {
    let pattern = Pattern::parse(source)
        .unwrap_or_else(|e| panic!("Invalid {} pattern in '{}': {}", role, path, e));

    if let Some(field) = pattern.fields().find(|field| !allowed.contains(field)) {
        panic!(
            "Placeholder '{{{}}}' is not available in {} patterns of '{}'",
            field, role, path
        );
    }

    pattern
}

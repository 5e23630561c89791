//! Line patterns used by the embedded target sheets.
//!
//! A pattern is literal text with `{field}` placeholders. A placeholder may carry a
//! minimum width with an alignment, `{name:<8}` (left) or `{start:>3}` (right). Literal
//! braces are written as `{{` and `}}`.

use std::fmt;
use std::str::FromStr;

/// Values a placeholder can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Start,
    End,
    Definition,
    Input,
    Offset,
    Comment,
    Color,
    Material,
    Representation,
    Selections,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Start => "start",
            Field::End => "end",
            Field::Definition => "definition",
            Field::Input => "input",
            Field::Offset => "offset",
            Field::Comment => "comment",
            Field::Color => "color",
            Field::Material => "material",
            Field::Representation => "representation",
            Field::Selections => "selections",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "start" => Ok(Field::Start),
            "end" => Ok(Field::End),
            "definition" => Ok(Field::Definition),
            "input" => Ok(Field::Input),
            "offset" => Ok(Field::Offset),
            "comment" => Ok(Field::Comment),
            "color" => Ok(Field::Color),
            "material" => Ok(Field::Material),
            "representation" => Ok(Field::Representation),
            "selections" => Ok(Field::Selections),
            _ => Err(format!("unknown placeholder '{{{}}}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder {
        field: Field,
        align: Align,
        width: usize,
    },
}

/// Parsed line pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(source: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        body.push(inner);
                    }
                    if !closed {
                        return Err(format!("unterminated placeholder in '{}'", source));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(parse_placeholder(&body)?);
                }
                '}' => return Err(format!("unmatched '}}' in '{}'", source)),
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Fields referenced by the pattern, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { field, .. } => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the pattern; fields absent from `values` render as empty text.
    pub fn render(&self, values: &FieldValues) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder {
                    field,
                    align,
                    width,
                } => {
                    let value = values.get(*field).unwrap_or("");
                    match align {
                        Align::Left => out.push_str(&format!("{:<width$}", value)),
                        Align::Right => out.push_str(&format!("{:>width$}", value)),
                    }
                }
            }
        }
        out
    }
}

fn parse_placeholder(body: &str) -> Result<Segment, String> {
    let (name, format) = match body.split_once(':') {
        Some((name, format)) => (name, Some(format)),
        None => (body, None),
    };
    let field = name.trim().parse::<Field>()?;

    let (align, width) = match format {
        None => (Align::Left, 0),
        Some(format) => {
            let align = match format.chars().next() {
                Some('<') => Align::Left,
                Some('>') => Align::Right,
                _ => return Err(format!("placeholder '{{{}}}' needs '<' or '>'", body)),
            };
            let width = format[1..]
                .parse::<usize>()
                .map_err(|_| format!("invalid width in placeholder '{{{}}}'", body))?;
            (align, width)
        }
    };

    Ok(Segment::Placeholder {
        field,
        align,
        width,
    })
}

/// Field values supplied to [`Pattern::render`].
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: Vec<(Field, String)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl ToString) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl ToString) {
        let value = value.to_string();
        match self.values.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.values.push((field, value)),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }
}

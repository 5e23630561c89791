use crate::db::{self, Field, FieldValues};
use crate::io::error::Error;
use crate::model::{definition::DomainDefinition, target::Target};
use crate::ops;
use std::io::Write;

/// Heights of the upper and lower block outlines.
const PASSES: [f64; 2] = [0.5, -0.5];
const ZERO: f64 = 0.0;

/// Writes a step-function graph with one rectangle per domain.
///
/// The graph has two data sets, separated by a `&` line, drawing the blocks above and
/// below the axis. Each set assumes the domains are listed by increasing start residue and
/// stops at the first domain that starts before its predecessor.
pub fn write<W: Write>(writer: W, definition: &DomainDefinition) -> Result<(), Error> {
    let mut ctx = WriterContext::new(writer);

    ctx.write_header(definition)?;

    for (index, yval) in PASSES.into_iter().enumerate() {
        if index > 0 {
            ctx.write_separator()?;
        }
        ctx.write_pass(definition, yval)?;
    }

    ctx.writer.flush().map_err(|e| Error::from_io(e, None))
}

struct WriterContext<W> {
    writer: W,
}

impl<W: Write> WriterContext<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, definition: &DomainDefinition) -> Result<(), Error> {
        let sheet = db::get_sheet(Target::Xvg)
            .ok_or_else(|| ops::Error::unknown_target(Target::Xvg.name()))?;
        let values = FieldValues::new()
            .with(Field::Input, definition.source_label())
            .with(Field::Offset, definition.offset())
            .with(Field::Comment, &sheet.comment);

        for line in &sheet.header {
            writeln!(self.writer, "{}", line.render(&values))
                .map_err(|e| Error::from_io(e, None))?;
        }
        Ok(())
    }

    fn write_pass(&mut self, definition: &DomainDefinition, yval: f64) -> Result<(), Error> {
        let mut last_start = definition.first();
        self.write_point(definition.first(), ZERO)?;

        for (name, range) in definition.iter_domains() {
            if range.start < last_start {
                log::debug!(
                    "xvg pass y={} stops at domain '{}': start {} precedes {}",
                    yval,
                    name,
                    range.start,
                    last_start
                );
                break;
            }
            self.write_point(range.start, ZERO)?;
            self.write_point(range.start, yval)?;
            self.write_point(range.end, yval)?;
            self.write_point(range.end, ZERO)?;
            last_start = range.start;
        }

        self.write_point(definition.last(), ZERO)
    }

    fn write_point(&mut self, resid: i32, y: f64) -> Result<(), Error> {
        writeln!(self.writer, "{:5}  {}", resid, y).map_err(|e| Error::from_io(e, None))
    }

    fn write_separator(&mut self) -> Result<(), Error> {
        writeln!(self.writer, "&").map_err(|e| Error::from_io(e, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::context::IoContext;
    use crate::io::domdef::reader::read;
    use std::io::Cursor;

    fn write_str(content: &str) -> String {
        let definition = read(
            Cursor::new(content),
            &IoContext::new(0).with_source("ss.dom"),
        )
        .expect("valid definition");
        let mut buffer = Vec::new();
        write(&mut buffer, &definition).expect("writer should succeed");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[test]
    fn increasing_starts_visit_every_domain_in_both_passes() {
        let output = write_str("A 1 10\nB 20 30\n");
        let expected = "\
# $Id$
# input = 'ss.dom'
# offset = 0
    1  0
    1  0
    1  0.5
   10  0.5
   10  0
   20  0
   20  0.5
   30  0.5
   30  0
   30  0
&
    1  0
    1  0
    1  -0.5
   10  -0.5
   10  0
   20  0
   20  -0.5
   30  -0.5
   30  0
   30  0
";
        assert_eq!(output, expected);
    }

    #[test]
    fn decreasing_start_ends_each_pass_early() {
        let output = write_str("A 10 20\nB 30 40\nC 25 28\n");
        let (upper, lower) = output.split_once("&\n").expect("two data sets");

        let upper_points: Vec<_> = upper.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            upper_points,
            [
                "   10  0",
                "   10  0",
                "   10  0.5",
                "   20  0.5",
                "   20  0",
                "   30  0",
                "   30  0.5",
                "   40  0.5",
                "   40  0",
                "   40  0",
            ]
        );
        assert!(!upper.contains("   25  "));

        let lower_points: Vec<_> = lower.lines().collect();
        assert_eq!(lower_points.len(), 10);
        assert_eq!(lower_points[2], "   10  -0.5");
        assert_eq!(lower_points[9], "   40  0");
        assert!(!lower.contains("   28  "));
    }

    #[test]
    fn equal_starts_do_not_stop_the_walk() {
        let output = write_str("A 5 9\nB 5 12\n");
        let (upper, _) = output.split_once("&\n").expect("two data sets");
        assert!(upper.contains("   12  0.5\n"));
    }
}

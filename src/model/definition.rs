//! The loaded domain-definition model shared by every output writer.
//!
//! A `DomainDefinition` bundles the domain table, the compound table, the offset that was
//! applied while reading, and the global residue extrema. It is built once by the reader
//! and only read afterwards.

use super::compound::CompoundTable;
use super::domain::{DomainRange, DomainTable};
use std::path::{Path, PathBuf};

/// Immutable set of domains and compound selections read from one source.
///
/// The residue numbers stored in the domain table already carry the offset. `first` and
/// `last` are the smallest and largest of those numbers and are always present because a
/// definition without domains cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainDefinition {
    domains: DomainTable,
    compounds: CompoundTable,
    source: Option<PathBuf>,
    offset: i32,
    first: i32,
    last: i32,
}

impl DomainDefinition {
    /// Assembles a definition and computes its residue extrema.
    ///
    /// # Arguments
    ///
    /// * `domains` - Domain table with offset-adjusted residue numbers.
    /// * `compounds` - Compound selections in definition order.
    /// * `source` - Path the data was read from, or `None` for an anonymous stream.
    /// * `offset` - Offset that was applied to the residue numbers.
    ///
    /// # Returns
    ///
    /// `None` when `domains` is empty, since the extrema are undefined.
    pub fn new(
        domains: DomainTable,
        compounds: CompoundTable,
        source: Option<PathBuf>,
        offset: i32,
    ) -> Option<Self> {
        let (first, last) = domains.extrema()?;
        Some(Self {
            domains,
            compounds,
            source,
            offset,
            first,
            last,
        })
    }

    pub fn domains(&self) -> &DomainTable {
        &self.domains
    }

    pub fn compounds(&self) -> &CompoundTable {
        &self.compounds
    }

    /// Domains in definition order, redefinitions included.
    pub fn iter_domains(&self) -> impl Iterator<Item = (&str, DomainRange)> + '_ {
        self.domains.iter_ordered()
    }

    pub fn domain_order(&self) -> &[String] {
        self.domains.order()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Human-readable name of the input used in output headers.
    pub fn source_label(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "<stream>".to_string(),
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Lowest residue number over all domains.
    pub fn first(&self) -> i32 {
        self.first
    }

    /// Highest residue number over all domains.
    pub fn last(&self) -> i32 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_computes_extrema() {
        let mut domains = DomainTable::new();
        domains.insert("NMP", DomainRange::new(30, 59));
        domains.insert("LID", DomainRange::new(122, 159));

        let definition =
            DomainDefinition::new(domains, CompoundTable::new(), Some("adk.txt".into()), 0)
                .expect("domains present");

        assert_eq!(definition.first(), 30);
        assert_eq!(definition.last(), 159);
        assert_eq!(definition.source_label(), "adk.txt");
        assert_eq!(definition.domain_order(), ["NMP", "LID"]);
    }

    #[test]
    fn new_rejects_empty_domain_table() {
        let mut compounds = CompoundTable::new();
        compounds.insert("ALL", "A | B");
        assert!(DomainDefinition::new(DomainTable::new(), compounds, None, 0).is_none());
    }

    #[test]
    fn anonymous_source_has_stream_label() {
        let mut domains = DomainTable::new();
        domains.insert("A", DomainRange::new(1, 2));
        let definition =
            DomainDefinition::new(domains, CompoundTable::new(), None, -3).expect("domains");
        assert_eq!(definition.source_label(), "<stream>");
        assert_eq!(definition.offset(), -3);
        assert!(definition.source().is_none());
    }
}

use std::collections::HashMap;
use std::fmt;

/// Inclusive residue range covered by one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainRange {
    pub start: i32,
    pub end: i32,
}

impl DomainRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for DomainRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Named residue ranges plus the order in which they were defined.
///
/// The keyed table keeps the most recent range for a name while the order
/// sequence is append-only, so a redefined name is listed once per definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainTable {
    ranges: HashMap<String, DomainRange>,
    order: Vec<String>,
}

impl DomainTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `range` under `name` and appends `name` to the order sequence.
    ///
    /// Returns the range previously stored under the same name, if any.
    pub fn insert(&mut self, name: &str, range: DomainRange) -> Option<DomainRange> {
        self.order.push(name.to_string());
        self.ranges.insert(name.to_string(), range)
    }

    pub fn get(&self, name: &str) -> Option<DomainRange> {
        self.ranges.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ranges.contains_key(name)
    }

    /// Number of distinct domain names.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Names in definition order, duplicates included.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Walks the order sequence, pairing each entry with its current range.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&str, DomainRange)> + '_ {
        self.order.iter().filter_map(move |name| {
            self.ranges
                .get(name)
                .map(|range| (name.as_str(), *range))
        })
    }

    /// Smallest and largest residue number across all stored ranges.
    pub fn extrema(&self) -> Option<(i32, i32)> {
        self.ranges
            .values()
            .flat_map(|range| [range.start, range.end])
            .fold(None, |acc, resid| match acc {
                None => Some((resid, resid)),
                Some((lo, hi)) => Some((lo.min(resid), hi.max(resid))),
            })
    }
}

/// A named boolean combination of domain names, kept as unparsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub name: String,
    pub definition: String,
}

impl Compound {
    pub fn new(name: &str, definition: &str) -> Self {
        Self {
            name: name.to_string(),
            definition: definition.to_string(),
        }
    }
}

/// Compound selections in first-definition order.
///
/// Redefining a name replaces its definition without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundTable {
    compounds: Vec<Compound>,
}

impl CompoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced definition when `name` was already present.
    pub fn insert(&mut self, name: &str, definition: &str) -> Option<String> {
        match self.compounds.iter_mut().find(|c| c.name == name) {
            Some(existing) => Some(std::mem::replace(
                &mut existing.definition,
                definition.to_string(),
            )),
            None => {
                self.compounds.push(Compound::new(name, definition));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.compounds
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.definition.as_str())
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Compound> {
        self.compounds.iter()
    }
}

impl<'a> IntoIterator for &'a CompoundTable {
    type Item = &'a Compound;
    type IntoIter = std::slice::Iter<'a, Compound>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

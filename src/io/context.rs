use std::path::{Path, PathBuf};

/// Settings shared by a single read of a domain-definition source.
#[derive(Debug, Clone, Default)]
pub struct IoContext {
    offset: i32,
    source: Option<PathBuf>,
}

impl IoContext {
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn new(offset: i32) -> Self {
        Self {
            offset,
            source: None,
        }
    }

    /// Records the path the data comes from, used in diagnostics and output headers.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Offset added to every simple residue number.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub(crate) fn source_buf(&self) -> Option<PathBuf> {
        self.source.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_has_no_offset_or_source() {
        let ctx = IoContext::new_default();
        assert_eq!(ctx.offset(), 0);
        assert!(ctx.source().is_none());
    }

    #[test]
    fn with_source_keeps_offset() {
        let ctx = IoContext::new(-12).with_source("adk.dom");
        assert_eq!(ctx.offset(), -12);
        assert_eq!(ctx.source(), Some(Path::new("adk.dom")));
    }
}

use super::loader;
use super::pattern::Pattern;
use crate::model::target::Target;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Replacement text for the three boolean operator characters of a compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMap {
    pub or: String,
    pub and: String,
    pub not: String,
}

/// Parsed output configuration of one target.
#[derive(Debug, Clone)]
pub struct TargetSheet {
    pub target: Target,
    pub description: String,
    pub comment: String,
    pub header: Vec<Pattern>,
    pub domain: Option<Pattern>,
    pub compound: Option<Pattern>,
    pub tokens: Option<TokenMap>,
    pub footer: Option<Pattern>,
}

pub struct DataStore {
    pub sheets_by_target: HashMap<Target, TargetSheet>,
}

static STORE: OnceLock<DataStore> = OnceLock::new();

pub fn get_store() -> &'static DataStore {
    STORE.get_or_init(loader::load_all_sheets)
}

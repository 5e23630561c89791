use crate::model::target::Target;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TargetSheetFile {
    pub info: SheetInfo,
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub body: Option<SheetBody>,
    #[serde(default)]
    pub tokens: Option<SheetTokens>,
    #[serde(default)]
    pub footer: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SheetInfo {
    pub target: Target,
    pub description: String,
    pub comment: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SheetBody {
    pub domain: String,
    pub compound: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SheetTokens {
    pub or: String,
    pub and: String,
    pub not: String,
}

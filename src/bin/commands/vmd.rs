use clap::Args;

use domdef::io::{DEFAULT_COLOR_ID, DEFAULT_MATERIAL, DEFAULT_REPRESENTATION, WriteOptions};

/// Defaults baked into the `addrep_domains` procedure of the VMD script.
#[derive(Debug, Args)]
pub struct VmdArgs {
    /// VMD color index used by addrep_domains.
    #[arg(long = "vmd-color", value_name = "ID", default_value_t = DEFAULT_COLOR_ID)]
    pub color_id: u32,
    /// VMD material used by addrep_domains.
    #[arg(long = "vmd-material", value_name = "NAME", default_value = DEFAULT_MATERIAL)]
    pub material: String,
    /// VMD representation (drawing method) used by addrep_domains.
    #[arg(long = "vmd-rep", value_name = "NAME", default_value = DEFAULT_REPRESENTATION)]
    pub representation: String,
}

impl From<&VmdArgs> for WriteOptions {
    fn from(value: &VmdArgs) -> Self {
        WriteOptions {
            color_id: value.color_id,
            material: value.material.clone(),
            representation: value.representation.clone(),
        }
    }
}

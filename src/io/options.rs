pub const DEFAULT_COLOR_ID: u32 = 6;
pub const DEFAULT_MATERIAL: &str = "AOChalky";
pub const DEFAULT_REPRESENTATION: &str = "cartoon";

/// Parameters of the `addrep_domains` helper emitted into VMD scripts.
///
/// The values become the default arguments of the Tcl procedure, so they can still be
/// overridden when the procedure is called inside VMD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// VMD color index (6 is silver).
    pub color_id: u32,
    pub material: String,
    pub representation: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            color_id: DEFAULT_COLOR_ID,
            material: DEFAULT_MATERIAL.to_string(),
            representation: DEFAULT_REPRESENTATION.to_string(),
        }
    }
}

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Downstream formats a domain definition can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The domain-definition input format itself.
    Domdef,
    /// VMD Tcl `atomselect` macros.
    Vmd,
    /// PyMOL `select` commands.
    Pymol,
    /// CHARMM `define` stream.
    Charmm,
    /// Bendix helix endpoint list.
    Bendix,
    /// Grace XVG block graph of the domains.
    Xvg,
}

impl Target {
    pub const ALL: [Target; 6] = [
        Target::Domdef,
        Target::Vmd,
        Target::Pymol,
        Target::Charmm,
        Target::Bendix,
        Target::Xvg,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Target::Domdef => "domdef",
            Target::Vmd => "vmd",
            Target::Pymol => "pymol",
            Target::Charmm => "charmm",
            Target::Bendix => "bendix",
            Target::Xvg => "xvg",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|target| target.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid target: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for target in Target::ALL {
            assert_eq!(target.name().parse::<Target>(), Ok(target));
        }
        assert_eq!("PyMOL".parse::<Target>(), Ok(Target::Pymol));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("gromacs".parse::<Target>().is_err());
    }
}

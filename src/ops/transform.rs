//! Residue-number and compound-expression transforms.
//!
//! Residue numbers read from simple domain lines are shifted by a global offset and clamped
//! so they never drop below 1. Compound expressions are rewritten per target by replacing
//! the `|`, `&`, and `!` characters with that target's keyword tokens.

use super::error::Error;
use crate::db::{self, TokenMap};
use crate::model::target::Target;

/// Lowest residue number a transformed resid can take.
pub const MIN_RESID: i32 = 1;

/// Collection of the pure transforms applied while reading and writing definitions.
pub struct Transform;

impl Transform {
    /// Applies `offset` to `resid`, clamping the result to [`MIN_RESID`].
    ///
    /// The addition saturates, so extreme offsets cannot wrap around.
    pub fn offset_resid(resid: i32, offset: i32) -> i32 {
        resid.saturating_add(offset).max(MIN_RESID)
    }

    /// Rewrites the boolean operators of a compound expression for `target`.
    ///
    /// Substitution is literal and character based: every `|`, `&`, and `!` is replaced,
    /// wherever it occurs, and all other characters are copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTarget`] when `target` has no token table.
    pub fn substitute_tokens(expr: &str, target: Target) -> Result<String, Error> {
        let tokens = db::get_sheet(target)
            .and_then(|sheet| sheet.tokens.as_ref())
            .ok_or_else(|| Error::unknown_target(target.name()))?;
        Ok(Self::apply_tokens(expr, tokens))
    }

    /// Same as [`Transform::substitute_tokens`] with the target given by name.
    pub fn substitute_tokens_named(expr: &str, target: &str) -> Result<String, Error> {
        let target = target
            .parse::<Target>()
            .map_err(|_| Error::unknown_target(target))?;
        Self::substitute_tokens(expr, target)
    }

    pub(crate) fn apply_tokens(expr: &str, tokens: &TokenMap) -> String {
        let mut out = String::with_capacity(expr.len() * 2);
        for c in expr.chars() {
            match c {
                '|' => out.push_str(&tokens.or),
                '&' => out.push_str(&tokens.and),
                '!' => out.push_str(&tokens.not),
                other => out.push(other),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_resid_adds_offset() {
        assert_eq!(Transform::offset_resid(5, 3), 8);
        assert_eq!(Transform::offset_resid(40, -10), 30);
        assert_eq!(Transform::offset_resid(12, 0), 12);
    }

    #[test]
    fn offset_resid_clamps_to_one() {
        assert_eq!(Transform::offset_resid(1, -100), 1);
        assert_eq!(Transform::offset_resid(10, -10), 1);
        assert_eq!(Transform::offset_resid(-4, 0), 1);
        assert_eq!(Transform::offset_resid(i32::MIN, i32::MIN), 1);
    }

    #[test]
    fn offset_resid_saturates_at_upper_bound() {
        assert_eq!(Transform::offset_resid(i32::MAX, 10), i32::MAX);
    }

    #[test]
    fn vmd_and_pymol_use_plain_keywords() {
        assert_eq!(
            Transform::substitute_tokens("A & B", Target::Vmd).unwrap(),
            "A  and  B"
        );
        assert_eq!(
            Transform::substitute_tokens("(A|B) & !C", Target::Pymol).unwrap(),
            "(A or B)  and   not C"
        );
    }

    #[test]
    fn charmm_uses_dotted_keywords() {
        assert_eq!(
            Transform::substitute_tokens("A & B", Target::Charmm).unwrap(),
            "A  .and.  B"
        );
        assert_eq!(
            Transform::substitute_tokens("A|!B", Target::Charmm).unwrap(),
            "A .or.  .not. B"
        );
    }

    #[test]
    fn substitution_is_literal_inside_names() {
        assert_eq!(
            Transform::substitute_tokens("WOW!", Target::Vmd).unwrap(),
            "WOW not "
        );
    }

    #[test]
    fn targets_without_token_table_are_unknown() {
        for target in [Target::Domdef, Target::Bendix, Target::Xvg] {
            let err = Transform::substitute_tokens("A & B", target).expect_err("no tokens");
            assert_eq!(err, Error::unknown_target(target.name()));
        }
    }

    #[test]
    fn unknown_target_name_is_rejected() {
        let err = Transform::substitute_tokens_named("A", "chimera").expect_err("unknown");
        assert_eq!(
            err.to_string(),
            "no boolean token table is defined for target 'chimera'"
        );
        assert_eq!(
            Transform::substitute_tokens_named("A&B", "charmm").unwrap(),
            "A .and. B"
        );
    }
}

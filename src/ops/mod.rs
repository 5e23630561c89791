//! Pure transforms applied to domain definitions.
//!
//! Residue offsets are applied while reading; boolean token substitution is applied to
//! compound expressions while writing selection languages. Both share one error type.

mod error;
mod transform;

pub use transform::{MIN_RESID, Transform};

pub use error::Error;

//! Detection rules for bundle consistency checks.

pub mod forbidden;
pub mod missing_key;

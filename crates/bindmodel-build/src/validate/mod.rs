//! Structural checks run before a declaration is turned into a descriptor.
//!
//! Each check returns the first violated rule; callers report it and skip the
//! candidate.

mod component;
mod member;

pub use component::validate_component;
pub use member::{MemberRole, validate_member};

//! CLI command implementations

pub mod compare;
pub mod create_tag;
pub mod list_tags;

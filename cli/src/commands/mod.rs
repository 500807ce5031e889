//! Command implementations

pub mod branch;
pub mod docs;
pub mod registry;
pub mod version;

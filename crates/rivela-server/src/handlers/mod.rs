//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analysis;
pub mod context;
pub mod entries;
pub mod reference;

// Re-export all handlers for use in router
pub use analysis::*;
pub use context::*;
pub use entries::*;
pub use reference::*;

//! Data models
//!
//! Wire types mirror the REST backend: camelCase keys and Mongo-style `_id`
//! identifiers. Drafts are the editor-side payloads sent back on save.

pub mod category;
pub mod draft;
pub mod ingredient;
pub mod menu_entry;
pub mod order;

// Re-exports
pub use category::*;
pub use draft::*;
pub use ingredient::*;
pub use menu_entry::*;
pub use order::*;

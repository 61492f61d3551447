//! Shared types for the food admin console
//!
//! Wire models exchanged with the REST backend, editor drafts, the order
//! status machine and the route guard rule. Used by `admin-client`,
//! `admin-console` and `admin-edge`.

pub mod models;
pub mod route;

// Re-exports
pub use models::{
    Category, CategoryDraft, CategoryRef, ImageSource, Ingredient, IngredientDraft, MenuEntry,
    MenuEntryDraft, Order, OrderAction, OrderStatus, OrderSummary,
};
pub use route::{GuardDecision, Route};
pub use serde::{Deserialize, Serialize};

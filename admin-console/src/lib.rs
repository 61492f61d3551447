//! Admin Console - dashboard view-model and CLI for the food admin backend
//!
//! ```text
//! admin-console/src/
//! ├── dashboard/   # tabs, collections, editors, confirm-delete, snackbar
//! ├── cli.rs       # clap command tree
//! ├── commands.rs  # drives the dashboard for one CLI invocation
//! └── render.rs    # plain text tables
//! ```

pub mod cli;
pub mod commands;
pub mod dashboard;
pub mod render;

pub use dashboard::{ConfirmDelete, Dashboard, DeleteKind, Severity, Snackbar, Tab};

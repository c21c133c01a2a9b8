//! # Core Application Logic
//!
//! This module contains Chef's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (editor data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Store (persistence)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `EditorState`, the focus model and the cached rows
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`editor`]: Runs reducer effects against an injected [`store::Store`]
//! - [`record`]: The `Record` entity and name normalization
//! - [`store`]: The store trait and its SQLite implementation
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod editor;
pub mod error;
pub mod record;
pub mod state;
pub mod store;

pub use editor::{Editor, Flow};
pub use error::StoreError;
pub use record::Record;

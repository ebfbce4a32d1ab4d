//! # Core Application Logic
//!
//! The table engine and everything that drives it, independent of any
//! particular terminal library.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │                              │
//!                 │  • columns  (ColumnSpec)     │
//!                 │  • record   (field access)   │
//!                 │  • list     (ListEngine)     │
//!                 │  • state    (App)            │
//!                 │  • action   (update reducer) │
//!                 │  • config   (persistence)    │
//!                 └──────────────┬───────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!            ┌───────────┐               ┌───────────┐
//!            │    TUI    │               │    API    │
//!            │ (ratatui) │               │ (reqwest) │
//!            └───────────┘               └───────────┘
//! ```
//!
//! State changes only happen through `update(app, action)` in
//! [`action`]; I/O (network fetches, terminal writes) stays in the
//! adapter modules.

pub mod action;
pub mod columns;
pub mod config;
pub mod list;
pub mod record;
pub mod state;

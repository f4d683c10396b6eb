//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic shelf-management library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the edit-form state (Idle / Editing)                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: add, update, delete, toggle, list,       │
//! │    search, config                                           │
//! │  - Every mutation is load → mutate → rewrite the whole      │
//! │    collection                                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract BookStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a TUI, a web frontend, or any other UI.
//!
//! ## The Collection Is the Source of Truth
//!
//! The whole shelf lives in one JSON array (`books.json`). Anything shown to
//! the user is a pure function of that collection: display order is always
//! re-derived by sorting on id descending, and the unread/finished split is
//! re-derived from the completion flag. There is no incremental update path.
//!
//! An unreadable or malformed data file is treated as an empty shelf
//! (fail-open). That contract is deliberate and covered by tests; see
//! [`store`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `BookId`, `BookDraft`)
//! - [`query`]: Pure lookups, filtering, and display ordering
//! - [`form`]: The create/edit form state machine
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args` lives with the binary, not the lib API

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod query;
pub mod store;

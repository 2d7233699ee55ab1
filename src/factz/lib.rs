//! # Factz Architecture
//!
//! Factz keeps a collection of short facts (author, type, text) in a plain XML
//! file and lets a viewer browse them at random, search them, and add new ones.
//! It is a library with a thin CLI client: any other front end (a GUI, a web
//! page) drives the same [`api::FactzApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints facts and messages              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the fact list and the current-fact slot             │
//! │  - Notifies watchers when the current fact changes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load, random, search, add, list, init, config            │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) over the XML codec (codec/)         │
//! │  - DataStore trait: XmlStore (files), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The fact file is the source of truth. It is read whole on load; adding a
//! fact appends one element to it and then reloads the list, so what the
//! viewer shows always matches what is on disk. Files are named explicitly on
//! every call; there is no global default path inside the library.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`facts`]: The in-memory fact list and its search results
//! - [`codec`]: Streaming XML decoding and append-only encoding
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Fact`, `SearchMode`, `CurrentFact`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod facts;
pub mod model;
pub mod store;

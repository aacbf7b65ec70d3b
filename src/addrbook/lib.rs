//! # addrbook Architecture
//!
//! addrbook is an in-memory contact book: names, phone numbers and birthdays,
//! validated on entry, plus a query for whose birthday is coming up. It is a
//! library with a small interactive shell on top, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Reads command lines, prints results and errors           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per command, fills in configured defaults     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Per-command logic, returns CmdResult                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book, model, fields, schedule)                       │
//! │  - AddressBook → Record → Name / PhoneNumber / Birthday     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dependencies only point downwards.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. Nothing inside the crate
//! locks; to share an [`book::AddressBook`] across threads, put the whole
//! book behind one mutex.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each shell command
//! - [`book`]: The address book and the upcoming-birthdays query
//! - [`model`]: `Record`
//! - [`fields`]: Validated field types
//! - [`schedule`]: Birthday projection and weekend adjustment
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod schedule;

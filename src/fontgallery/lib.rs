//! # Fontgallery Architecture
//!
//! Fontgallery is a **UI-agnostic note-generation library**. The CLI binary
//! is a thin client; everything it can do is available through the library,
//! and the same core could serve a GUI or an editor plugin.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the vault and the settings store                    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate: dedupe → render → metadata → write → index     │
//! │  - config / template: the settings editing surfaces         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Adapters (store/, fonts/)                                  │
//! │  - Vault trait: FileVault (production), InMemoryVault (test)│
//! │  - FontSource trait: SystemFontSource (fontdb)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! types, and **never** writes to stdout/stderr or calls
//! `std::process::exit`. Per-font failures during generation are recorded
//! and reported, never propagated: one broken font must not abort a run
//! over hundreds of families.
//!
//! ## Template state
//!
//! The template selection (classic / modern / custom) and its text live in
//! a single [`config::SettingsStore`]. Every editing surface (the generate
//! command's flag overrides, the `template` subcommand, the `config`
//! subcommand) mutates that one store, so the last explicit save wins and
//! the surfaces can never diverge. See `config.rs` for the transition rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Vault abstraction and implementations
//! - [`fonts`]: Installed-font discovery
//! - [`model`]: Core data types (`FontDescriptor`, `TocEntry`)
//! - [`templates`]: Built-in templates, sanitization, placeholder rendering
//! - [`metadata`]: Frontmatter / tag / link metadata blocks
//! - [`dedup`]: Family-name deduplication
//! - [`config`]: Settings persistence and template selection state
//! - [`notify`]: Advisory progress notifications
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dedup;
pub mod editor;
pub mod error;
pub mod fonts;
pub mod metadata;
pub mod model;
pub mod notify;
pub mod store;
pub mod templates;

//! # Fitrec Architecture
//!
//! Fitrec records and queries strength-training sessions by talking to a
//! separate **worker process**. Each command spawns the worker once, writes a
//! single JSON-RPC request to its stdin and reads a single response from its
//! stdout. Fitrec itself stores nothing.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints results, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the transport    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, entry.rs)                    │
//! │  - Builds tool arguments, interprets responses              │
//! │  - Interactive entry over generic reader/writer             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport/)                               │
//! │  - Transport trait                                          │
//! │  - ProcessTransport (production), RecordingTransport (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr, and nothing calls
//! `std::process::exit`. The one exception is [`entry`], which writes prompts
//! to whatever writer it is handed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per worker tool
//! - [`entry`]: Interactive data entry
//! - [`model`]: `Set`, `Exercise`, `Category`, `TrainingSubmission`
//! - [`protocol`]: Request/response envelopes
//! - [`transport`]: Worker process boundary
//! - [`config`]: Client settings
//! - [`logging`]: Logger setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod model;
pub mod protocol;
pub mod transport;

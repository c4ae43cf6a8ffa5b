//! # Mint CLI Architecture
//!
//! Mint's scaffolding logic is a library with a thin CLI client on top. The
//! binary is the only place that touches stdout/stderr or the process exit
//! code; everything from the command layer inward takes plain Rust values and
//! returns plain Rust values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders messages, decides exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Prompt layer (prompt.rs)                                   │
//! │  - Asks only the questions the argument list left open      │
//! │  - Terminal answers via dialoguer, scripted answers in tests│
//! │  - Finishes before any write is issued                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - Performs the artifact writes from a resolved config      │
//! │  - Returns structured results (per-artifact outcomes plus   │
//! │    messages), never prints, never exits                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Content composer (compose.rs)                              │
//! │  - Pure functions producing each artifact's bytes           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure model
//!
//! The five writes `init` performs are independent: a failed step is recorded
//! as a per-artifact outcome and the remaining steps still run. There is no
//! rollback — a partial scaffold is an expected result, and the binary turns
//! it into a non-zero exit code so shell callers can tell.
//!
//! ## Module overview
//!
//! - [`args`]: clap definitions and the `init` token scanner
//! - [`commands`]: the project writer and the template listing
//! - [`compose`]: pure content builders for every artifact
//! - [`config`]: the in-memory scaffolding session record
//! - [`prompt`]: the prompt orchestrator and its `PromptSource` trait
//! - [`error`]: error types

pub mod args;
pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod prompt;

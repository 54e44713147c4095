//! # Docli Architecture
//!
//! Docli is a command-line client for the DigitalOcean API. The binary is thin:
//! it parses arguments, resolves credentials and prints whatever document the
//! library hands back. Everything else lives here, arranged in layers that
//! only talk downwards.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli/)                                     │
//! │  - clap command tree, logging setup, exit codes             │
//! │  - The ONLY place that writes to stdout/stderr              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - One handler per leaf command                             │
//! │  - Calls the API, hands the result to a display adapter     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (display/, format.rs, output.rs)              │
//! │  - Resource → table or JSON `Document`                      │
//! │  - Field formatters parameterized by a `Painter`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - `CloudApi` trait                                         │
//! │  - HttpClient (production), FixtureClient (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers return a [`output::Document`] instead of printing, so the whole
//! pipeline from arguments to rendered text can be tested against the
//! in-memory client.

pub mod auth;
pub mod client;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod model;
pub mod output;
pub mod prompt;
pub mod styles;

//! # ts2date Architecture
//!
//! ts2date is an **attribute-rewriting filter library** with a small CLI host. A record
//! carries an opaque payload plus a map of string attributes; ts2date finds configured
//! attributes holding a legacy `/Date(<epoch-millis>)/` value and rewrites them into a
//! `YYYY-MM-DD` calendar date. Everything else about the record passes through untouched.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! │  - The ONLY place that installs a tracing subscriber        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - convert, validate, describe, config                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (attributes, convert, processor, model)               │
//! │  - Pure, synchronous, no I/O                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - RecordStore trait: receive incoming, transfer outgoing   │
//! │  - JsonLinesStore (files/stdio), InMemoryStore (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Conversion Contract
//!
//! Conversion never fails a record. A value that looks like a legacy date but cannot be
//! parsed is left as it is, which is expressed in the type of
//! [`convert::ConversionOutcome`] rather than by swallowing errors. The only errors this
//! crate reports are host errors: a blank attribute list, unreadable input, malformed
//! JSON lines.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`attributes`]: Attribute-list parsing
//! - [`commands`]: Business logic for each command
//! - [`config`]: Processor configuration and its on-disk file
//! - [`convert`]: `/Date(...)/` detection and millis-to-date conversion
//! - [`processor`]: Per-record application and routing
//! - [`model`]: The `Record` type and the `AttributeRecord` seam
//! - [`store`]: Record queues
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod processor;
pub mod store;

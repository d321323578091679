//! # Record Queues
//!
//! The processor itself never sees where records come from. A [`RecordStore`]
//! plays the role of the surrounding pipeline: it hands out the records waiting on
//! the input queue and accepts each processed record for a [`Relationship`].
//!
//! ## Implementations
//!
//! - [`fs::JsonLinesStore`]: Reads and writes JSON Lines, one record per line
//!   - Backed by any `BufRead`/`Write` pair (files, stdin/stdout)
//!   - Reads one line per `receive`, so input is never held in full
//!   - Output order matches input order
//!   - An output file is created on first write or flush
//!
//! - [`memory::InMemoryStore`]: In-memory queue for testing
//!   - Keeps transferred records per relationship for inspection
//!
//! ## Record Format
//!
//! ```text
//! {"id":"5f0c...","attributes":{"created":"/Date(1644364800000)/"},"content":"..."}
//! ```
//!
//! `id`, `attributes` and `content` are all optional on input.

use crate::error::Result;
use crate::model::Record;
use crate::processor::Relationship;

pub mod fs;
pub mod memory;

/// Abstract interface for the queues around the processor.
pub trait RecordStore {
    /// Take the next record waiting on the input queue, `None` once it is empty.
    fn receive(&mut self) -> Result<Option<Record>>;

    /// Hand a processed record to a relationship.
    fn transfer(&mut self, record: Record, relationship: Relationship) -> Result<()>;

    /// Make transferred records durable/visible
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

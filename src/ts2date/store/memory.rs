use super::RecordStore;
use crate::error::Result;
use crate::model::Record;
use crate::processor::Relationship;
use std::collections::VecDeque;

/// In-memory queue for testing and embedding.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    queue: VecDeque<Record>,
    transferred: Vec<(Relationship, Record)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, record: Record) {
        self.queue.push_back(record);
    }

    pub fn is_queue_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Records transferred to `relationship`, in transfer order.
    pub fn transferred_to(&self, relationship: Relationship) -> Vec<&Record> {
        self.transferred
            .iter()
            .filter(|(rel, _)| *rel == relationship)
            .map(|(_, record)| record)
            .collect()
    }

    pub fn transferred_count(&self) -> usize {
        self.transferred.len()
    }
}

impl RecordStore for InMemoryStore {
    fn receive(&mut self) -> Result<Option<Record>> {
        Ok(self.queue.pop_front())
    }

    fn transfer(&mut self, record: Record, relationship: Relationship) -> Result<()> {
        self.transferred.push((relationship, record));
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const CONTENTS: &str = "Test contents";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Enqueue a record with the standard contents and the given attributes.
        pub fn with_record(mut self, attributes: &[(&str, &str)]) -> Self {
            let record = attributes
                .iter()
                .fold(Record::new(CONTENTS), |record, (name, value)| {
                    record.with_attribute(*name, *value)
                });
            self.store.enqueue(record);
            self
        }

        pub fn with_records(mut self, count: usize, name: &str, value: &str) -> Self {
            for _ in 0..count {
                self = self.with_record(&[(name, value)]);
            }
            self
        }
    }
}

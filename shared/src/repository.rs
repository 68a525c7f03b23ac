//! Storage seam for record lists.
//!
//! Screens talk to a [`RecordRepository`] rather than a bare `Vec` so an
//! API-backed implementation can replace [`InMemoryRepository`] later.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::records::TimeRecord;

pub trait RecordRepository<R: TimeRecord> {
    /// All records in insertion order
    fn list(&self) -> Vec<R>;

    fn get(&self, id: Uuid) -> Option<R>;

    /// Store a new record under a freshly generated id
    fn create(&mut self, record: R) -> Result<R, RepositoryError>;

    /// Replace the record stored under `id`
    fn update(&mut self, id: Uuid, record: R) -> Result<R, RepositoryError>;

    /// Remove and return the record stored under `id`
    fn delete(&mut self, id: Uuid) -> Result<R, RepositoryError>;
}

/// Vec-backed repository; contents are lost on reload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InMemoryRepository<R> {
    records: Vec<R>,
}

impl<R: TimeRecord> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: Uuid) -> Result<usize, RepositoryError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(RepositoryError::NotFound(id))
    }
}

impl<R: TimeRecord> RecordRepository<R> for InMemoryRepository<R> {
    fn list(&self) -> Vec<R> {
        self.records.clone()
    }

    fn get(&self, id: Uuid) -> Option<R> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    fn create(&mut self, mut record: R) -> Result<R, RepositoryError> {
        record.set_id(Uuid::new_v4());
        log::debug!("{}: created record {} for {}", R::KIND.label(), record.id(), record.employee_code());
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: Uuid, mut record: R) -> Result<R, RepositoryError> {
        let index = self.position(id)?;
        record.set_id(id);
        self.records[index] = record.clone();
        log::debug!("{}: updated record {}", R::KIND.label(), id);
        Ok(record)
    }

    fn delete(&mut self, id: Uuid) -> Result<R, RepositoryError> {
        let index = self.position(id)?;
        log::debug!("{}: deleted record {}", R::KIND.label(), id);
        Ok(self.records.remove(index))
    }
}

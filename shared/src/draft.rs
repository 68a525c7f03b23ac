//! Edit buffers behind the create/edit modals.

use uuid::Uuid;

use crate::error::{DraftError, ValidationError};
use crate::records::{FieldValue, TimeRecord};
use crate::repository::RecordRepository;

/// Where a draft goes when it is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    New,
    Existing(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft<R> {
    pub target: DraftTarget,
    pub record: R,
}

impl<R: TimeRecord> Default for Draft<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TimeRecord> Draft<R> {
    /// Blank buffer for the "New" button
    pub fn new() -> Self {
        Self {
            target: DraftTarget::New,
            record: R::default(),
        }
    }

    /// Copy of an existing record for the "Edit" button
    pub fn edit(record: &R) -> Self {
        Self {
            target: DraftTarget::Existing(record.id()),
            record: record.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.target == DraftTarget::New
    }

    pub fn set(&mut self, key: &str, value: FieldValue) -> bool {
        let accepted = self.record.set_value(key, value);
        if !accepted {
            log::warn!("{}: ignored value for field '{}'", R::KIND.label(), key);
        }
        accepted
    }

    /// The only rule enforced on submit: an employee code must be given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.record.employee_code().trim().is_empty() {
            return Err(ValidationError::MissingEmployeeCode);
        }
        Ok(())
    }

    /// Validate, then create or replace the record in `repo`.
    pub fn commit<Repo>(self, repo: &mut Repo) -> Result<R, DraftError>
    where
        Repo: RecordRepository<R>,
    {
        self.validate()?;
        let saved = match self.target {
            DraftTarget::New => repo.create(self.record)?,
            DraftTarget::Existing(id) => repo.update(id, self.record)?,
        };
        Ok(saved)
    }
}

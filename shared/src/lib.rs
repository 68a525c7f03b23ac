//! Domain logic for the timekeeping admin screens.
//!
//! The frontend only renders and forwards events; calendar arithmetic,
//! record editing, filtering and dialog bookkeeping all live here so they
//! can be tested without a browser.

pub mod calendar;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod modal;
pub mod records;
pub mod repository;
pub mod sample;
pub mod time_format;

pub use calendar::{CalendarCell, CellOrigin, DatePicker, MonthCursor};
pub use config::{AppConfig, Screen};
pub use draft::{Draft, DraftTarget};
pub use error::{ConfigError, DraftError, RepositoryError, ValidationError};
pub use filter::SearchFilter;
pub use lookup::{LookupEntry, LookupKind};
pub use modal::{ModalEntry, ModalId, ModalStack};
pub use records::{
    Adjustment, Advanced, FieldKind, FieldSpec, FieldValue, HoursPerDay, LeaveAbsence, OtGap,
    OtherEarning, Overtime, ProcessedTab, RawLog, RecordKind, Tardiness, TimeRecord, Undertime,
};
pub use repository::{InMemoryRepository, RecordRepository};

// ============================================================================
// Roster Library
// ============================================================================

pub mod core;
pub mod storage;
pub mod validation;
pub mod executor;
pub mod result;
pub mod notification;
pub mod config;
pub mod facade;

// Re-export main types for convenience
pub use facade::{DeleteDialog, EditDialog, RecordManager, ViewState};
pub use core::{
    Field, FieldValue, Record, RecordDraft, RecordId, RecordSchema, Result, RosterError,
    SortDirection, ValidRecord, ValidationError,
};
pub use result::DerivedView;
pub use config::ManagerConfig;
pub use notification::{Notification, NotificationSlot, Severity};
pub use storage::{IdGenerator, IdStrategy, RecordCollection};
pub use validation::Validator;
pub use executor::{Command, ExecutorPipeline, MutationOutcome, ViewQuery, derive_view};

pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use error::{Result, RosterError, ValidationError};
pub use record::{Record, RecordDraft, RecordId, ValidRecord};
pub use types::{Field, RecordSchema, SortDirection};
pub use value::{FieldValue, collate};

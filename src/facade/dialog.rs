use crate::core::{RecordDraft, RecordId};

/// Open edit popup: the record being edited and its pending values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub id: RecordId,
    pub draft: RecordDraft,
}

/// Open "are you sure?" popup for a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteDialog {
    pub id: RecordId,
}

//! Student records and the drafts they are built from.
//!
//! A `Record` can only be assembled from a `ValidRecord`, and a `ValidRecord`
//! can only come out of the validator, so nothing half-checked ever lands in a
//! collection.

use super::types::Field;
use super::value::FieldValue;
use serde::{Deserialize, Serialize};

pub type RecordId = i64;

/// Raw form input, exactly as typed.
///
/// Fields that are not part of the active schema are ignored by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordDraft {
    pub name: String,
    pub father_name: String,
    pub mobile: String,
    pub age: String,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            ..Self::default()
        }
    }

    pub fn father_name(mut self, father_name: impl Into<String>) -> Self {
        self.father_name = father_name.into();
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    /// Raw text of one form field (`id` has no input)
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => "",
            Field::Name => &self.name,
            Field::FatherName => &self.father_name,
            Field::Mobile => &self.mobile,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Id => {}
            Field::Name => self.name = value,
            Field::FatherName => self.father_name = value,
            Field::Mobile => self.mobile = value,
            Field::Age => self.age = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Draft that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord {
    name: String,
    father_name: Option<String>,
    mobile: Option<String>,
    age: u32,
}

impl ValidRecord {
    pub(crate) fn new(
        name: String,
        father_name: Option<String>,
        mobile: Option<String>,
        age: u32,
    ) -> Self {
        Self {
            name,
            father_name,
            mobile,
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id: RecordId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mobile: Option<String>,
    age: u32,
}

impl Record {
    pub fn new(id: RecordId, valid: ValidRecord) -> Self {
        Self {
            id,
            name: valid.name,
            father_name: valid.father_name,
            mobile: valid.mobile,
            age: valid.age,
        }
    }

    /// Same identity, new attribute values.
    pub fn with_changes(&self, valid: ValidRecord) -> Self {
        Self::new(self.id, valid)
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn father_name(&self) -> Option<&str> {
        self.father_name.as_deref()
    }

    pub fn mobile(&self) -> Option<&str> {
        self.mobile.as_deref()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Integer(self.id),
            Field::Name => FieldValue::Text(&self.name),
            Field::FatherName => self
                .father_name
                .as_deref()
                .map_or(FieldValue::Null, FieldValue::Text),
            Field::Mobile => self
                .mobile
                .as_deref()
                .map_or(FieldValue::Null, FieldValue::Text),
            Field::Age => FieldValue::Integer(i64::from(self.age)),
        }
    }

    /// Prefills the edit form
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            name: self.name.clone(),
            father_name: self.father_name.clone().unwrap_or_default(),
            mobile: self.mobile.clone().unwrap_or_default(),
            age: self.age.to_string(),
        }
    }
}

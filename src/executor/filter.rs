use crate::core::{Field, Record, RecordSchema};

/// Case-insensitive substring search over the searchable columns of a schema.
///
/// An empty needle, or a schema without searchable columns, keeps every record.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    needle: String,
    fields: &'static [Field],
}

impl SearchFilter {
    pub fn new(text: &str, schema: RecordSchema) -> Self {
        Self {
            needle: text.to_lowercase(),
            fields: schema.searchable_fields(),
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.needle.is_empty() || self.fields.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.is_pass_through() {
            return true;
        }

        self.fields.iter().any(|field| {
            record
                .field(*field)
                .as_str()
                .is_some_and(|text| text.to_lowercase().contains(&self.needle))
        })
    }

    pub fn apply<'a>(&self, records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a Record> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

//! Draft validator
//!
//! Checks a candidate record before it may enter the collection. Rules run
//! in a fixed order and the first failure wins:
//! required fields, mobile digits, positive age, alphabetic names.

pub mod rules;

pub use rules::{
    AlphabeticNameRule, MobileDigitsRule, PositiveAgeRule, RequiredFieldsRule, ValidationRule,
};

use crate::core::{Field, RecordDraft, RecordSchema, ValidRecord, ValidationError};
use tracing::debug;

pub struct Validator {
    schema: RecordSchema,
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Create validator with default rules
    pub fn new(schema: RecordSchema) -> Self {
        Self {
            schema,
            rules: vec![
                Box::new(RequiredFieldsRule),
                Box::new(MobileDigitsRule),
                Box::new(PositiveAgeRule),
                Box::new(AlphabeticNameRule),
            ],
        }
    }

    /// Create validator with custom rules
    pub fn with_rules(schema: RecordSchema, rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { schema, rules }
    }

    pub fn schema(&self) -> RecordSchema {
        self.schema
    }

    /// Validate a draft against all rules and normalize it.
    ///
    /// Surrounding whitespace is trimmed from every field; fields outside the
    /// schema are dropped.
    pub fn validate(&self, draft: &RecordDraft) -> Result<ValidRecord, ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.check(draft, self.schema) {
                debug!(rule = rule.name(), error = %err, "draft rejected");
                return Err(err);
            }
        }

        let age = rules::parse_age(&draft.age)?;
        let optional = |field: Field| {
            self.schema
                .has_field(field)
                .then(|| draft.get(field).trim().to_string())
        };

        Ok(ValidRecord::new(
            draft.name.trim().to_string(),
            optional(Field::FatherName),
            optional(Field::Mobile),
            age,
        ))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RecordSchema::default())
    }
}

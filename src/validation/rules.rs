use crate::core::{Field, RecordDraft, RecordSchema, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").expect("digits pattern compiles");
    static ref LETTERS_AND_SPACES: Regex =
        Regex::new(r"^[A-Za-z ]+$").expect("name pattern compiles");
}

/// One check applied to a draft (Chain of Responsibility pattern)
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, draft: &RecordDraft, schema: RecordSchema) -> Result<(), ValidationError>;
}

/// Every field the schema requires must be filled in
#[derive(Debug, Clone, Default)]
pub struct RequiredFieldsRule;

impl ValidationRule for RequiredFieldsRule {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn check(&self, draft: &RecordDraft, schema: RecordSchema) -> Result<(), ValidationError> {
        match schema
            .required_fields()
            .iter()
            .find(|field| draft.get(**field).trim().is_empty())
        {
            Some(field) => Err(ValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileDigitsRule;

impl ValidationRule for MobileDigitsRule {
    fn name(&self) -> &'static str {
        "mobile-digits"
    }

    fn check(&self, draft: &RecordDraft, schema: RecordSchema) -> Result<(), ValidationError> {
        if !schema.has_field(Field::Mobile) {
            return Ok(());
        }

        if DIGITS_ONLY.is_match(draft.mobile.trim()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidMobile)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PositiveAgeRule;

impl ValidationRule for PositiveAgeRule {
    fn name(&self) -> &'static str {
        "positive-age"
    }

    fn check(&self, draft: &RecordDraft, _schema: RecordSchema) -> Result<(), ValidationError> {
        parse_age(&draft.age).map(|_| ())
    }
}

/// Names hold ASCII letters and spaces, nothing else
#[derive(Debug, Clone, Default)]
pub struct AlphabeticNameRule;

impl ValidationRule for AlphabeticNameRule {
    fn name(&self) -> &'static str {
        "alphabetic-name"
    }

    fn check(&self, draft: &RecordDraft, schema: RecordSchema) -> Result<(), ValidationError> {
        for field in [Field::Name, Field::FatherName] {
            if !schema.has_field(field) {
                continue;
            }
            if !LETTERS_AND_SPACES.is_match(draft.get(field).trim()) {
                return Err(ValidationError::InvalidName(field));
            }
        }
        Ok(())
    }
}

/// Parses the age text of a form; zero, negatives, fractions and junk are all rejected.
pub(crate) fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if !DIGITS_ONLY.is_match(raw) {
        return Err(ValidationError::InvalidAge);
    }
    match raw.parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(ValidationError::InvalidAge),
    }
}

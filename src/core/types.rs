use super::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column of a student record.
///
/// Doubles as the sort key the table header reports when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Name,
    FatherName,
    Mobile,
    Age,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::FatherName,
        Field::Mobile,
        Field::Age,
    ];

    /// Numeric columns sort by value, the rest by collation.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Id | Field::Age)
    }

    /// Wire name used by the rendering layer (`fatherName`, not `father_name`)
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::FatherName => "fatherName",
            Field::Mobile => "mobile",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => write!(f, "ID"),
            Field::Name => write!(f, "Name"),
            Field::FatherName => write!(f, "Father Name"),
            Field::Mobile => write!(f, "Mobile"),
            Field::Age => write!(f, "Age"),
        }
    }
}

impl FromStr for Field {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "fathername" | "father" => Ok(Field::FatherName),
            "mobile" | "phone" => Ok(Field::Mobile),
            "age" => Ok(Field::Age),
            _ => Err(RosterError::Config(format!("Unknown field '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Which shape of student record the roster manages.
///
/// `Minimal` carries only name and age and has no search box;
/// `Extended` adds father name and mobile number, all of them searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSchema {
    Minimal,
    #[default]
    Extended,
}

impl RecordSchema {
    /// Columns in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            RecordSchema::Minimal => &[Field::Id, Field::Name, Field::Age],
            RecordSchema::Extended => &Field::ALL,
        }
    }

    /// Fields a draft must fill in, in the order they are checked
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            RecordSchema::Minimal => &[Field::Name, Field::Age],
            RecordSchema::Extended => &[Field::Name, Field::FatherName, Field::Mobile, Field::Age],
        }
    }

    pub fn searchable_fields(&self) -> &'static [Field] {
        match self {
            RecordSchema::Minimal => &[],
            RecordSchema::Extended => &[Field::Name, Field::FatherName, Field::Mobile],
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    pub fn supports_search(&self) -> bool {
        !self.searchable_fields().is_empty()
    }
}

impl fmt::Display for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSchema::Minimal => write!(f, "minimal"),
            RecordSchema::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for RecordSchema {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minimal" | "min" | "basic" => Ok(RecordSchema::Minimal),
            "extended" | "ext" | "full" => Ok(RecordSchema::Extended),
            _ => Err(RosterError::Config(format!("Unknown record schema '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("fatherName".parse::<Field>().unwrap(), Field::FatherName);
        assert_eq!("father_name".parse::<Field>().unwrap(), Field::FatherName);
        assert_eq!("AGE".parse::<Field>().unwrap(), Field::Age);
        assert!(matches!(
            "email".parse::<Field>(),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert!(SortDirection::Asc.toggled().is_descending());
    }

    #[test]
    fn test_minimal_schema_has_no_search() {
        assert!(!RecordSchema::Minimal.supports_search());
        assert!(RecordSchema::Extended.supports_search());
        assert!(!RecordSchema::Minimal.has_field(Field::Mobile));
        assert_eq!(RecordSchema::default(), RecordSchema::Extended);
    }
}

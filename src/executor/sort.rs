// ============================================================================
// src/executor/sort.rs - Record Sorting
// ============================================================================
//
// Design Patterns:
// - Comparator Pattern: comparison strategy keyed on a record field
// - Strategy Pattern: configurable NULL handling and sort direction
//
// Features:
// - Numeric columns compare by value, text columns by collation
// - Stable sort (records with equal keys keep their relative order)
// - Missing values (fields outside the schema) follow NULLS LAST / NULLS FIRST
//
// ============================================================================

use crate::core::{Field, Record, SortDirection};
use std::cmp::Ordering;

// ============================================================================
// NULL HANDLING STRATEGY
// ============================================================================

/// Strategy for handling missing values during sorting
///
/// - ASC: NULLS LAST
/// - DESC: NULLS FIRST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    NullsFirst,
    NullsLast,
}

impl NullOrdering {
    pub fn default_for_direction(descending: bool) -> Self {
        if descending {
            Self::NullsFirst
        } else {
            Self::NullsLast
        }
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: Field,
    pub descending: bool,
    pub null_ordering: NullOrdering,
}

impl SortKey {
    /// Create a new sort key with default NULL ordering
    pub fn new(field: Field, direction: SortDirection) -> Self {
        let descending = direction.is_descending();
        Self {
            field,
            descending,
            null_ordering: NullOrdering::default_for_direction(descending),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(Field::Id, SortDirection::Asc)
    }
}

// ============================================================================
// RECORD COMPARATOR
// ============================================================================

pub struct RecordComparator<'a> {
    sort_keys: &'a [SortKey],
}

impl<'a> RecordComparator<'a> {
    pub fn new(sort_keys: &'a [SortKey]) -> Self {
        Self { sort_keys }
    }

    /// Compare two records key by key; the first unequal key decides
    pub fn compare(&self, left: &Record, right: &Record) -> Ordering {
        for key in self.sort_keys {
            let ordering = self.compare_by_key(left, right, key);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    fn compare_by_key(&self, left: &Record, right: &Record, key: &SortKey) -> Ordering {
        let value1 = left.field(key.field);
        let value2 = right.field(key.field);

        // NULL placement is fixed by the strategy, not flipped by direction
        match (value1.is_null(), value2.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => match key.null_ordering {
                NullOrdering::NullsFirst => Ordering::Less,
                NullOrdering::NullsLast => Ordering::Greater,
            },
            (false, true) => match key.null_ordering {
                NullOrdering::NullsFirst => Ordering::Greater,
                NullOrdering::NullsLast => Ordering::Less,
            },
            (false, false) => {
                let ordering = value1.compare(&value2);
                if key.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
        }
    }
}

// ============================================================================
// SORT EXECUTOR
// ============================================================================

pub struct SortExecutor;

impl SortExecutor {
    /// Sort records in place.
    ///
    /// `sort_by` is stable: records that compare equal keep the order they
    /// arrived in.
    pub fn sort(records: &mut [&Record], sort_keys: &[SortKey]) {
        if records.len() < 2 || sort_keys.is_empty() {
            return;
        }

        let comparator = RecordComparator::new(sort_keys);
        records.sort_by(|left, right| comparator.compare(left, right));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecordDraft, RecordSchema};
    use crate::validation::Validator;

    fn record(id: i64, name: &str, age: u32) -> Record {
        let valid = Validator::new(RecordSchema::Minimal)
            .validate(&RecordDraft::new(name, age.to_string()))
            .unwrap();
        Record::new(id, valid)
    }

    fn extended(id: i64, father: &str) -> Record {
        let valid = Validator::new(RecordSchema::Extended)
            .validate(&RecordDraft::new("Ana", "20").father_name(father).mobile("1"))
            .unwrap();
        Record::new(id, valid)
    }

    fn ids(records: &[&Record]) -> Vec<i64> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_null_ordering_defaults() {
        assert_eq!(
            NullOrdering::default_for_direction(false),
            NullOrdering::NullsLast
        );
        assert_eq!(
            NullOrdering::default_for_direction(true),
            NullOrdering::NullsFirst
        );
    }

    #[test]
    fn test_sort_key_creation() {
        let key = SortKey::new(Field::Age, SortDirection::Desc);
        assert!(key.descending);
        assert_eq!(key.null_ordering, NullOrdering::NullsFirst);
        assert_eq!(SortKey::default().field, Field::Id);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let data = [record(1, "Ana", 20), record(2, "Ben", 20), record(3, "Cy", 18)];
        let mut refs: Vec<&Record> = data.iter().collect();

        SortExecutor::sort(&mut refs, &[SortKey::new(Field::Age, SortDirection::Asc)]);
        assert_eq!(ids(&refs), vec![3, 1, 2]);
    }

    #[test]
    fn test_descending_keeps_ties_in_arrival_order() {
        let data = [record(1, "Ana", 20), record(2, "Ben", 20), record(3, "Cy", 18)];
        let mut refs: Vec<&Record> = data.iter().collect();

        SortExecutor::sort(&mut refs, &[SortKey::new(Field::Age, SortDirection::Desc)]);
        assert_eq!(ids(&refs), vec![1, 2, 3]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let data = [record(1, "bob", 20), record(2, "Alice", 20), record(3, "carl", 20)];
        let mut refs: Vec<&Record> = data.iter().collect();

        SortExecutor::sort(&mut refs, &[SortKey::new(Field::Name, SortDirection::Asc)]);
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }

    #[test]
    fn test_id_sort_is_numeric() {
        let data = [record(10, "A", 1), record(9, "B", 1), record(100, "C", 1)];
        let mut refs: Vec<&Record> = data.iter().collect();

        SortExecutor::sort(&mut refs, &[SortKey::new(Field::Id, SortDirection::Asc)]);
        assert_eq!(ids(&refs), vec![9, 10, 100]);
    }

    #[test]
    fn test_missing_values_sort_last_ascending() {
        let data = [record(1, "Ana", 20), extended(2, "Zed"), extended(3, "Abe")];
        let mut refs: Vec<&Record> = data.iter().collect();

        SortExecutor::sort(&mut refs, &[SortKey::new(Field::FatherName, SortDirection::Asc)]);
        assert_eq!(ids(&refs), vec![3, 2, 1]);

        SortExecutor::sort(&mut refs, &[SortKey::new(Field::FatherName, SortDirection::Desc)]);
        assert_eq!(ids(&refs), vec![1, 2, 3]);
    }

    #[test]
    fn test_multi_key_sort() {
        let data = [record(1, "Ben", 20), record(2, "Ana", 20), record(3, "Cy", 18)];
        let mut refs: Vec<&Record> = data.iter().collect();

        let keys = [
            SortKey::new(Field::Age, SortDirection::Desc),
            SortKey::new(Field::Name, SortDirection::Asc),
        ];
        SortExecutor::sort(&mut refs, &keys);
        assert_eq!(ids(&refs), vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_input() {
        let mut refs: Vec<&Record> = Vec::new();
        SortExecutor::sort(&mut refs, &[SortKey::default()]);
        assert!(refs.is_empty());
    }
}

use crate::core::{Field, Record};
use crate::executor::paginate::page_count;

/// The slice of the collection the table shows, plus what the pagination
/// control needs to render itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub records: Vec<Record>,
    /// Size of the filtered sequence before pagination
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl DerivedView {
    pub fn empty(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
            page: 0,
            page_size,
        }
    }

    pub fn new(records: Vec<Record>, total_count: usize, page: usize, page_size: usize) -> Self {
        Self {
            records,
            total_count,
            page,
            page_size,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.records.iter().map(Record::id).collect()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total_count, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.page_count()
    }

    /// "6–10 of 12", or "0–0 of 0" for nothing
    pub fn range_label(&self) -> String {
        if self.records.is_empty() {
            return format!("0–0 of {}", self.total_count);
        }
        let from = self.page.saturating_mul(self.page_size).saturating_add(1);
        let to = from.saturating_add(self.records.len() - 1);
        format!("{}–{} of {}", from, to, self.total_count)
    }

    /// Table text for one cell, blank when the record lacks the field
    pub fn cell(record: &Record, field: Field) -> String {
        record.field(field).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecordDraft, RecordSchema};
    use crate::validation::Validator;

    fn records(n: i64) -> Vec<Record> {
        let validator = Validator::new(RecordSchema::Minimal);
        (1..=n)
            .map(|id| Record::new(id, validator.validate(&RecordDraft::new("Ana", "9")).unwrap()))
            .collect()
    }

    #[test]
    fn test_range_label() {
        let view = DerivedView::new(records(2), 7, 1, 5);
        assert_eq!(view.range_label(), "6–7 of 7");
        assert_eq!(DerivedView::empty(5).range_label(), "0–0 of 0");
    }

    #[test]
    fn test_navigation_flags() {
        let first = DerivedView::new(records(5), 7, 0, 5);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = DerivedView::new(records(2), 7, 1, 5);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.page_count(), 2);
    }

    #[test]
    fn test_last_possible_page_does_not_overflow() {
        let view = DerivedView::new(Vec::new(), 7, usize::MAX, 5);
        assert!(view.has_previous());
        assert!(!view.has_next());
        assert_eq!(view.range_label(), "0–0 of 7");

        // A non-empty page at the edge still renders a label
        let edge = DerivedView::new(records(1), 7, usize::MAX, 5);
        assert_eq!(edge.range_label(), format!("{}–{} of 7", usize::MAX, usize::MAX));
    }

    #[test]
    fn test_cell_text() {
        let record = &records(1)[0];
        assert_eq!(DerivedView::cell(record, Field::Age), "9");
        assert_eq!(DerivedView::cell(record, Field::Mobile), "");
    }
}

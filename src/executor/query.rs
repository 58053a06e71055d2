use super::filter::SearchFilter;
use super::paginate::PageRequest;
use super::sort::{SortExecutor, SortKey};
use crate::core::{Field, RecordSchema, SortDirection};
use crate::result::DerivedView;
use crate::storage::RecordCollection;
use tracing::debug;

/// Everything the view depends on besides the collection itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub sort_field: Field,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl ViewQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort_field: Field::Id,
            sort_direction: SortDirection::Asc,
            page: 0,
            page_size,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn sort(mut self, field: Field, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::new(self.sort_field, self.sort_direction)
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// Filter, then sort, then paginate.
///
/// Pure: the collection is read, never reordered, and nothing is cached.
pub fn derive_view(
    collection: &RecordCollection,
    schema: RecordSchema,
    query: &ViewQuery,
) -> DerivedView {
    let mut matched = SearchFilter::new(&query.search, schema).apply(collection);
    let total_count = matched.len();

    SortExecutor::sort(&mut matched, &[query.sort_key()]);

    let records = query
        .page_request()
        .apply(matched)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        search = %query.search,
        sort = %format!("{} {}", query.sort_field.key(), query.sort_direction),
        page = query.page,
        total_count,
        "view derived"
    );

    DerivedView::new(records, total_count, query.page, query.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, RecordDraft};
    use crate::validation::Validator;

    fn collection() -> RecordCollection {
        let validator = Validator::new(RecordSchema::Extended);
        let rows = [
            ("Dan", "Hans", "300", "22"),
            ("Amy", "Tom", "100", "19"),
            ("Cleo", "Rob", "200", "19"),
        ];
        let records = rows.iter().enumerate().map(|(i, (name, father, mobile, age))| {
            let draft = RecordDraft::new(*name, *age).father_name(*father).mobile(*mobile);
            Record::new(i as i64 + 1, validator.validate(&draft).unwrap())
        });
        RecordCollection::from_records(records).unwrap()
    }

    #[test]
    fn test_default_query_is_insertion_order_by_id() {
        let view = derive_view(&collection(), RecordSchema::Extended, &ViewQuery::new(5));
        assert_eq!(view.ids(), vec![1, 2, 3]);
        assert_eq!(view.total_count, 3);
    }

    #[test]
    fn test_sort_by_name_desc() {
        let query = ViewQuery::new(5).sort(Field::Name, SortDirection::Desc);
        let view = derive_view(&collection(), RecordSchema::Extended, &query);
        assert_eq!(view.ids(), vec![1, 3, 2]);
    }

    #[test]
    fn test_filter_then_count() {
        let query = ViewQuery::new(5).search("an");
        let view = derive_view(&collection(), RecordSchema::Extended, &query);
        // "Dan"/"Hans" only
        assert_eq!(view.ids(), vec![1]);
        assert_eq!(view.total_count, 1);
    }

    #[test]
    fn test_collection_is_not_reordered() {
        let collection = collection();
        let query = ViewQuery::new(5).sort(Field::Age, SortDirection::Asc);
        let view = derive_view(&collection, RecordSchema::Extended, &query);
        assert_eq!(view.ids(), vec![2, 3, 1]);
        assert_eq!(collection.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_past_end() {
        let query = ViewQuery::new(2).page(5);
        let view = derive_view(&collection(), RecordSchema::Extended, &query);
        assert!(view.is_empty());
        assert_eq!(view.total_count, 3);
    }
}

use crate::core::{Field, SortDirection};
use crate::executor::ViewQuery;

/// Search, sort and pagination parameters of the table.
///
/// Changing any of them never touches the collection, only what is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort_field: Field,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort_field: Field::Id,
            sort_direction: SortDirection::Asc,
            page: 0,
            page_size,
        }
    }

    /// Clicking the active column flips its direction; any other column
    /// becomes the sort key, ascending.
    pub fn sort_by(&mut self, field: Field) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Arrow shown next to a header, if it is the active sort column
    pub fn sort_indicator(&self, field: Field) -> Option<&'static str> {
        (self.sort_field == field).then(|| match self.sort_direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        })
    }

    pub fn to_query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle_and_switch() {
        let mut state = ViewState::new(5);
        state.sort_by(Field::Id);
        assert_eq!(state.sort_direction, SortDirection::Desc);

        state.sort_by(Field::Name);
        assert_eq!(state.sort_field, Field::Name);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(state.sort_indicator(Field::Name), Some("▲"));
        assert_eq!(state.sort_indicator(Field::Age), None);
    }
}

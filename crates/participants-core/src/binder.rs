//! Binding participant lists to list-view rows
//!
//! A list widget owns its rows; it asks a [`RowBinder`] how many rows exist,
//! has it make empty ones, and has it fill a row for a given position.

use std::marker::PhantomData;

use crate::format::format_phone_number;
use crate::types::ParticipantList;

/// A row with a single writable text field
pub trait TextRow {
    fn set_text(&mut self, text: String);
    fn text(&self) -> &str;
}

/// Row lifecycle callbacks a list widget drives
pub trait RowBinder {
    type Row: TextRow;

    /// Materialize a new, empty row
    fn make_row(&self) -> Self::Row;

    /// Fill `row` with the content for `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `index >= self.row_count()`.
    fn bind_row(&self, index: usize, row: &mut Self::Row);

    /// Number of rows currently backing the widget
    fn row_count(&self) -> usize;

    /// Make and bind one row per position
    fn rows(&self) -> Vec<Self::Row> {
        (0..self.row_count())
            .map(|index| {
                let mut row = self.make_row();
                self.bind_row(index, &mut row);
                row
            })
            .collect()
    }
}

/// Binds each raw number of a [`ParticipantList`] to a row as formatted text
pub struct ParticipantListBinder<'a, R> {
    participants: &'a ParticipantList,
    _row: PhantomData<fn() -> R>,
}

impl<'a, R> ParticipantListBinder<'a, R> {
    pub fn new(participants: &'a ParticipantList) -> Self {
        Self {
            participants,
            _row: PhantomData,
        }
    }

    pub fn participants(&self) -> &'a ParticipantList {
        self.participants
    }

    /// Formatted text for `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn formatted(&self, index: usize) -> String {
        format_phone_number(&self.participants.as_slice()[index])
    }
}

impl<R: TextRow + Default> RowBinder for ParticipantListBinder<'_, R> {
    type Row = R;

    fn make_row(&self) -> R {
        R::default()
    }

    fn bind_row(&self, index: usize, row: &mut R) {
        row.set_text(self.formatted(index));
    }

    fn row_count(&self) -> usize {
        self.participants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Row {
        text: String,
        writes: usize,
    }

    impl TextRow for Row {
        fn set_text(&mut self, text: String) {
            self.text = text;
            self.writes += 1;
        }

        fn text(&self) -> &str {
            &self.text
        }
    }

    fn sample() -> ParticipantList {
        ["+7 (912) 345-67-89", "9123456789", "123", ""].into_iter().collect()
    }

    #[test]
    fn test_row_count_matches_list() {
        let list = sample();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&list);
        assert_eq!(binder.row_count(), 4);

        let empty = ParticipantList::default();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&empty);
        assert_eq!(binder.row_count(), 0);
        assert!(binder.rows().is_empty());
    }

    #[test]
    fn test_make_row_is_empty() {
        let list = sample();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&list);
        let row = binder.make_row();
        assert_eq!(row.text(), "");
        assert_eq!(row.writes, 0);
    }

    #[test]
    fn test_bind_row_writes_formatted_text_once() {
        let list = sample();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&list);
        let mut row = binder.make_row();

        binder.bind_row(0, &mut row);
        assert_eq!(row.text(), "79 12345-6789");
        assert_eq!(row.writes, 1);

        // Rebinding a recycled row overwrites it
        binder.bind_row(1, &mut row);
        assert_eq!(row.text(), "91 2345-6789");
        assert_eq!(row.writes, 2);
    }

    #[test]
    fn test_rows_in_list_order() {
        let list = sample();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&list);
        let texts: Vec<String> = binder.rows().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["79 12345-6789", "91 2345-6789", "123", ""]);
    }

    #[test]
    fn test_binding_leaves_list_untouched() {
        let list = sample();
        let before = list.clone();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&list);
        let _ = binder.rows();
        assert_eq!(list, before);
    }

    #[test]
    #[should_panic]
    fn test_bind_out_of_range_panics() {
        let list = sample();
        let binder: ParticipantListBinder<Row> = ParticipantListBinder::new(&list);
        let mut row = binder.make_row();
        binder.bind_row(4, &mut row);
    }
}

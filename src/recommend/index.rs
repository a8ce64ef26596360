use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::shelf::Bookworm;
use crate::types::Book;

/// Maps each book to every book that shared a shelf with it.
///
/// Membership is positional, not identity-based: a shelf holding two copies
/// of one title registers that title in its own set (the recommendation pass
/// filters owned books out again, so this never reaches output). A book whose
/// shelf has no other entries gains nothing from that shelf.
///
/// Both the map and each set are ordered by the `Book` total order, which is
/// what makes downstream traversal reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceIndex {
    entries: BTreeMap<Book, BTreeSet<Book>>,
}

impl CooccurrenceIndex {
    /// Build the index as a union over every bookworm's shelf.
    #[tracing::instrument(skip_all)]
    pub fn build(bookworms: &[Bookworm]) -> Self {
        let mut entries: BTreeMap<Book, BTreeSet<Book>> = BTreeMap::new();

        for bookworm in bookworms {
            for (i, book) in bookworm.books.iter().enumerate() {
                for (j, other) in bookworm.books.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    entries
                        .entry(book.clone())
                        .or_default()
                        .insert(other.clone());
                }
            }
        }

        debug!(books = entries.len(), "built co-occurrence index");

        CooccurrenceIndex { entries }
    }

    /// The books seen alongside `book` on any shelf, if any shelf paired it.
    pub fn shelf_mates(&self, book: &Book) -> Option<&BTreeSet<Book>> {
        self.entries.get(book)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Book, &BTreeSet<Book>)> {
        self.entries.iter()
    }
}

use std::collections::{BTreeMap, HashSet};

use crate::shelf::Bookworm;
use crate::types::Book;

/// Count, for each distinct book, how many distinct bookworms own it.
///
/// Two copies of a title on one shelf count as a single owner. The returned
/// map iterates in the `Book` total order, so callers that emit it directly
/// stay deterministic.
pub fn count_book_owners(bookworms: &[Bookworm]) -> BTreeMap<Book, usize> {
    let mut owners: BTreeMap<Book, usize> = BTreeMap::new();

    for bookworm in bookworms {
        let mut counted: HashSet<&Book> = HashSet::new();
        for book in &bookworm.books {
            // insert returns false for the second copy on the same shelf
            if counted.insert(book) {
                *owners.entry(book.clone()).or_insert(0) += 1;
            }
        }
    }

    owners
}

use crate::recommend::frequency::count_book_owners;
use crate::shelf::Bookworm;
use crate::types::Book;

/// Find the books present on every bookworm's shelf.
///
/// A book qualifies when its owner count equals the number of bookworms, so
/// an empty input or any bookworm with an empty shelf yields an empty result.
/// Output is sorted ascending by (author, title) with no duplicates.
pub fn find_common_books(bookworms: &[Bookworm]) -> Vec<Book> {
    let common: Vec<Book> = count_book_owners(bookworms)
        .into_iter()
        .filter(|&(_, owners)| owners == bookworms.len())
        .map(|(book, _)| book)
        .collect();

    // BTreeMap iteration already yields the sort contract
    debug_assert!(common.windows(2).all(|w| w[0] < w[1]));

    common
}

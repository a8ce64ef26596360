pub mod common;
pub mod frequency;
pub mod index;

pub use common::find_common_books;
pub use frequency::count_book_owners;
pub use index::CooccurrenceIndex;

use crate::shelf::Bookworm;
use crate::types::{Book, Recommendation};

/// Suggest books for every bookworm in the list.
///
/// The co-occurrence index is built once for the whole dataset. Each
/// bookworm's shelf is then walked in shelf order; for every shelf book, its
/// shelf-mates are traversed ascending by (author, title) — the documented
/// deterministic order for an otherwise unordered set — and each candidate is
/// kept iff it is neither on the bookworm's own shelf nor already suggested.
/// First-seen order is preserved; the output is NOT sorted.
///
/// Results line up with the input: one [`Recommendation`] per bookworm, in
/// input order, empty when nothing qualifies.
#[tracing::instrument(skip_all)]
pub fn recommend(bookworms: &[Bookworm]) -> Vec<Recommendation> {
    let index = CooccurrenceIndex::build(bookworms);

    bookworms
        .iter()
        .map(|bookworm| {
            let mut books: Vec<Book> = Vec::new();

            for book in &bookworm.books {
                let Some(mates) = index.shelf_mates(book) else {
                    continue;
                };
                for candidate in mates {
                    if bookworm.books.contains(candidate) || books.contains(candidate) {
                        continue;
                    }
                    books.push(candidate.clone());
                }
            }

            Recommendation {
                name: bookworm.name.clone(),
                books,
            }
        })
        .collect()
}

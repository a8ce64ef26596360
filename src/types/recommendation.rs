use serde::{Deserialize, Serialize};

use crate::types::book::Book;

/// Books suggested to a single bookworm.
///
/// Fully self-contained and serializable. `books` preserves the order in
/// which candidates were first encountered while scanning the bookworm's
/// shelf; it is deduplicated and never contains a book already on that shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub books: Vec<Book>,
}

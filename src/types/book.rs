use serde::{Deserialize, Serialize};

/// A book, identified by its (author, title) pair.
///
/// Two books are the same book iff both fields match exactly — comparison is
/// case-sensitive and no normalization is applied. The derived `Ord` compares
/// author first, then title, byte-wise ascending; every sorted sequence of
/// books the engine emits uses this order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
}

impl Book {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Book {
            author: author.into(),
            title: title.into(),
        }
    }
}

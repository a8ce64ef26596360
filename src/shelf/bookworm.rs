use serde::{Deserialize, Serialize};

use crate::types::Book;

/// A named reader and the ordered shelf of books they own.
///
/// The shelf may hold duplicate entries — two copies of a title is a valid,
/// expected state. A missing `books` key in the serialized form decodes as an
/// empty shelf, so the engine never has to distinguish the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookworm {
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Bookworm {
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Bookworm {
            name: name.into(),
            books,
        }
    }
}

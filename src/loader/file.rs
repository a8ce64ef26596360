// Deliberately thin:
// one-shot read
// no watching, no reloading
// decoding is the only validation

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::shelf::Bookworm;

/// Reads go through a 1 MiB buffer to keep the syscall count down on larger
/// shelf files.
const READ_BUFFER_SIZE: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read bookworm file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode bookworm file: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Load the bookworm list from a JSON file.
///
/// The file must hold an array of `{"name": ..., "books": [...]}` objects;
/// the `books` key may be absent. Schema violations surface as
/// [`LoadError::Decode`].
pub fn load_bookworms(path: impl AsRef<Path>) -> Result<Vec<Bookworm>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

    let bookworms: Vec<Bookworm> = serde_json::from_reader(reader)?;

    debug!(
        path = %path.display(),
        bookworms = bookworms.len(),
        "loaded bookworm file"
    );

    Ok(bookworms)
}

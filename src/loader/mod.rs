pub mod file;

pub use file::{load_bookworms, LoadError};

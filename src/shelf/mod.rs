pub mod bookworm;

pub use bookworm::Bookworm;

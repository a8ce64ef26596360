//! Deterministic book-recommendation engine for shared shelves.
//!
//! `bookworm-core` takes a list of bookworms — named readers, each with an
//! ordered shelf of books — counts per-book ownership, finds the books every
//! reader shares, and recommends books that co-occurred with a reader's shelf
//! on other shelves. All operations are deterministic — identical inputs
//! always produce identical outputs, byte-for-byte.
//!
//! See <https://github.com/bookwormhq/bookworm-engine> for the full platform.

pub mod loader;
pub mod recommend;
pub mod shelf;
pub mod types;

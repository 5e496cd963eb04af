//! Scratch storage for per-request files.
//!
//! Uploads are staged on disk for the duration of one conversion and removed
//! on every exit path. Staged names combine a random per-request identifier
//! with the sanitized client filename, so two concurrent uploads of the same
//! file never collide.

mod scratch;

pub use scratch::{sanitize_filename, ScratchFile, ScratchStorage, StorageError};

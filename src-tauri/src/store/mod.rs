//! Per-user document storage.

pub mod documents;
pub mod types;

pub use documents::{UserDocumentStore, DATABASE_FILE};
pub use types::UserDocument;

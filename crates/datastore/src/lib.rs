//! Data-access layer and view-state contract for the FAQ tool.
//!
//! The [`repository::FaqRepository`] facade is the only place that talks to
//! the remote document store; everything else in the application is view
//! glue. The facade is generic over [`store::DocumentStore`] so the same
//! semantics run against the live HTTP transport in the browser and against
//! [`memory::MemoryStore`] in the test suite.

pub mod error;
pub mod memory;
pub mod repository;
pub mod store;
pub mod view_state;

pub use error::DataError;
pub use repository::FaqRepository;
pub use store::{Document, DocumentStore, StoreError};

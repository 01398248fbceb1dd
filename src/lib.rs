//! Contact Book Core - validation, storage, and persistence for a
//! single-user contact book.
//!
//! This library is the engine behind an interactive contact manager: it holds
//! an ordered collection of validated contacts, checks phone and email
//! formats before any mutation, and round-trips the collection to a single
//! versioned file. Front ends (GUI, CLI, or web form) are external
//! collaborators: they call [`ContactStore::load`] once at startup, one store
//! operation per user action, and [`ContactStore::save`] at shutdown.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (`PhoneNumber`, `EmailAddress`)
//! - **models**: the `Contact` record
//! - **store**: the ordered in-memory store with add/delete/get/list
//! - **codec**: the versioned file encoding of a contact sequence
//! - **error**: custom error types for precise error handling
//! - **config**: data-file path configuration from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::ContactStore;
//!
//! let mut store = ContactStore::new();
//! store.add("John Doe", "010-1234-5678", "john@example.com")?;
//! assert_eq!(store.list().len(), 1);
//! # Ok::<(), contact_book::ValidationError>(())
//! ```

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, DecodeError, IndexError, PersistenceError};
pub use models::Contact;
pub use store::ContactStore;

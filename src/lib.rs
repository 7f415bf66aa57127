//! Rolodex — an in-memory address book with ordered contacts, multi-field
//! substring search, and XML persistence.
//!
//! The book keeps its contacts sorted by last name (case-insensitive, a
//! strict prefix sorting before longer names) with construction order as
//! the tie-break. Equality is a separate relation: case-insensitive across
//! all six fields, with phone formatting ignored, and it drives removal
//! rather than placement.
//!
//! # Architecture
//!
//! - **models**: the `Contact` record, its builder, and its comparison
//!   semantics
//! - **book**: the `AddressBook` collection with add/remove/search
//! - **search**: query normalization and tokenized matching
//! - **persistence**: the XML save/load boundary
//! - **error**: error types for the persistence boundary
//!
//! # Example
//!
//! ```
//! use rolodex::{AddressBook, Contact};
//!
//! let mut book = AddressBook::new();
//! book.add(
//!     Contact::builder()
//!         .first_name("Abby")
//!         .last_name("King")
//!         .phone_number("(233) 890-2345")
//!         .build(),
//! );
//!
//! assert_eq!(book.search("233-890-2345").len(), 1);
//! assert!(book.remove_all("abby"));
//! assert!(book.is_empty());
//! ```

pub mod book;
pub mod error;
pub mod models;
pub mod persistence;
pub mod search;

pub use book::AddressBook;
pub use error::{PersistenceError, PersistenceResult};
pub use models::{Contact, ContactBuilder};
pub use persistence::{load, save, DEFAULT_FILE_NAME};
pub use search::Query;

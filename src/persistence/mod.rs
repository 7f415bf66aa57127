//! XML persistence boundary for address books.

pub mod xml_store;

pub use xml_store::{load, save, DEFAULT_FILE_NAME};

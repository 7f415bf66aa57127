//! Save and load an [`AddressBook`] as an XML document.
//!
//! Document shape: an `AddressBook` root element, a `contactList` wrapper,
//! and one `Contact` element per entry with a child element for each text
//! field. Missing child elements deserialize as empty strings. Construction
//! metadata is not written: contacts are rebuilt through the builder in
//! document order, so fresh sequence numbers preserve the order the
//! document lists them in.
//!
//! Known limitation: because the original creation times are not encoded,
//! a book whose order depended on last-name ties broken by creation time
//! only keeps that order across a round trip if the document already lists
//! the contacts in book order — which [`save`] always does.

use crate::book::AddressBook;
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used when the caller passes an empty name.
pub const DEFAULT_FILE_NAME: &str = "addressBook";

const XML_SUFFIX: &str = ".xml";

/// Root document element.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "AddressBook")]
struct AddressBookDocument {
    #[serde(rename = "contactList", default)]
    contact_list: ContactList,
}

/// Wrapper element holding the contact entries.
#[derive(Debug, Serialize, Deserialize, Default)]
struct ContactList {
    #[serde(rename = "Contact", default)]
    contacts: Vec<ContactElement>,
}

/// One `Contact` element. Field names follow the document schema, not Rust
/// convention.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
struct ContactElement {
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "lastName")]
    last_name: String,
    #[serde(rename = "phoneNumber")]
    phone_number: String,
    address: String,
    email: String,
    note: String,
}

impl From<&Contact> for ContactElement {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            phone_number: contact.phone_number().to_string(),
            address: contact.postal_address().to_string(),
            email: contact.email().to_string(),
            note: contact.note().to_string(),
        }
    }
}

impl ContactElement {
    fn into_contact(self) -> Contact {
        Contact::builder()
            .first_name(self.first_name)
            .last_name(self.last_name)
            .phone_number(self.phone_number)
            .postal_address(self.address)
            .email(self.email)
            .note(self.note)
            .build()
    }
}

impl From<&AddressBook> for AddressBookDocument {
    fn from(book: &AddressBook) -> Self {
        Self {
            contact_list: ContactList {
                contacts: book.iter().map(ContactElement::from).collect(),
            },
        }
    }
}

/// Resolve `directory` + `file_name` into the document path: an empty name
/// falls back to [`DEFAULT_FILE_NAME`], and the `.xml` suffix is appended
/// if absent.
fn resolve_path(directory: &Path, file_name: &str) -> PathBuf {
    let name = if file_name.is_empty() {
        DEFAULT_FILE_NAME
    } else {
        file_name
    };
    if name.ends_with(XML_SUFFIX) {
        directory.join(name)
    } else {
        directory.join(format!("{name}{XML_SUFFIX}"))
    }
}

/// Serialize the address book to an XML file and return the path written.
///
/// An empty `file_name` defaults to `"addressBook"`; the `.xml` suffix is
/// appended if absent. Any existing file at the resolved path is
/// overwritten without warning. Contacts are written in their current
/// placement order. The output is pretty-printed.
///
/// # Errors
///
/// Returns [`PersistenceError::Io`] when the file cannot be written.
pub fn save(
    book: &AddressBook,
    directory: impl AsRef<Path>,
    file_name: &str,
) -> PersistenceResult<PathBuf> {
    let path = resolve_path(directory.as_ref(), file_name);
    let document = AddressBookDocument::from(book);

    let mut xml = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    document.serialize(serializer)?;

    // fs::write opens, writes, and closes in one scope; the handle is
    // released on every path.
    fs::write(&path, xml)?;
    info!(path = %path.display(), contacts = book.len(), "saved address book");
    Ok(path)
}

/// Read the XML file at `directory` + `file_name` and rebuild the address
/// book, contacts in document order.
///
/// The `.xml` suffix is appended if absent; an empty `file_name` defaults
/// to `"addressBook"`, mirroring [`save`].
///
/// # Errors
///
/// - [`PersistenceError::NotFound`] when no file exists at the path.
/// - [`PersistenceError::MalformedDocument`] when the content does not
///   parse as an address book document.
/// - [`PersistenceError::Io`] for any other read failure.
pub fn load(directory: impl AsRef<Path>, file_name: &str) -> PersistenceResult<AddressBook> {
    let path = resolve_path(directory.as_ref(), file_name);
    let xml = fs::read_to_string(&path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            PersistenceError::NotFound(path.clone())
        } else {
            PersistenceError::Io(err)
        }
    })?;

    let document: AddressBookDocument = quick_xml::de::from_str(&xml)?;
    let mut book = AddressBook::new();
    for element in document.contact_list.contacts {
        book.add(element.into_contact());
    }
    debug!(path = %path.display(), contacts = book.len(), "loaded address book");
    Ok(book)
}

//! Contact model and its comparison semantics.
//!
//! A [`Contact`] carries six free-text fields plus construction metadata.
//! Equality and hashing are normalization-sensitive (case-insensitive
//! everywhere, delimiter-stripped phone numbers), while placement inside an
//! address book uses a separate last-name ordering with a creation-order
//! tie-break. The two relations are deliberately distinct: contacts that
//! compare equal for removal purposes still occupy their own slots in the
//! book, so `Ord` is not implemented.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Process-wide construction counter backing the placement tie-break.
static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Strip the phone formatting characters `(`, `)`, `-` and whitespace, so
/// `"(233) 890-2345"` and `"2338902345"` compare alike.
pub(crate) fn strip_phone_formatting(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '-') && !c.is_whitespace())
        .collect()
}

/// A single address-book entry.
///
/// All six text fields are assigned once through [`ContactBuilder`] and are
/// immutable afterward. Unset fields default to the empty string.
///
/// # Example
///
/// ```
/// use rolodex::Contact;
///
/// let contact = Contact::builder()
///     .first_name("Abby")
///     .last_name("King")
///     .phone_number("(233) 890-2345")
///     .build();
/// assert_eq!(contact.last_name(), "King");
/// ```
#[derive(Debug, Clone)]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
    postal_address: String,
    email: String,
    note: String,

    /// Construction sequence number; placement tie-break only, never part
    /// of equality and never serialized.
    seq: u64,

    /// Wall-clock build time, kept as display/debug metadata. Not expected
    /// to survive a persistence round trip.
    created_at: DateTime<Utc>,
}

impl Contact {
    /// Start building a contact. Any subset of the six fields may be set.
    pub fn builder() -> ContactBuilder {
        ContactBuilder::default()
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number exactly as entered, formatting included.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Postal address.
    pub fn postal_address(&self) -> &str {
        &self.postal_address
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Free-form note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// When this contact was built.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Phone number with `(`, `)`, `-` and whitespace stripped — the form
    /// used by equality and search.
    pub fn normalized_phone(&self) -> String {
        strip_phone_formatting(&self.phone_number)
    }

    /// Total order used for placement inside an address book.
    ///
    /// Last names are compared case-insensitively code point by code point
    /// up to the shorter length; the first difference decides. A last name
    /// that is a strict prefix of the other sorts first. Identical
    /// normalized last names fall back to construction order (earlier-built
    /// sorts first), so a full tie is impossible for distinct contacts.
    ///
    /// This is not `Ord`: it disagrees with [`PartialEq`], which compares
    /// all six fields and ignores construction order.
    pub fn placement_cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .to_lowercase()
            .cmp(&other.last_name.to_lowercase())
            .then(self.seq.cmp(&other.seq))
    }
}

/// Equality ignores case in every field and formatting in phone numbers.
/// Construction metadata does not participate.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.first_name.to_lowercase() == other.first_name.to_lowercase()
            && self.last_name.to_lowercase() == other.last_name.to_lowercase()
            && self.normalized_phone() == other.normalized_phone()
            && self.postal_address.to_lowercase() == other.postal_address.to_lowercase()
            && self.email.to_lowercase() == other.email.to_lowercase()
            && self.note.to_lowercase() == other.note.to_lowercase()
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.to_lowercase().hash(state);
        self.last_name.to_lowercase().hash(state);
        self.email.to_lowercase().hash(state);
        self.postal_address.to_lowercase().hash(state);
        // The note is not hashed. Equal contacts still hash alike because
        // equality covers a superset of the hashed fields.
        self.normalized_phone().hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first name: {}, last name: {}, phone number: {}, postal address: {}, email: {}, note: {}",
            self.first_name,
            self.last_name,
            self.phone_number,
            self.postal_address,
            self.email,
            self.note
        )
    }
}

/// Builder for [`Contact`].
///
/// Every setter is optional; unset fields stay empty. `build` stamps the
/// construction metadata, so contacts built later always tie-break after
/// contacts built earlier.
#[derive(Debug, Clone, Default)]
pub struct ContactBuilder {
    first_name: String,
    last_name: String,
    phone_number: String,
    postal_address: String,
    email: String,
    note: String,
}

impl ContactBuilder {
    /// Set the first name.
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = value.into();
        self
    }

    /// Set the last name.
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = value.into();
        self
    }

    /// Set the phone number. Formatting characters are preserved as entered.
    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = value.into();
        self
    }

    /// Set the postal address.
    pub fn postal_address(mut self, value: impl Into<String>) -> Self {
        self.postal_address = value.into();
        self
    }

    /// Set the email address.
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = value.into();
        self
    }

    /// Set the note.
    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.note = value.into();
        self
    }

    /// Build the immutable contact, assigning its sequence number and
    /// creation time. Cannot fail.
    pub fn build(self) -> Contact {
        Contact {
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            postal_address: self.postal_address,
            email: self.email,
            note: self.note,
            seq: NEXT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            created_at: Utc::now(),
        }
    }
}

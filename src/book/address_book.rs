//! An address book: contacts kept sorted by their placement ordering.

use crate::models::Contact;
use crate::search::Query;
use std::fmt;
use tracing::debug;

/// An ordered collection of [`Contact`]s.
///
/// After every successful mutation the contacts are sorted by
/// [`Contact::placement_cmp`]: last name (case-insensitive), then
/// shorter-prefix-first, then construction order. The book exclusively owns
/// its contacts; a contact leaves the process only by being removed here.
///
/// Not safe for unsynchronized concurrent mutation. Callers that need
/// shared access must add their own locking.
///
/// # Example
///
/// ```
/// use rolodex::{AddressBook, Contact};
///
/// let mut book = AddressBook::new();
/// book.add(Contact::builder().last_name("Smith").build());
/// book.add(Contact::builder().last_name("King").build());
/// assert_eq!(book.contacts()[0].last_name(), "King");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The contacts in their current placement order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterate over the contacts in placement order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Add a contact and re-sort the book.
    ///
    /// The sort is stable, though the construction-order tie-break already
    /// makes full ties impossible for distinct contacts. Returns `true`;
    /// the `bool` is kept for interface fidelity with callers that treat
    /// add as fallible.
    pub fn add(&mut self, contact: Contact) -> bool {
        self.contacts.push(contact);
        self.contacts.sort_by(Contact::placement_cmp);
        true
    }

    /// Remove every contact equal to `target` (per [`Contact`] equality:
    /// case-insensitive, phone formatting ignored).
    ///
    /// Returns `true` iff at least one contact was removed. An absent
    /// target is a normal `false`, never an error.
    pub fn remove_object(&mut self, target: &Contact) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact != target);
        let removed = before - self.contacts.len();
        if removed > 0 {
            debug!(removed, "removed contacts equal to target");
        }
        removed > 0
    }

    /// Remove every contact matched by `query` (see [`search`](Self::search)).
    ///
    /// Returns `true` iff the book shrank. Removing contacts that an
    /// earlier removal already took out is an idempotent no-op.
    pub fn remove_all(&mut self, query: &str) -> bool {
        let before = self.contacts.len();
        let targets: Vec<Contact> = self.search(query).into_iter().cloned().collect();
        for target in &targets {
            self.remove_object(target);
        }
        let shrank = self.contacts.len() < before;
        debug!(
            query,
            removed = before - self.contacts.len(),
            "remove_all finished"
        );
        shrank
    }

    /// Find every contact with a field containing any token of `query`.
    ///
    /// The query is lowercased, stripped of `(`, `)`, `-`, and split on
    /// runs of space, `+`, or `&`. A contact matching several tokens or
    /// several fields still appears exactly once, in its placement-order
    /// position. An empty or all-delimiter query returns an empty result,
    /// not an error.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = Query::parse(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.contacts
            .iter()
            .filter(|contact| query.matches(contact))
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for contact in &self.contacts {
            writeln!(f, "{contact}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

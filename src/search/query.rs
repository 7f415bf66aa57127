//! Tokenized, normalization-aware search queries.
//!
//! A raw query string is lowercased, stripped of the phone formatting
//! characters `(`, `)`, `-`, and split on runs of space, `+`, or `&` into
//! tokens. A contact matches when any token is a substring of any of its
//! six fields, compared in their normalized forms.

use crate::models::contact::strip_phone_formatting;
use crate::models::Contact;
use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of the delimiters that split a raw query into tokens.
static TOKEN_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ +&]+").expect("delimiter pattern is valid"));

/// A parsed search query: lowercased, delimiter-stripped tokens.
///
/// Parsing never fails. A query that is empty, or consists only of
/// delimiters, parses to a query with no tokens, which matches nothing.
///
/// # Example
///
/// ```
/// use rolodex::Query;
///
/// let query = Query::parse("Abby & Smith+233-890");
/// assert_eq!(query.tokens(), ["abby", "smith", "233890"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Parse a raw query string into normalized tokens.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_lowercase().replace(['(', ')', '-'], "");
        let tokens = TOKEN_DELIMITERS
            .split(&normalized)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// The normalized tokens, in query order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the query produced no tokens and can match nothing.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any token is a substring of any of the contact's fields.
    ///
    /// Fields are compared lowercased; the phone number additionally has
    /// its formatting stripped, so `"233-890-2345"` finds a contact whose
    /// stored number is `"(233) 890-2345"`.
    pub fn matches(&self, contact: &Contact) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        let fields = [
            contact.first_name().to_lowercase(),
            contact.last_name().to_lowercase(),
            strip_phone_formatting(contact.phone_number()).to_lowercase(),
            contact.email().to_lowercase(),
            contact.postal_address().to_lowercase(),
            contact.note().to_lowercase(),
        ];
        self.tokens
            .iter()
            .any(|token| fields.iter().any(|field| field.contains(token.as_str())))
    }
}

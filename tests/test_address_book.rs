//! End-to-end tests for address-book ordering and removal.
//!
//! These exercise the book through its public API only: insertion order
//! never matters, placement order always does.

use rolodex::{AddressBook, Contact};

fn last_names(book: &AddressBook) -> Vec<&str> {
    book.iter().map(Contact::last_name).collect()
}

#[test]
fn test_book_stays_sorted_across_adds() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("Smith").build());
    book.add(Contact::builder().last_name("King").build());
    assert_eq!(last_names(&book), ["King", "Smith"]);

    book.add(Contact::builder().last_name("Adams").build());
    assert_eq!(last_names(&book), ["Adams", "King", "Smith"]);
}

#[test]
fn test_prefix_last_name_sorts_before_longer_one() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("King").build());
    book.add(Contact::builder().last_name("Kin").build());
    assert_eq!(last_names(&book), ["Kin", "King"]);
}

#[test]
fn test_identical_last_names_keep_creation_order() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("King").first_name("A").build());
    book.add(Contact::builder().last_name("King").first_name("B").build());
    book.add(Contact::builder().last_name("King").first_name("C").build());

    let first_names: Vec<&str> = book.iter().map(Contact::first_name).collect();
    assert_eq!(first_names, ["A", "B", "C"]);
}

#[test]
fn test_ordering_is_case_insensitive() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("smith").build());
    book.add(Contact::builder().last_name("KING").build());
    assert_eq!(last_names(&book), ["KING", "smith"]);
}

#[test]
fn test_remove_object_matches_despite_formatting_differences() {
    let mut book = AddressBook::new();
    book.add(
        Contact::builder()
            .first_name("Abby")
            .last_name("King")
            .phone_number("(233) 890-2345")
            .build(),
    );

    // Same contact re-entered with different casing and phone formatting.
    let target = Contact::builder()
        .first_name("ABBY")
        .last_name("king")
        .phone_number("233-890-2345")
        .build();

    assert!(book.remove_object(&target));
    assert!(book.is_empty());
}

#[test]
fn test_remove_object_returns_false_when_absent() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("Smith").build());

    let absent = Contact::builder().last_name("King").build();
    assert!(!book.remove_object(&absent));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_remove_all_empties_book_then_reports_nothing_left() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().first_name("Abby").last_name("King").build());
    book.add(Contact::builder().last_name("Adams").build());
    book.add(Contact::builder().note("sails in may").build());

    // Every contact contains an "a" in some field.
    assert!(book.remove_all("a"));
    assert!(book.is_empty());

    // Second pass over the now-empty book is a normal negative result.
    assert!(!book.remove_all("a"));
}

#[test]
fn test_remove_all_takes_out_duplicates_in_one_pass() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("King").build());
    book.add(Contact::builder().last_name("KING").build());
    book.add(Contact::builder().last_name("Smith").build());

    assert!(book.remove_all("king"));
    assert_eq!(last_names(&book), ["Smith"]);
}

#[test]
fn test_remove_all_with_empty_query_removes_nothing() {
    let mut book = AddressBook::new();
    book.add(Contact::builder().last_name("Smith").build());
    assert!(!book.remove_all(""));
    assert!(!book.remove_all("  + & "));
    assert_eq!(book.len(), 1);
}

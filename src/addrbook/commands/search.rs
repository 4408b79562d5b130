use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;
use crate::store::SnapshotStore;

pub fn run<'a, S: SnapshotStore>(book: &'a AddressBook<S>, term: &str) -> Result<Vec<&'a Record>> {
    if term.trim().is_empty() {
        return Err(BookError::EmptyArgument("search term"));
    }
    Ok(book.find_by_term(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn finds_by_phone_or_name() {
        let book = BookFixture::new()
            .with_contact("Anna", "0501234567")
            .with_contact("Oleg", "0991234567")
            .with_plain_contact("050 Team")
            .book;

        let names: Vec<&str> = run(&book, "050")
            .unwrap()
            .into_iter()
            .map(Record::name)
            .collect();
        assert_eq!(names, vec!["050 Team", "Anna"]);
    }

    #[test]
    fn inner_spaces_of_the_term_are_kept() {
        let book = BookFixture::new()
            .with_contact("Anna", "0501234567")
            .with_plain_contact("Team 050")
            .book;

        let names: Vec<&str> = run(&book, " 050")
            .unwrap()
            .into_iter()
            .map(Record::name)
            .collect();
        assert_eq!(names, vec!["Team 050"]);
    }

    #[test]
    fn blank_term_is_rejected() {
        let book = BookFixture::new().with_contact("Anna", "0501234567").book;
        assert!(matches!(run(&book, "  "), Err(BookError::EmptyArgument(_))));
    }
}

use crate::book::AddressBook;
use crate::error::Result;
use crate::store::SnapshotStore;

use super::lookup_mut;

pub fn set_email<S: SnapshotStore>(book: &mut AddressBook<S>, name: &str, email: &str) -> Result<()> {
    lookup_mut(book, name)?.add_email(email);
    Ok(())
}

pub fn set_address<S: SnapshotStore>(
    book: &mut AddressBook<S>,
    name: &str,
    address: &str,
) -> Result<()> {
    lookup_mut(book, name)?.add_address(address);
    Ok(())
}

pub fn set_birthday<S: SnapshotStore>(
    book: &mut AddressBook<S>,
    name: &str,
    date: &str,
) -> Result<()> {
    lookup_mut(book, name)?.add_birthday(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn sets_each_detail() {
        let mut book = BookFixture::new().with_plain_contact("Anna").book;
        set_email(&mut book, "anna", "anna@example.com").unwrap();
        set_address(&mut book, "anna", "Kyiv, Khreshchatyk 1").unwrap();
        set_birthday(&mut book, "anna", "1990-05-01").unwrap();

        let anna = book.find("Anna").unwrap();
        assert_eq!(anna.email(), Some("anna@example.com"));
        assert_eq!(anna.address(), Some("Kyiv, Khreshchatyk 1"));
        assert_eq!(anna.birthday(), Some("1990-05-01"));
    }

    #[test]
    fn missing_contact_is_reported() {
        let mut book = BookFixture::new().book;
        assert!(matches!(
            set_email(&mut book, "anna", "a@b.c"),
            Err(BookError::NameNotFound(_))
        ));
        assert!(matches!(
            set_address(&mut book, "anna", "Kyiv"),
            Err(BookError::NameNotFound(_))
        ));
        assert!(matches!(
            set_birthday(&mut book, "anna", "1990-05-01"),
            Err(BookError::NameNotFound(_))
        ));
    }

    #[test]
    fn invalid_birthday_keeps_previous() {
        let mut book = BookFixture::new().with_birthday("Anna", "1990-05-01").book;
        assert!(matches!(
            set_birthday(&mut book, "Anna", "May 1st"),
            Err(BookError::InvalidDate(_))
        ));
        assert_eq!(book.find("Anna").unwrap().birthday(), Some("1990-05-01"));
    }
}

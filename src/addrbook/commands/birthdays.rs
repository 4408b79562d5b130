use crate::birthday;
use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;
use crate::store::SnapshotStore;
use chrono::NaiveDate;

use super::lookup;

/// Days until the contact's next birthday, `-1` if none is recorded.
pub fn days_to_birthday<S: SnapshotStore>(book: &AddressBook<S>, name: &str) -> Result<i64> {
    days_to_birthday_from(book, name, birthday::today())
}

pub fn days_to_birthday_from<S: SnapshotStore>(
    book: &AddressBook<S>,
    name: &str,
    today: NaiveDate,
) -> Result<i64> {
    Ok(lookup(book, name)?.days_to_birthday_from(today))
}

/// Contacts with a birthday in the next `days` days, nearest first.
pub fn upcoming<S: SnapshotStore>(book: &AddressBook<S>, days: i64) -> Vec<(&Record, i64)> {
    book.birthdays_within(days, birthday::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::store::memory::fixtures::BookFixture;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reports_days_or_sentinel() {
        let book = BookFixture::new()
            .with_birthday("Anna", "2000-01-01")
            .with_plain_contact("Oleg")
            .book;
        assert_eq!(days_to_birthday_from(&book, "anna", ymd(2026, 1, 1)).unwrap(), 0);
        assert_eq!(days_to_birthday_from(&book, "anna", ymd(2026, 12, 30)).unwrap(), 2);
        assert_eq!(days_to_birthday(&book, "oleg").unwrap(), -1);
    }

    #[test]
    fn missing_contact_is_reported() {
        let book = BookFixture::new().book;
        assert!(matches!(
            days_to_birthday(&book, "anna"),
            Err(BookError::NameNotFound(_))
        ));
    }

    #[test]
    fn upcoming_includes_today() {
        // 2000 is a leap year, so this is a valid date even on Feb 29
        let date = birthday::today().format("2000-%m-%d").to_string();
        let book = BookFixture::new()
            .with_birthday("Anna", &date)
            .with_plain_contact("Oleg")
            .book;
        let found = upcoming(&book, 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0.name(), "Anna");
        assert_eq!(found[0].1, 0);
    }
}

use crate::birthday;
use crate::error::{BookError, Result};
use crate::field::Field;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;

/// Normalizes a contact name into its store key: trimmed and title-cased.
///
/// The first letter of every alphabetic run is upper-cased and the rest of the
/// run lower-cased, so `"o'NEIL  anna"` becomes `"O'Neil  Anna"`.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Name, phones and details only.
    Contact,
    /// A contact that also owns notes.
    NoteContact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: Field,
    created_at: DateTime<Utc>,
    tags: BTreeSet<String>,
}

impl Note {
    pub fn new<I, T>(text: &str, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::restore(text, Utc::now(), tags)
    }

    /// Rebuilds a note with a known creation time.
    pub fn restore<I, T>(text: &str, created_at: DateTime<Utc>, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        if text.is_empty() {
            return Err(BookError::EmptyNoteText);
        }
        Ok(Self {
            text: Field::plain(text),
            created_at,
            tags: collect_tags(tags)?,
        })
    }

    pub fn text(&self) -> &str {
        self.text.get()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        self.tags.insert(clean_tag(tag)?);
        Ok(())
    }

    /// Returns whether the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag.trim())
    }
}

fn clean_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(BookError::InvalidFieldValue("tag cannot be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn collect_tags<I, T>(tags: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tags.into_iter().map(|t| clean_tag(t.as_ref())).collect()
}

/// One contact: name, phones, optional details and, for note contacts, notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Field,
    phones: Vec<Field>,
    address: Option<Field>,
    email: Option<Field>,
    birthday: Option<Field>,
    notes: Option<Vec<Note>>,
}

impl Record {
    /// A plain contact without notes. The name is stored normalized.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Field::plain(normalize_name(&name.into())),
            phones: Vec::new(),
            address: None,
            email: None,
            birthday: None,
            notes: None,
        }
    }

    /// A contact that can hold notes.
    pub fn with_notes(name: impl Into<String>) -> Self {
        Self {
            notes: Some(Vec::new()),
            ..Self::new(name)
        }
    }

    pub fn kind(&self) -> RecordKind {
        if self.notes.is_some() {
            RecordKind::NoteContact
        } else {
            RecordKind::Contact
        }
    }

    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// The store key for this record.
    pub fn key(&self) -> String {
        self.name.get().to_string()
    }

    pub fn phones(&self) -> &[Field] {
        &self.phones
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().map(Field::get)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(Field::get)
    }

    pub fn birthday(&self) -> Option<&str> {
        self.birthday.as_ref().map(Field::get)
    }

    // --- phones ---

    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        let phone = Field::phone(value)?;
        if self.find_phone(value).is_some() {
            return Err(BookError::AlreadyExists(format!("phone {value}")));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.get() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        if old != new && self.find_phone(new).is_some() {
            return Err(BookError::AlreadyExists(format!("phone {new}")));
        }
        self.phones[pos].set(new)
    }

    /// Removes every matching entry; returns how many were removed.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.get() != value);
        before - self.phones.len()
    }

    pub fn find_phone(&self, value: &str) -> Option<&Field> {
        self.phones.iter().find(|p| p.get() == value)
    }

    // --- details ---

    pub fn add_email(&mut self, email: &str) {
        self.email = Some(Field::plain(email));
    }

    pub fn add_address(&mut self, address: &str) {
        self.address = Some(Field::plain(address));
    }

    pub fn add_birthday(&mut self, date: &str) -> Result<()> {
        self.birthday = Some(Field::date(date)?);
        Ok(())
    }

    pub fn birthday_date(&self) -> Option<NaiveDate> {
        self.birthday.as_ref().and_then(Field::as_date)
    }

    /// Days until the next birthday, or `-1` when none is set.
    pub fn days_to_birthday(&self) -> i64 {
        self.days_to_birthday_from(birthday::today())
    }

    pub fn days_to_birthday_from(&self, today: NaiveDate) -> i64 {
        match self.birthday_date() {
            Some(date) => birthday::days_until_next(date, today),
            None => -1,
        }
    }

    // --- notes ---

    pub fn is_note_capable(&self) -> bool {
        self.notes.is_some()
    }

    /// Notes in insertion order; `None` for plain contacts.
    pub fn notes(&self) -> Option<&[Note]> {
        self.notes.as_deref()
    }

    fn notes_mut(&mut self) -> Result<&mut Vec<Note>> {
        let name = self.name.get().to_string();
        self.notes.as_mut().ok_or(BookError::NotNoteCapable(name))
    }

    pub fn add_note<I, T>(&mut self, text: &str, tags: I) -> Result<&Note>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let notes = self.notes_mut()?;
        notes.push(Note::new(text, tags)?);
        Ok(&notes[notes.len() - 1])
    }

    /// Appends an already-built note, keeping its timestamp.
    pub fn push_note(&mut self, note: Note) -> Result<()> {
        self.notes_mut()?.push(note);
        Ok(())
    }

    /// Edits the first note whose text equals `old_text`.
    ///
    /// Returns `false` when no note matched; nothing changes in that case.
    pub fn edit_note(
        &mut self,
        old_text: &str,
        new_text: &str,
        tags: Option<&[String]>,
    ) -> Result<bool> {
        let notes = self.notes_mut()?;
        if new_text.is_empty() {
            return Err(BookError::EmptyNoteText);
        }
        let new_tags = tags.map(collect_tags).transpose()?;
        let Some(note) = notes.iter_mut().find(|n| n.text() == old_text) else {
            return Ok(false);
        };
        note.text = Field::plain(new_text);
        if let Some(new_tags) = new_tags {
            note.tags = new_tags;
        }
        Ok(true)
    }

    /// Removes every note with exactly this text; returns how many were removed.
    pub fn remove_note(&mut self, text: &str) -> Result<usize> {
        if text.is_empty() {
            return Err(BookError::EmptyArgument("note text"));
        }
        let notes = self.notes_mut()?;
        let before = notes.len();
        notes.retain(|n| n.text() != text);
        Ok(before - notes.len())
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Result<Vec<&Note>> {
        let notes = self
            .notes
            .as_ref()
            .ok_or_else(|| BookError::NotNoteCapable(self.name.get().to_string()))?;
        Ok(notes.iter().filter(|n| n.has_tag(tag)).collect())
    }

    pub fn clear_notes(&mut self) -> Result<usize> {
        let notes = self.notes_mut()?;
        let count = notes.len();
        notes.clear();
        Ok(count)
    }
}

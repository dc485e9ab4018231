//! The contact directory and its persistence.
//!
//! [`ContactDirectory`] owns the ordered list of contacts and a
//! [`ContactStorage`] backend. Every mutation is staged on a copy of the
//! list, the copy is persisted, and only then does it replace the live list.
//! A failed save therefore leaves both the list and the stored text exactly
//! as they were before the call.

pub mod codec;

use crate::domain::birth_date;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use crate::repositories::{ContactStorage, FileStorage};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub use codec::{decode_line, encode_contact, encode_contacts, LineError};

/// Outcome of reading the backing storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines turned into contacts.
    pub loaded: usize,
    /// Non-blank lines that were skipped.
    pub errors: usize,
    /// Nothing was stored yet; the store starts empty.
    pub missing: bool,
}

/// Ordered contact list persisted to a [`ContactStorage`].
pub struct ContactDirectory<S: ContactStorage = FileStorage> {
    contacts: Vec<Contact>,
    storage: S,
    reference_date: NaiveDate,
}

impl ContactDirectory<FileStorage> {
    /// Open the directory file at `path`, loading whatever it holds.
    pub fn open_file(path: impl Into<PathBuf>) -> DirectoryResult<Self> {
        Self::open(FileStorage::new(path))
    }
}

impl<S: ContactStorage> ContactDirectory<S> {
    /// Empty directory over `storage`. Nothing is read until [`load`](Self::load).
    pub fn new(storage: S) -> Self {
        Self {
            contacts: Vec::new(),
            storage,
            reference_date: birth_date::today(),
        }
    }

    /// Create the directory and load the stored contacts.
    pub fn open(storage: S) -> DirectoryResult<Self> {
        let mut directory = Self::new(storage);
        directory.load()?;
        Ok(directory)
    }

    /// Use `date` as "today" when validating stored birth dates.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Read the backing storage, skipping lines that do not parse.
    ///
    /// Missing storage is not an error. The current contacts are replaced
    /// only when at least one line loaded.
    ///
    /// # Errors
    ///
    /// Only unexpected read failures are returned; malformed lines are
    /// counted in the report.
    pub fn load(&mut self) -> DirectoryResult<LoadReport> {
        let target = self.storage.describe();
        let content = match self.storage.read()? {
            Some(content) => content,
            None => {
                info!(
                    "Contact file {} not found; it will be created on first save",
                    target
                );
                return Ok(LoadReport {
                    missing: true,
                    ..LoadReport::default()
                });
            }
        };

        let mut report = LoadReport::default();
        let mut parsed = Vec::new();

        for (number, raw) in content.split(|&b| b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = match std::str::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    let e = LineError::from(e);
                    warn!(line = number + 1, error = %e, "Skipping undecodable line");
                    report.errors += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line, self.reference_date) {
                Ok(contact) => {
                    debug!(line = number + 1, name = %contact.full_name(), "Loaded contact");
                    parsed.push(contact);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!(line = number + 1, error = %e, "Skipping malformed line: {}", line);
                    report.errors += 1;
                }
            }
        }

        if report.loaded > 0 {
            self.contacts = parsed;
        }

        info!(
            loaded = report.loaded,
            errors = report.errors,
            "Loaded contacts from {}",
            target
        );
        Ok(report)
    }

    /// Write every contact to the backing storage, replacing its content.
    pub fn save(&mut self) -> DirectoryResult<()> {
        let contacts = std::mem::take(&mut self.contacts);
        let result = self.persist(&contacts);
        self.contacts = contacts;
        result
    }

    /// Append a contact and save.
    ///
    /// Returns `false` when the save failed; the contact is then not added
    /// and a warning is logged.
    pub fn add_contact(&mut self, contact: Contact) -> bool {
        let mut staged = self.contacts.clone();
        staged.push(contact);

        match self.commit(staged) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save new contact; change reverted");
                false
            }
        }
    }

    /// Remove the contact at `index` and save.
    ///
    /// Returns `Ok(false)` when the save failed; the contact is then kept
    /// and a warning is logged.
    ///
    /// # Errors
    ///
    /// `ContactIndexOutOfRange` if `index` is past the end. Nothing is
    /// written in that case.
    pub fn remove_contact(&mut self, index: usize) -> DirectoryResult<bool> {
        self.check_index(index)?;

        let mut staged = self.contacts.clone();
        staged.remove(index);

        match self.commit(staged) {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!(index, error = %e, "Failed to save contact removal; change reverted");
                Ok(false)
            }
        }
    }

    /// Replace the contact at `index` and save.
    ///
    /// # Errors
    ///
    /// `ContactIndexOutOfRange` if `index` is past the end, before any I/O.
    /// `Persistence` if the save failed; the previous contact is kept.
    pub fn edit_contact(&mut self, index: usize, contact: Contact) -> DirectoryResult<()> {
        self.check_index(index)?;

        let mut staged = self.contacts.clone();
        staged[index] = contact;

        self.commit(staged).map_err(|e| {
            warn!(index, error = %e, "Failed to save contact edit; change reverted");
            e
        })
    }

    fn check_index(&self, index: usize) -> DirectoryResult<()> {
        if index >= self.contacts.len() {
            return Err(DirectoryError::ContactIndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(())
    }

    /// Persist `staged` and make it the live list only on success.
    fn commit(&mut self, staged: Vec<Contact>) -> DirectoryResult<()> {
        self.persist(&staged)?;
        self.contacts = staged;
        Ok(())
    }

    fn persist(&mut self, contacts: &[Contact]) -> DirectoryResult<()> {
        let text = encode_contacts(contacts);
        self.storage
            .write(&text)
            .map_err(|source| DirectoryError::Persistence {
                target: self.storage.describe(),
                source,
            })?;
        info!("Saved {} contacts to {}", contacts.len(), self.storage.describe());
        Ok(())
    }
}

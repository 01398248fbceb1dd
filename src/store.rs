//! The in-memory contact store and its persistence round-trip.

use crate::codec;
use crate::domain::ValidationError;
use crate::error::{IndexError, PersistenceResult};
use crate::models::Contact;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// An ordered, in-memory collection of contacts.
///
/// Insertion order is display order and a contact's position is its only
/// identity; `delete` and `get` address contacts by index. Every contact held
/// by the store satisfies the phone/email format invariants, enforced once at
/// construction by the validated field types.
///
/// The store owns the persistence round-trip: `load` replaces the contents
/// from a file (falling back to empty on any failure) and `save` rewrites the
/// file from the full sequence. There is no partial mutation: a failed `add`
/// or `delete` leaves the sequence exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a contact built from raw field values.
    ///
    /// On success the new contact is at the end of the sequence and a
    /// reference to it is returned. On failure the store is unchanged.
    ///
    /// The name is accepted as-is; rejecting empty names is a front-end
    /// decision.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the phone or email fails its format check.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        phone: &str,
        email: &str,
    ) -> Result<&Contact, ValidationError> {
        let contact = Contact::new(name, phone, email)?;
        self.contacts.push(contact);
        // SAFETY: the push above guarantees a last element
        Ok(self.contacts.last().expect("contact was just appended"))
    }

    /// Remove and return the contact at `index`.
    ///
    /// All later contacts shift down one position, keeping relative order.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `index` is past the end (including when the
    /// store is empty); the store is unchanged in that case.
    pub fn delete(&mut self, index: usize) -> Result<Contact, IndexError> {
        if index >= self.contacts.len() {
            return Err(IndexError {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(self.contacts.remove(index))
    }

    /// Get the contact at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `index` is past the end.
    pub fn get(&self, index: usize) -> Result<&Contact, IndexError> {
        self.contacts.get(index).ok_or(IndexError {
            index,
            len: self.contacts.len(),
        })
    }

    /// Read-only view of the full sequence in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replace the contents with the sequence decoded from `source`.
    ///
    /// Best-effort recovery: a missing, unreadable, or corrupt file resets
    /// the store to empty instead of returning an error, so callers cannot
    /// distinguish "empty on disk" from "corrupt on disk". The fallback is
    /// reported through a `tracing` warning. Returns the number of contacts
    /// now held.
    pub fn load(&mut self, source: impl AsRef<Path>) -> usize {
        let source = source.as_ref();

        self.contacts = match fs::read(source) {
            Ok(bytes) => match codec::decode(&bytes) {
                Ok(contacts) => {
                    debug!(
                        path = %source.display(),
                        contacts = contacts.len(),
                        "loaded contact file"
                    );
                    contacts
                }
                Err(err) => {
                    warn!(
                        path = %source.display(),
                        error = %err,
                        "contact file is unreadable, starting with an empty store"
                    );
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    path = %source.display(),
                    "no contact file found, starting with an empty store"
                );
                Vec::new()
            }
            Err(err) => {
                warn!(
                    path = %source.display(),
                    error = %err,
                    "failed to read contact file, starting with an empty store"
                );
                Vec::new()
            }
        };

        self.contacts.len()
    }

    /// Encode the full sequence and replace the file at `dest` with it.
    ///
    /// The data is written to a sibling temp file and renamed into place, so
    /// a failed save never truncates a previously good file. Idempotent;
    /// safe to call as often as the front end likes.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if encoding or the write fails. No retry
    /// is attempted.
    pub fn save(&self, dest: impl AsRef<Path>) -> PersistenceResult<()> {
        let dest = dest.as_ref();
        let bytes = codec::encode(&self.contacts)?;

        let tmp = sibling_tmp_path(dest);
        fs::write(&tmp, &bytes)?;
        if let Err(err) = fs::rename(&tmp, dest) {
            // Don't leave the temp file behind on a failed rename
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        debug!(
            path = %dest.display(),
            contacts = self.contacts.len(),
            "saved contact file"
        );
        Ok(())
    }
}

/// Temp-file path next to `dest`, so the final rename stays on one filesystem.
fn sibling_tmp_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("contacts"));
    name.push(".tmp");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_two() -> ContactStore {
        let mut store = ContactStore::new();
        store
            .add("John Doe", "010-1234-5678", "john@example.com")
            .unwrap();
        store
            .add("Jane Roe", "011-2222-3333", "jane@example.com")
            .unwrap();
        store
    }

    #[test]
    fn test_add_appends() {
        let mut store = store_with_two();
        let added = store
            .add("Kim", "010-9999-0000", "kim@example.com")
            .unwrap();
        assert_eq!(added.name, "Kim");
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[2].name, "Kim");
        // Prior order intact
        assert_eq!(store.list()[0].name, "John Doe");
        assert_eq!(store.list()[1].name, "Jane Roe");
    }

    #[test]
    fn test_add_invalid_leaves_store_unchanged() {
        let mut store = store_with_two();
        let before = store.clone();

        let err = store
            .add("Bad Phone", "123-456-7890", "ok@example.com")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPhone("123-456-7890".to_string())
        );
        assert_eq!(store, before);

        let err = store
            .add("Bad Email", "010-1234-5678", "not-an-email")
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("not-an-email".to_string()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut store = store_with_two();
        store
            .add("Kim", "010-9999-0000", "kim@example.com")
            .unwrap();

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "Jane Roe");
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "John Doe");
        assert_eq!(store.list()[1].name, "Kim");
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let mut store = store_with_two();
        let err = store.delete(2).unwrap_err();
        assert_eq!(err, IndexError { index: 2, len: 2 });
        assert_eq!(store.len(), 2);

        let mut empty = ContactStore::new();
        let err = empty.delete(0).unwrap_err();
        assert_eq!(err, IndexError { index: 0, len: 0 });
    }

    #[test]
    fn test_get() {
        let store = store_with_two();
        assert_eq!(store.get(0).unwrap().name, "John Doe");
        assert_eq!(store.get(1).unwrap().name, "Jane Roe");
        assert_eq!(store.get(5).unwrap_err(), IndexError { index: 5, len: 2 });
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ContactStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_sibling_tmp_path() {
        let tmp = sibling_tmp_path(Path::new("/data/contacts.json"));
        assert_eq!(tmp, Path::new("/data/contacts.json.tmp"));
    }
}

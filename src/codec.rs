//! Persistence codec: a versioned, self-describing file encoding for an
//! ordered sequence of contacts.
//!
//! The on-disk format is a JSON envelope:
//!
//! ```json
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "홍길동", "phone": "010-1234-5678", "email": "hong@example.com" }
//!   ]
//! }
//! ```
//!
//! The envelope round-trips exactly (`decode(encode(x)) == x`) for any valid
//! sequence, including the empty sequence and non-ASCII text. Records whose
//! phone or email no longer satisfy the format invariants are rejected at
//! decode time by the validating field types.

use crate::error::{DecodeError, DecodeResult};
use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// Version written into every encoded file. Decode rejects anything else.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    contacts: &'a [Contact],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    contacts: Vec<Contact>,
}

// Cheap first pass so a future-version file reports UnsupportedVersion
// instead of a record-level parse failure.
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Encode an ordered contact sequence into the versioned file format.
pub fn encode(contacts: &[Contact]) -> serde_json::Result<Vec<u8>> {
    let envelope = EnvelopeRef {
        version: FORMAT_VERSION,
        contacts,
    };
    serde_json::to_vec_pretty(&envelope)
}

/// Decode a contact sequence from the versioned file format.
///
/// # Errors
///
/// Returns `DecodeError::Malformed` for truncated, empty, non-JSON, or
/// structurally invalid input (including records with invalid phone/email
/// fields), and `DecodeError::UnsupportedVersion` when the envelope declares
/// a version other than [`FORMAT_VERSION`].
pub fn decode(bytes: &[u8]) -> DecodeResult<Vec<Contact>> {
    let probe: VersionProbe = serde_json::from_slice(bytes)?;
    if probe.version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: probe.version,
            supported: FORMAT_VERSION,
        });
    }

    let envelope: Envelope = serde_json::from_slice(bytes)?;
    Ok(envelope.contacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contacts() -> Vec<Contact> {
        vec![
            Contact::new("John Doe", "010-1234-5678", "john@example.com").unwrap(),
            Contact::new("홍길동", "011-9876-5432", "hong.gd+home@example.co.kr").unwrap(),
        ]
    }

    #[test]
    fn test_round_trip() {
        let contacts = sample_contacts();
        let bytes = encode(&contacts).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, contacts);
    }

    #[test]
    fn test_round_trip_empty() {
        let bytes = encode(&[]).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(matches!(decode(b""), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_truncated_input_fails() {
        let bytes = encode(&sample_contacts()).unwrap();
        let truncated = &bytes[..bytes.len() / 2];
        assert!(matches!(decode(truncated), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_non_json_fails() {
        assert!(decode(b"\x00\x01\x02not a contact file").is_err());
    }

    #[test]
    fn test_decode_missing_contacts_field_fails() {
        assert!(matches!(
            decode(br#"{"version":1}"#),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_unsupported_version() {
        let result = decode(br#"{"version":2,"contacts":[]}"#);
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedVersion {
                found: 2,
                supported: FORMAT_VERSION
            })
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_record() {
        // Structurally valid JSON whose record fails field validation
        let bytes =
            br#"{"version":1,"contacts":[{"name":"x","phone":"nope","email":"x@example.com"}]}"#;
        assert!(matches!(decode(bytes), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_encode_preserves_order() {
        let contacts = sample_contacts();
        let bytes = encode(&contacts).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded[0].name, "John Doe");
        assert_eq!(decoded[1].name, "홍길동");
    }
}

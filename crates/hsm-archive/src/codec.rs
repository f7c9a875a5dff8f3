//! Archive token codec.
//!
//! A token is six positional fields joined by `:`:
//! `name:type:number:s3url:posixdir:snapshots`.
//!
//! Field values are split naively. A URL such as `https://host` contains the
//! delimiter and therefore cannot be passed in a token; such definitions
//! belong in the config file.

use crate::error::{DecodeError, EncodeError};
use crate::ArchiveDescriptor;

/// Separator between token fields.
pub const FIELD_DELIMITER: char = ':';

/// Number of fields in a token.
pub const FIELD_COUNT: usize = 6;

/// Human-readable token layout, used in help text.
pub const TOKEN_FORMAT: &str = "name:type:number:s3url:posixdir:snapshots";

/// Decode a command-line archive token.
///
/// Name, type, URL and directory are taken verbatim. The archive number is
/// a base-10 `u32` and the snapshots flag uses [`parse_bool`].
pub fn decode(token: &str) -> Result<ArchiveDescriptor, DecodeError> {
    let fields: Vec<&str> = token.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            token: token.to_string(),
            found: fields.len(),
        });
    }

    let archive_id = fields[2]
        .parse::<u32>()
        .map_err(|source| DecodeError::ArchiveId {
            token: token.to_string(),
            value: fields[2].to_string(),
            source,
        })?;

    let snapshots_enabled = parse_bool(fields[5]).ok_or_else(|| DecodeError::Snapshots {
        token: token.to_string(),
        value: fields[5].to_string(),
    })?;

    Ok(ArchiveDescriptor {
        name: fields[0].to_string(),
        kind: fields[1].to_string(),
        archive_id,
        backend_url: fields[3].to_string(),
        backend_path: fields[4].to_string(),
        snapshots_enabled,
    })
}

/// Encode a descriptor as a token that [`decode`] maps back to an equal value.
pub fn encode(archive: &ArchiveDescriptor) -> Result<String, EncodeError> {
    if let Some(field) = unrepresentable_field(archive) {
        return Err(EncodeError::Unrepresentable { field });
    }

    Ok(format!(
        "{}:{}:{}:{}:{}:{}",
        archive.name,
        archive.kind,
        archive.archive_id,
        archive.backend_url,
        archive.backend_path,
        archive.snapshots_enabled
    ))
}

/// Parse the permissive boolean grammar accepted in tokens.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub(crate) fn unrepresentable_field(archive: &ArchiveDescriptor) -> Option<&'static str> {
    [
        ("name", &archive.name),
        ("type", &archive.kind),
        ("s3_url", &archive.backend_url),
        ("posix_dir", &archive.backend_path),
    ]
    .into_iter()
    .find(|(_, value)| value.contains(FIELD_DELIMITER))
    .map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_all_fields() {
        let archive = decode("s3a:s3:7:bucket.example.com:/var/cache:true").unwrap();

        assert_eq!(archive.name, "s3a");
        assert_eq!(archive.kind, "s3");
        assert_eq!(archive.archive_id, 7);
        assert_eq!(archive.backend_url, "bucket.example.com");
        assert_eq!(archive.backend_path, "/var/cache");
        assert!(archive.snapshots_enabled);
    }

    #[test]
    fn test_decode_empty_fields() {
        let archive = decode("a:posix:5:::false").unwrap();

        assert_eq!(archive.name, "a");
        assert_eq!(archive.kind, "posix");
        assert_eq!(archive.archive_id, 5);
        assert_eq!(archive.backend_url, "");
        assert_eq!(archive.backend_path, "");
        assert!(!archive.snapshots_enabled);
    }

    #[test]
    fn test_decode_accepts_unknown_kind() {
        let archive = decode("x:tape:3:::0").unwrap();
        assert_eq!(archive.kind, "tape");
    }

    #[test]
    fn test_decode_too_few_fields() {
        for token in ["", "a", "a:posix:5", "a:posix:5:url:dir"] {
            let err = decode(token).unwrap_err();
            assert!(
                matches!(err, DecodeError::FieldCount { .. }),
                "{token:?} should fail on field count"
            );
        }
    }

    #[test]
    fn test_decode_too_many_fields() {
        let err = decode("a:posix:5:url:dir:true:extra").unwrap_err();
        assert!(matches!(err, DecodeError::FieldCount { found: 7, .. }));
        assert_eq!(err.token(), "a:posix:5:url:dir:true:extra");
    }

    #[test]
    fn test_decode_url_with_scheme_is_ambiguous() {
        // "https://x" splits into two fields
        let err = decode("s3a:s3:7:https://x::true").unwrap_err();
        assert!(matches!(err, DecodeError::FieldCount { found: 7, .. }));
    }

    #[test]
    fn test_decode_non_numeric_id() {
        let err = decode("a:posix:five:::false").unwrap_err();
        assert!(matches!(err, DecodeError::ArchiveId { .. }));
        assert!(err.to_string().contains("a:posix:five:::false"));
    }

    #[test]
    fn test_decode_negative_id() {
        let err = decode("a:posix:-1:::false").unwrap_err();
        assert!(matches!(err, DecodeError::ArchiveId { .. }));
    }

    #[test]
    fn test_decode_signed_positive_id() {
        let archive = decode("a:posix:+12:::f").unwrap();
        assert_eq!(archive.archive_id, 12);
    }

    #[test]
    fn test_decode_bad_snapshots_flag() {
        let err = decode("a:posix:5:::yes").unwrap_err();
        assert!(matches!(err, DecodeError::Snapshots { ref value, .. } if value == "yes"));
    }

    #[test]
    fn test_parse_bool_grammar() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
        for value in ["", "yes", "no", "tRUE", " true", "2"] {
            assert_eq!(parse_bool(value), None, "{value}");
        }
    }

    #[test]
    fn test_encode_rejects_delimiter() {
        let mut archive = ArchiveDescriptor::new("a", "s3", 1);
        archive.backend_url = "http://host".to_string();

        assert_eq!(
            encode(&archive),
            Err(EncodeError::Unrepresentable { field: "s3_url" })
        );
    }

    #[test]
    fn test_encode_layout() {
        let mut archive = ArchiveDescriptor::new("b", "posix", 2);
        archive.backend_path = "/archive".to_string();

        assert_eq!(encode(&archive).unwrap(), "b:posix:2::/archive:false");
    }

    fn field() -> impl Strategy<Value = String> {
        "[^:]{0,16}"
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trip(
            name in field(),
            kind in field(),
            archive_id in any::<u32>(),
            backend_url in field(),
            backend_path in field(),
            snapshots_enabled in any::<bool>(),
        ) {
            let archive = ArchiveDescriptor {
                name,
                kind,
                archive_id,
                backend_url,
                backend_path,
                snapshots_enabled,
            };
            let token = encode(&archive).unwrap();
            prop_assert_eq!(decode(&token).unwrap(), archive);
        }
    }
}

//! Error types for KTX handling.

use thiserror::Error;

use crate::validate::Violation;

/// Errors that can occur when working with KTX headers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer does not start with the KTX 1.1 identifier.
    #[error("not a KTX 1.1 file: identifier {identifier:02x?}")]
    NotAKtxFile { identifier: [u8; 12] },

    /// The identifier matched but the buffer ends inside the header.
    #[error("truncated KTX header: needed {needed} bytes but only {available} available")]
    Truncated { needed: usize, available: usize },

    /// A name or literal did not match any known enumerant.
    #[error("unknown {kind} value: {value:?}")]
    UnknownEnumerant { kind: &'static str, value: String },

    /// A key/value metadata entry could not be decoded.
    #[error("malformed key/value entry at offset {offset}: {reason}")]
    MalformedMetadata { offset: usize, reason: &'static str },

    /// A strict-mode check failed.
    #[error("strict validation failed: {0}")]
    Violation(#[from] Violation),
}

/// Result type for KTX operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_failures_surface_as_truncated() {
        let err = crate::parse(&crate::KtxHeader::IDENTIFIER).unwrap_err();
        assert_eq!(
            err,
            Error::Truncated {
                needed: 64,
                available: 12
            }
        );
    }

    #[test]
    fn test_violation_converts() {
        let err = Error::from(Violation::ForeignByteOrder);
        assert_eq!(
            err.to_string(),
            "strict validation failed: header byte order does not match the host"
        );
    }
}

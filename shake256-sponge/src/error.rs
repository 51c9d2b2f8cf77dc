use thiserror::Error;

/// Errors when building a [`Digest`](crate::Digest) or
/// [`NativeDigest`](crate::NativeDigest) from untrusted input.
///
/// Hashing itself never fails.
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum DigestError {
    #[error("expected {expected} units for a digest, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex digest: {0}")]
    Hex(hex::FromHexError),
}

impl From<hex::FromHexError> for DigestError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err)
    }
}

//! The 256-bit output of the sponge, in its two representations.
//!
//! - [`Digest`] is the canonical form: 32 bytes, in the order they come out
//!   of the rate region. This is the form to store or send.
//! - [`NativeDigest`] holds the same value as eight `u32` words, word `i`
//!   being bytes `4i..4i+4` read big-endian. Its memory layout is the host's,
//!   so it is meant for in-process use only.

use core::{fmt, str::FromStr};

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
use zeroize::Zeroize;

use crate::{DigestError, DIGEST_BYTES, DIGEST_WORDS};

/// A SHAKE256-256 digest in canonical byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Zeroize)]
pub struct Digest([u8; DIGEST_BYTES]);

/// A SHAKE256-256 digest as native 32-bit words.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Zeroize,
    Immutable,
    KnownLayout,
    FromBytes,
    IntoBytes,
)]
#[repr(transparent)]
pub struct NativeDigest([u32; DIGEST_WORDS]);

impl Digest {
    /// Wrap 32 canonical bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// The canonical bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Unwrap into the canonical bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_BYTES] {
        self.0
    }

    /// Re-encode as native words.
    #[must_use]
    pub fn to_native(&self) -> NativeDigest {
        let mut words = [0u32; DIGEST_WORDS];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        NativeDigest(words)
    }
}

impl NativeDigest {
    /// Wrap eight native words.
    #[must_use]
    pub const fn new(words: [u32; DIGEST_WORDS]) -> Self {
        Self(words)
    }

    /// The native words, word `i` holding bytes `4i..4i+4` big-endian.
    #[must_use]
    pub const fn words(&self) -> &[u32; DIGEST_WORDS] {
        &self.0
    }

    /// Unwrap into the native words.
    #[must_use]
    pub const fn into_words(self) -> [u32; DIGEST_WORDS] {
        self.0
    }

    /// The words exactly as they sit in memory on this host.
    ///
    /// On little-endian targets these bytes are *not* the canonical digest;
    /// use [`NativeDigest::to_digest`] for anything leaving the process.
    #[must_use]
    pub fn as_native_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Re-encode in canonical byte order.
    #[must_use]
    pub fn to_digest(&self) -> Digest {
        let mut bytes = [0u8; DIGEST_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(&self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest(bytes)
    }
}

impl From<[u8; DIGEST_BYTES]> for Digest {
    fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<NativeDigest> for Digest {
    fn from(native: NativeDigest) -> Self {
        native.to_digest()
    }
}

impl From<[u32; DIGEST_WORDS]> for NativeDigest {
    fn from(words: [u32; DIGEST_WORDS]) -> Self {
        Self(words)
    }
}

impl From<Digest> for NativeDigest {
    fn from(digest: Digest) -> Self {
        digest.to_native()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u32]> for NativeDigest {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = DigestError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; DIGEST_BYTES] = bytes
            .try_into()
            .map_err(|_| DigestError::InvalidLength {
                expected: DIGEST_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<&[u32]> for NativeDigest {
    type Error = DigestError;

    fn try_from(words: &[u32]) -> Result<Self, Self::Error> {
        let words: [u32; DIGEST_WORDS] = words
            .try_into()
            .map_err(|_| DigestError::InvalidLength {
                expected: DIGEST_WORDS,
                actual: words.len(),
            })?;
        Ok(Self(words))
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    /// Parse 64 hex digits, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl fmt::Debug for NativeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeDigest")
            .field(&format_args!("{:08x?}", self.0))
            .finish()
    }
}

//! SHAKE256 with 256-bit output, as a Keccak-p\[1600, 24\] sponge.
//!
//! This is the hash engine of the XMSS signature scheme (SHAKE256/256
//! parameter sets): every chain step, tree node and message digest there is
//! one or more absorb calls followed by a single squeeze.
//!
//! # Overview
//!
//! - [`keccak`] holds the permutation.
//! - [`Sponge`] absorbs input in two representations, bytes
//!   ([`Sponge::absorb`]) and native 32-bit words ([`Sponge::absorb_native`]),
//!   which may be interleaved freely. Both go through the same lane-merging
//!   code, so a word and its big-endian bytes always hash the same.
//! - Squeezing consumes the sponge and returns a [`Digest`] (canonical bytes)
//!   or a [`NativeDigest`] (host-order words).
//!
//! ```
//! use shake256_sponge::{shake256_256, Sponge};
//!
//! let mut sponge = Sponge::new();
//! sponge.absorb(&[0u8; 32]).absorb_native(&[0x0000_0003, 0xdead_beef]);
//! let digest = sponge.squeeze();
//!
//! let mut bytes = [0u8; 40];
//! bytes[32..36].copy_from_slice(&3u32.to_be_bytes());
//! bytes[36..].copy_from_slice(&0xdead_beefu32.to_be_bytes());
//! assert_eq!(digest, shake256_256(&bytes));
//! ```
//!
//! # Features
//!
//! - `std` (default): [`std::io::Write`] for [`Sponge`], `std::error::Error`
//!   for [`DigestError`].
//! - `digest` (default): the `Shake256_256` hasher, implementing the RustCrypto
//!   `digest` traits.
//!
//! Without default features the crate is `no_std` and never allocates.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

/// The Keccak-p\[1600, 24\] permutation.
pub mod keccak;

/// The sponge state and its absorb/squeeze interface.
mod sponge;

/// Digest representations.
mod output;

/// Defines [`DigestError`].
mod error;

/// Arbitrary-length output.
mod xof;

mod unit;

#[cfg(feature = "digest")]
mod hasher;

pub use error::DigestError;
#[cfg(feature = "digest")]
pub use hasher::Shake256_256;
pub use output::{Digest, NativeDigest};
pub use sponge::{Permutation, Sponge};
pub use xof::XofReader;

pub use self::keccak::KeccakP1600;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Bytes per lane.
pub const LANE_BYTES: usize = 8;

/// Bytes in the whole 1600-bit state.
pub const STATE_BYTES: usize = LANES * LANE_BYTES;

/// Rounds of Keccak-p applied per permutation call.
pub const ROUNDS: usize = 24;

/// The rate of SHAKE256: 1088 bits.
pub const RATE_BYTES: usize = 136;

/// The rate in lanes.
pub const RATE_LANES: usize = RATE_BYTES / LANE_BYTES;

/// The capacity of SHAKE256: 512 bits.
pub const CAPACITY_BYTES: usize = STATE_BYTES - RATE_BYTES;

/// Digest size in bytes.
pub const DIGEST_BYTES: usize = 32;

/// Digest size in native 32-bit words.
pub const DIGEST_WORDS: usize = DIGEST_BYTES / 4;

/// SHAKE domain suffix `1111` followed by the first bit of `10*1` padding.
const SHAKE_PAD_FIRST: u8 = 0x1f;

/// The closing bit of `10*1` padding, in the last byte of the rate.
const SHAKE_PAD_LAST: u8 = 0x80;

/// Hash `input` in one call.
#[must_use]
pub fn shake256_256(input: &[u8]) -> Digest {
    let mut sponge = Sponge::new();
    sponge.absorb(input);
    sponge.squeeze()
}

/// Hash native words in one call, returning native words.
#[must_use]
pub fn shake256_256_native(input: &[u32]) -> NativeDigest {
    let mut sponge = Sponge::new();
    sponge.absorb_native(input);
    sponge.squeeze_native()
}

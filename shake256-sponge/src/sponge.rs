//! The SHAKE256-256 sponge: absorb bytes or native words, squeeze once.
//!
//! A [`Sponge`] owns the 25-lane state, the offset of the next input byte in
//! the rate region, and the [`Permutation`] that mixes full blocks.
//!
//! The rate is the first [`RATE_BYTES`] bytes of the state. Input is XORed
//! into the rate and nothing else; the [`CAPACITY_BYTES`] that follow are
//! only ever changed by the permutation. As soon as the last rate byte has
//! been written the block is permuted, so the offset always stays strictly
//! below [`RATE_BYTES`] between calls.
//!
//! Absorbing is associative: any split of the same input over several
//! [`Sponge::absorb`] or [`Sponge::absorb_native`] calls yields the same
//! state as one call on the concatenation.
//!
//! Squeezing consumes the sponge. The type system rules out squeezing twice
//! or absorbing after the digest has been read.

use core::fmt;

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    keccak::KeccakP1600, unit::Unit, xof::XofReader, Digest, NativeDigest, CAPACITY_BYTES,
    DIGEST_BYTES, DIGEST_WORDS, LANES, LANE_BYTES, RATE_BYTES, RATE_LANES, SHAKE_PAD_FIRST,
    SHAKE_PAD_LAST,
};

/// A permutation of the 1600-bit state.
///
/// Implementors must be pure functions of the lanes they are given.
/// The `&mut self` receiver exists for instrumentation (e.g. counting calls),
/// never to carry state that changes the output.
pub trait Permutation: Clone + Default {
    /// Permute the state in place.
    fn permute(&mut self, lanes: &mut [u64; LANES]);
}

/// A SHAKE256 sponge with 256-bit output.
#[derive(Clone)]
pub struct Sponge<P: Permutation = KeccakP1600> {
    lanes: [u64; LANES],
    offset: usize,
    permutation: P,
}

impl Sponge<KeccakP1600> {
    /// An empty sponge over Keccak-p\[1600, 24\].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lanes: [0; LANES],
            offset: 0,
            permutation: KeccakP1600,
        }
    }
}

impl Default for Sponge<KeccakP1600> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Permutation> Sponge<P> {
    /// An empty sponge over a custom permutation.
    #[must_use]
    pub const fn with_permutation(permutation: P) -> Self {
        Self {
            lanes: [0; LANES],
            offset: 0,
            permutation,
        }
    }

    /// Byte position in the rate region where the next input lands.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The permutation driving this sponge, e.g. to inspect an instrumented one.
    #[must_use]
    pub const fn permutation(&self) -> &P {
        &self.permutation
    }

    /// Absorb bytes.
    pub fn absorb(&mut self, input: &[u8]) -> &mut Self {
        self.absorb_units(input);
        self
    }

    /// Absorb native words.
    ///
    /// Word `w` is absorbed as the four bytes `w.to_be_bytes()`,
    /// without materialising them.
    pub fn absorb_native(&mut self, input: &[u32]) -> &mut Self {
        self.absorb_units(input);
        self
    }

    /// Pad, permute, and return the digest in canonical byte order.
    #[must_use]
    pub fn squeeze(mut self) -> Digest {
        self.finalize();
        let mut bytes = [0u8; DIGEST_BYTES];
        for (chunk, lane) in bytes.chunks_exact_mut(LANE_BYTES).zip(&self.lanes) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        Digest::new(bytes)
    }

    /// Pad, permute, and return the digest as native words.
    #[must_use]
    pub fn squeeze_native(mut self) -> NativeDigest {
        self.finalize();
        let mut words = [0u32; DIGEST_WORDS];
        for (pair, &lane) in words.chunks_exact_mut(2).zip(&self.lanes) {
            pair[0] = (lane as u32).swap_bytes();
            pair[1] = ((lane >> 32) as u32).swap_bytes();
        }
        NativeDigest::new(words)
    }

    /// Pad and permute, then hand the state to an extendable-output reader.
    ///
    /// The first 32 bytes read equal [`Sponge::squeeze`].
    #[must_use]
    pub fn finalize_xof(mut self) -> XofReader<P> {
        self.finalize();
        XofReader::new(self.lanes, self.permutation.clone())
    }

    /// Wipe the state so the sponge can start a new computation.
    pub fn reset(&mut self) {
        self.lanes.zeroize();
        self.offset = 0;
    }

    fn absorb_units<U: Unit>(&mut self, mut input: &[U]) {
        // Unit by unit until the offset is lane-aligned.
        while self.offset % LANE_BYTES != 0 {
            let Some((&unit, rest)) = input.split_first() else {
                return;
            };
            self.xor_unit(unit);
            input = rest;
        }

        // Whole lanes.
        let mut lanes = input.chunks_exact(U::PER_LANE);
        for lane in &mut lanes {
            self.lanes[self.offset / LANE_BYTES] ^= U::merge_lane(lane);
            self.advance(LANE_BYTES);
        }

        for &unit in lanes.remainder() {
            self.xor_unit(unit);
        }
    }

    /// XOR one unit at the current offset.
    ///
    /// A unit that straddles two lanes is split between them. A unit that
    /// straddles the end of the rate is written byte by byte so the block
    /// gets permuted in between.
    fn xor_unit<U: Unit>(&mut self, unit: U) {
        let bits = unit.lane_bits();
        if self.offset + U::BYTES > RATE_BYTES {
            for i in 0..U::BYTES {
                self.xor_byte((bits >> (8 * i)) as u8);
            }
            return;
        }

        let (lane, shift) = (self.offset / LANE_BYTES, self.offset % LANE_BYTES);
        self.lanes[lane] ^= bits << (8 * shift);
        if shift + U::BYTES > LANE_BYTES {
            self.lanes[lane + 1] ^= bits >> (8 * (LANE_BYTES - shift));
        }
        self.advance(U::BYTES);
    }

    fn xor_byte(&mut self, byte: u8) {
        let (lane, shift) = (self.offset / LANE_BYTES, self.offset % LANE_BYTES);
        self.lanes[lane] ^= u64::from(byte) << (8 * shift);
        self.advance(1);
    }

    fn advance(&mut self, len: usize) {
        self.offset += len;
        debug_assert!(self.offset <= RATE_BYTES);
        if self.offset == RATE_BYTES {
            self.permutation.permute(&mut self.lanes);
            self.offset = 0;
        }
    }

    /// SHAKE padding: suffix `1111`, then `10*1` up to the end of the rate.
    fn finalize(&mut self) {
        trace!("finalizing sponge at rate offset {}", self.offset);
        debug_assert!(self.offset < RATE_BYTES);
        let (lane, shift) = (self.offset / LANE_BYTES, self.offset % LANE_BYTES);
        self.lanes[lane] ^= u64::from(SHAKE_PAD_FIRST) << (8 * shift);
        self.lanes[RATE_LANES - 1] ^= u64::from(SHAKE_PAD_LAST) << (8 * (LANE_BYTES - 1));
        self.permutation.permute(&mut self.lanes);
        self.offset = 0;
    }
}

impl<P: Permutation> Zeroize for Sponge<P> {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
        self.offset.zeroize();
    }
}

impl<P: Permutation> Drop for Sponge<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: Permutation> ZeroizeOnDrop for Sponge<P> {}

/// Censored version of Debug
impl<P: Permutation> fmt::Debug for Sponge<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sponge")
            .field("lanes", &"<redacted>")
            .field("offset", &self.offset)
            .finish()
    }
}

#[cfg(feature = "std")]
impl<P: Permutation> std::io::Write for Sponge<P> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

const _: () = assert!(RATE_BYTES + CAPACITY_BYTES == LANES * LANE_BYTES);
const _: () = assert!(RATE_BYTES % LANE_BYTES == 0);

#[cfg(test)]
mod tests {
    use super::*;

    fn sponge_after(input: &[u8]) -> Sponge {
        let mut sponge = Sponge::new();
        sponge.absorb(input);
        sponge
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            Sponge::new().squeeze().to_string(),
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
        );
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            sponge_after(b"abc").squeeze().to_string(),
            "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739"
        );
    }

    #[test]
    fn test_offset_tracks_rate_position() {
        let mut sponge = Sponge::new();
        assert_eq!(sponge.offset(), 0);
        sponge.absorb(&[0u8; 5]);
        assert_eq!(sponge.offset(), 5);
        sponge.absorb_native(&[0u32; 3]);
        assert_eq!(sponge.offset(), 17);
        sponge.absorb(&[0u8; RATE_BYTES - 17]);
        assert_eq!(sponge.offset(), 0);
        sponge.absorb(&[0u8; RATE_BYTES + 1]);
        assert_eq!(sponge.offset(), 1);
    }

    #[test]
    fn test_capacity_untouched_by_absorb() {
        let mut sponge = Sponge::new();
        sponge.absorb(&[0xffu8; RATE_BYTES - 1]);
        assert!(sponge.lanes[RATE_LANES..].iter().all(|&lane| lane == 0));
        assert!(sponge.lanes[..RATE_LANES].iter().all(|&lane| lane != 0));
    }

    #[test]
    fn test_empty_absorbs_are_no_ops() {
        let mut a = Sponge::new();
        a.absorb(b"").absorb(b"hello").absorb_native(&[]).absorb(b"");
        assert_eq!(a.squeeze(), sponge_after(b"hello").squeeze());
    }

    #[test]
    fn test_unaligned_word_across_lane_and_block() {
        // offset 6: the word straddles lanes 0 and 1.
        let mut a = Sponge::new();
        a.absorb(&[9u8; 6]).absorb_native(&[0xdead_beef]);
        let mut expected = [9u8; 10];
        expected[6..].copy_from_slice(&0xdead_beefu32.to_be_bytes());
        assert_eq!(a.squeeze(), sponge_after(&expected).squeeze());

        // offset 134: the word straddles the end of the rate.
        let mut b = Sponge::new();
        b.absorb(&[3u8; RATE_BYTES - 2]).absorb_native(&[0x0102_0304, 0x0506_0708]);
        let mut expected = [3u8; RATE_BYTES + 6].to_vec();
        expected[RATE_BYTES - 2..].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(b.offset(), 6);
        assert_eq!(b.squeeze(), sponge_after(&expected).squeeze());
    }

    #[test]
    fn test_native_squeeze_decodes_to_byte_squeeze() {
        let sponge = sponge_after(b"native and canonical agree");
        let native = sponge.clone().squeeze_native();
        assert_eq!(native.to_digest(), sponge.squeeze());
    }

    #[test]
    fn test_clone_forks_prefix() {
        let mut prefix = Sponge::new();
        prefix.absorb(b"common prefix, ");
        let mut left = prefix.clone();
        let mut right = prefix;
        left.absorb(b"left");
        right.absorb(b"right");
        assert_eq!(left.squeeze(), sponge_after(b"common prefix, left").squeeze());
        assert_eq!(right.squeeze(), sponge_after(b"common prefix, right").squeeze());
    }

    #[test]
    fn test_reset_restores_empty_state() {
        let mut sponge = sponge_after(&[0x5au8; 300]);
        sponge.reset();
        assert_eq!(sponge.offset(), 0);
        assert_eq!(sponge.lanes, [0u64; LANES]);
        assert_eq!(sponge.squeeze(), Sponge::new().squeeze());
    }

    #[test]
    fn test_zeroize_clears_memory() {
        let mut sponge = sponge_after(b"secret data that must be cleared");
        assert!(sponge.lanes.iter().any(|&lane| lane != 0));
        sponge.zeroize();
        assert!(sponge.lanes.iter().all(|&lane| lane == 0));
        assert_eq!(sponge.offset, 0);
    }

    #[test]
    fn test_sponge_moves_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sponge>();

        let mut sponge = sponge_after(b"started here, ");
        let digest = std::thread::spawn(move || {
            sponge.absorb(b"finished there");
            sponge.squeeze()
        })
        .join()
        .unwrap();
        assert_eq!(digest, sponge_after(b"started here, finished there").squeeze());
    }

    #[test]
    fn test_debug_is_redacted() {
        let sponge = sponge_after(b"abc");
        let rendered = format!("{sponge:?}");
        assert_eq!(rendered, r#"Sponge { lanes: "<redacted>", offset: 3 }"#);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_write_streams_input() {
        use std::io::{copy, Cursor};

        let data = vec![0xa5u8; 1000];
        let mut sponge = Sponge::new();
        copy(&mut Cursor::new(&data), &mut sponge).unwrap();
        assert_eq!(sponge.squeeze(), sponge_after(&data).squeeze());
    }
}

//! Extendable output: any number of SHAKE256 bytes after finalization.

use core::fmt;

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{keccak::KeccakP1600, sponge::Permutation, LANES, LANE_BYTES, RATE_BYTES};

/// Squeezes an arbitrary amount of SHAKE256 output from a finalized sponge.
///
/// Obtained from [`Sponge::finalize_xof`](crate::Sponge::finalize_xof).
/// Reads are associative: two reads of `n` and `m` bytes return the same
/// bytes as one read of `n + m`.
#[derive(Clone)]
pub struct XofReader<P: Permutation = KeccakP1600> {
    lanes: [u64; LANES],
    position: usize,
    permutation: P,
}

impl<P: Permutation> XofReader<P> {
    /// `lanes` must already be padded and permuted.
    pub(crate) const fn new(lanes: [u64; LANES], permutation: P) -> Self {
        Self {
            lanes,
            position: 0,
            permutation,
        }
    }

    /// Fill `output` with the next bytes of the output stream.
    pub fn read(&mut self, output: &mut [u8]) {
        self.squeeze_into(output);
    }

    fn squeeze_into(&mut self, mut output: &mut [u8]) {
        while !output.is_empty() {
            if self.position == RATE_BYTES {
                trace!("xof reader moving to the next output block");
                self.permutation.permute(&mut self.lanes);
                self.position = 0;
            }

            let chunk_len = usize::min(output.len(), RATE_BYTES - self.position);
            let (chunk, rest) = core::mem::take(&mut output).split_at_mut(chunk_len);
            for (i, byte) in chunk.iter_mut().enumerate() {
                let position = self.position + i;
                *byte = (self.lanes[position / LANE_BYTES] >> (8 * (position % LANE_BYTES))) as u8;
            }
            self.position += chunk_len;
            output = rest;
        }
    }
}

impl<P: Permutation> Zeroize for XofReader<P> {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
        self.position.zeroize();
    }
}

impl<P: Permutation> Drop for XofReader<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: Permutation> ZeroizeOnDrop for XofReader<P> {}

impl<P: Permutation> fmt::Debug for XofReader<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XofReader")
            .field("lanes", &"<redacted>")
            .field("position", &self.position)
            .finish()
    }
}

#[cfg(feature = "digest")]
impl<P: Permutation> digest::XofReader for XofReader<P> {
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeeze_into(buffer);
    }
}

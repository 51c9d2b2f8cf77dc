//! [`digest`] trait implementations.
//!
//! [`Shake256_256`] behaves like any fixed-output RustCrypto hash, so generic
//! code written against [`digest::Digest`] can run on this sponge.

use digest::{
    consts::U32, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::Sponge;

/// SHAKE256 with a fixed 256-bit output, as a [`digest::Digest`].
#[allow(non_camel_case_types)]
#[derive(Clone, Debug, Default)]
pub struct Shake256_256 {
    sponge: Sponge,
}

impl HashMarker for Shake256_256 {}

impl OutputSizeUser for Shake256_256 {
    type OutputSize = U32;
}

impl Update for Shake256_256 {
    fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }
}

impl FixedOutput for Shake256_256 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(self.sponge.squeeze().as_bytes());
    }
}

impl Reset for Shake256_256 {
    fn reset(&mut self) {
        self.sponge.reset();
    }
}

impl FixedOutputReset for Shake256_256 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let sponge = core::mem::take(&mut self.sponge);
        out.copy_from_slice(sponge.squeeze().as_bytes());
    }
}

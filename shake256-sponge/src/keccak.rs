//! The Keccak-p\[1600, 24\] permutation.
//!
//! The state is 25 lanes of 64 bits, indexed as `x + 5 * y` over the 5x5
//! lane matrix. Each byte of the state maps to a lane in little-endian
//! order, which is the convention every SHAKE/SHA-3 implementation uses for
//! absorbing and squeezing.
//!
//! This is the same permutation as `keccak::f1600` from RustCrypto; it is
//! implemented here so the sponge has no dependency that could pull in
//! platform code on freestanding targets.

use crate::sponge::Permutation;
use crate::{LANES, ROUNDS};

/// Round constants for the iota step, one per round.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, listed in the order lanes are visited by [`PI_LANES`].
const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// The pi step as a single cycle through every lane except `(0, 0)`,
/// starting from lane 1.
const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the 24 rounds of Keccak-p\[1600\] to `lanes` in place.
pub fn keccak_p1600(lanes: &mut [u64; LANES]) {
    for &round_constant in &ROUND_CONSTANTS {
        // theta
        let mut parity = [0u64; 5];
        for (x, column) in parity.iter_mut().enumerate() {
            *column = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in (0..LANES).step_by(5) {
                lanes[y + x] ^= d;
            }
        }

        // rho and pi
        let mut carried = lanes[1];
        for (&target, &rotation) in PI_LANES.iter().zip(&RHO_OFFSETS) {
            let displaced = lanes[target];
            lanes[target] = carried.rotate_left(rotation);
            carried = displaced;
        }

        // chi
        for y in (0..LANES).step_by(5) {
            let mut row = [0u64; 5];
            row.copy_from_slice(&lanes[y..y + 5]);
            for x in 0..5 {
                lanes[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        lanes[0] ^= round_constant;
    }
}

/// The Keccak-p\[1600, 24\] permutation as a [`Permutation`] for [`Sponge`](crate::Sponge).
///
/// Holds no state of its own: the lanes live in the sponge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeccakP1600;

impl Permutation for KeccakP1600 {
    #[inline]
    fn permute(&mut self, lanes: &mut [u64; LANES]) {
        keccak_p1600(lanes);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Keccak-f\[1600\] applied once to the all-zero state,
    /// from the Keccak team's intermediate values.
    const ZERO_STATE_IMAGE: [u64; LANES] = [
        0xf125_8f79_40e1_dde7,
        0x84d5_ccf9_33c0_478a,
        0xd598_261e_a65a_a9ee,
        0xbd15_4730_6f80_494d,
        0x8b28_4e05_6253_d057,
        0xff97_a42d_7f8e_6fd4,
        0x90fe_e5a0_a446_47c4,
        0x8c5b_da0c_d619_2e76,
        0xad30_a6f7_1b19_059c,
        0x3093_5ab7_d08f_fc64,
        0xeb5a_a93f_2317_d635,
        0xa9a6_e626_0d71_2103,
        0x81a5_7c16_dbcf_555f,
        0x43b8_31cd_0347_c826,
        0x01f2_2f1a_11a5_569f,
        0x05e5_635a_21d9_ae61,
        0x64be_fef2_8cc9_70f2,
        0x6136_7095_7bc4_6611,
        0xb87c_5a55_4fd0_0ecb,
        0x8c3e_e88a_1ccf_32c8,
        0x940c_7922_ae3a_2614,
        0x1841_f924_a2c5_09e4,
        0x16f5_3526_e704_65c2,
        0x75f6_44e9_7f30_a13b,
        0xeaf1_ff7b_5cec_a249,
    ];

    #[test]
    fn test_zero_state_known_answer() {
        let mut lanes = [0u64; LANES];
        keccak_p1600(&mut lanes);
        assert_eq!(lanes, ZERO_STATE_IMAGE);
    }

    #[test]
    fn test_permutation_trait_matches_free_function() {
        let mut via_trait = [0u64; LANES];
        let mut via_fn = [0u64; LANES];
        via_trait[3] = 0x0123_4567_89ab_cdef;
        via_fn[3] = 0x0123_4567_89ab_cdef;

        KeccakP1600.permute(&mut via_trait);
        keccak_p1600(&mut via_fn);
        assert_eq!(via_trait, via_fn);
    }

    #[test]
    fn test_pi_cycle_visits_every_lane_once() {
        let mut seen = [false; LANES];
        for &lane in &PI_LANES {
            assert!(!seen[lane], "lane {lane} visited twice");
            seen[lane] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn test_matches_reference_f1600(state in any::<[u64; LANES]>()) {
            let mut ours = state;
            let mut reference = state;
            keccak_p1600(&mut ours);
            keccak::f1600(&mut reference);
            prop_assert_eq!(ours, reference);
        }
    }
}

use crate::LANE_BYTES;

/// Input units the sponge can absorb.
///
/// A unit occupies [`Unit::BYTES`] consecutive bytes of the rate region.
/// [`Unit::lane_bits`] returns those bytes packed the way a lane stores them
/// (first byte in the least significant position), so that absorbing a unit
/// is bit-identical to absorbing its canonical byte encoding.
pub(crate) trait Unit: Copy {
    /// Width of the unit in bytes. Divides [`LANE_BYTES`].
    const BYTES: usize;

    /// Number of units that make up one full lane.
    const PER_LANE: usize = LANE_BYTES / Self::BYTES;

    /// The unit's canonical bytes, packed little-endian into the low
    /// `8 * BYTES` bits of a lane.
    fn lane_bits(self) -> u64;

    /// Pack exactly [`Unit::PER_LANE`] units into one lane.
    fn merge_lane(units: &[Self]) -> u64 {
        debug_assert_eq!(units.len(), Self::PER_LANE);
        units
            .iter()
            .enumerate()
            .fold(0, |lane, (i, unit)| lane | unit.lane_bits() << (8 * Self::BYTES * i))
    }
}

impl Unit for u8 {
    const BYTES: usize = 1;

    #[inline]
    fn lane_bits(self) -> u64 {
        u64::from(self)
    }

    #[inline]
    fn merge_lane(units: &[Self]) -> u64 {
        let mut bytes = [0u8; LANE_BYTES];
        bytes.copy_from_slice(units);
        u64::from_le_bytes(bytes)
    }
}

/// Native words carry big-endian values: word `w` stands for the bytes
/// `w.to_be_bytes()`.
impl Unit for u32 {
    const BYTES: usize = 4;

    #[inline]
    fn lane_bits(self) -> u64 {
        u64::from(self.swap_bytes())
    }
}

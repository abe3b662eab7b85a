use core::cmp::Ordering;

/// How a [`super::PhaseAligner`] recombines source bytes.
///
/// Selected once from the sub-byte offsets of the destination and source
/// positions and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Destination offset is behind the source offset. The first output
    /// byte takes its low bits from the byte after the starting one.
    LeftShift,
    /// Same sub-byte offset, bytes pass through.
    NoShift,
    /// Destination offset is ahead of the source offset. The first output
    /// byte takes its high bits from an empty carry.
    RightShift,
}

impl Strategy {
    /// Strategy and shift amount for a pair of bit positions.
    ///
    /// Only the low three bits of each position take part.
    #[must_use]
    pub const fn select(dest_bit: usize, source_bit: usize) -> (Strategy, u8) {
        let dest = (dest_bit & 7) as u8;
        let source = (source_bit & 7) as u8;
        match Self::compare(dest, source) {
            Ordering::Less => (Strategy::LeftShift, source - dest),
            Ordering::Equal => (Strategy::NoShift, 0),
            Ordering::Greater => (Strategy::RightShift, dest - source),
        }
    }

    // `Ord::cmp` is not const
    const fn compare(dest: u8, source: u8) -> Ordering {
        if dest < source {
            Ordering::Less
        } else if dest == source {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    /// Combines the carried byte with the next source byte.
    ///
    /// `shift` must be in `1..=7` for the shifting strategies.
    #[inline]
    #[must_use]
    pub const fn combine(self, shift: u8, hi: u8, lo: u8) -> u8 {
        match self {
            Strategy::LeftShift => (hi << shift) | (lo >> (8 - shift)),
            Strategy::NoShift => lo,
            Strategy::RightShift => (hi << (8 - shift)) | (lo >> shift),
        }
    }

    /// Whether the aligner keeps the previous source byte around.
    #[must_use]
    pub const fn carries(self) -> bool {
        !matches!(self, Strategy::NoShift)
    }
}

#[cfg(test)]
mod tests {
    use super::Strategy;

    #[test]
    fn select_by_sign_of_difference() {
        assert_eq!(Strategy::select(0, 4), (Strategy::LeftShift, 4));
        assert_eq!(Strategy::select(0, 0), (Strategy::NoShift, 0));
        assert_eq!(Strategy::select(4, 0), (Strategy::RightShift, 4));
        assert_eq!(Strategy::select(7, 1), (Strategy::RightShift, 6));
        assert_eq!(Strategy::select(1, 7), (Strategy::LeftShift, 6));
    }

    #[test]
    fn select_ignores_whole_bytes() {
        assert_eq!(Strategy::select(0, 36), Strategy::select(0, 4));
        assert_eq!(Strategy::select(12, 8), Strategy::select(4, 0));
        assert_eq!(Strategy::select(24, 64), (Strategy::NoShift, 0));
    }

    #[test]
    fn combine_left() {
        assert_eq!(Strategy::LeftShift.combine(4, 0x12, 0x34), 0x23);
        assert_eq!(Strategy::LeftShift.combine(1, 0x80, 0x80), 0x01);
        assert_eq!(Strategy::LeftShift.combine(7, 0x01, 0xfe), 0xff);
    }

    #[test]
    fn combine_right() {
        assert_eq!(Strategy::RightShift.combine(4, 0x00, 0x12), 0x01);
        assert_eq!(Strategy::RightShift.combine(4, 0x12, 0x34), 0x23);
        assert_eq!(Strategy::RightShift.combine(7, 0x01, 0x80), 0x03);
    }

    #[test]
    fn combine_passthrough() {
        assert_eq!(Strategy::NoShift.combine(0, 0xaa, 0x55), 0x55);
        assert!(!Strategy::NoShift.carries());
        assert!(Strategy::LeftShift.carries());
        assert!(Strategy::RightShift.carries());
    }
}

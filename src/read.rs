//! One-shot readers for byte-aligned values at arbitrary bit positions.
//!
//! Each reader starts an aligner with destination bit 0 and fetches once per
//! output byte. Byte order is the order of those fetches, independent of the
//! machine.
//! The plain readers panic when the store ends early, the `try_` ones
//! return `None`.

use crate::align::PhaseAligner;

fn aligned(source_bit: usize, store: &[u8]) -> PhaseAligner<'_> {
    PhaseAligner::start(0, source_bit, store)
}

pub fn read_byte(source_bit: usize, store: &[u8]) -> u8 {
    aligned(source_bit, store).fetch()
}

pub fn read_be16(source_bit: usize, store: &[u8]) -> u16 {
    u16::from_be_bytes(aligned(source_bit, store).fetch_array())
}

pub fn read_le16(source_bit: usize, store: &[u8]) -> u16 {
    u16::from_le_bytes(aligned(source_bit, store).fetch_array())
}

pub fn read_be32(source_bit: usize, store: &[u8]) -> u32 {
    u32::from_be_bytes(aligned(source_bit, store).fetch_array())
}

/// First fetched byte is the least significant.
pub fn read_le32(source_bit: usize, store: &[u8]) -> u32 {
    u32::from_le_bytes(aligned(source_bit, store).fetch_array())
}

pub fn try_read_byte(source_bit: usize, store: &[u8]) -> Option<u8> {
    aligned(source_bit, store).try_fetch()
}

pub fn try_read_be16(source_bit: usize, store: &[u8]) -> Option<u16> {
    aligned(source_bit, store).try_fetch_array().map(u16::from_be_bytes)
}

pub fn try_read_le16(source_bit: usize, store: &[u8]) -> Option<u16> {
    aligned(source_bit, store).try_fetch_array().map(u16::from_le_bytes)
}

pub fn try_read_be32(source_bit: usize, store: &[u8]) -> Option<u32> {
    aligned(source_bit, store).try_fetch_array().map(u32::from_be_bytes)
}

pub fn try_read_le32(source_bit: usize, store: &[u8]) -> Option<u32> {
    aligned(source_bit, store).try_fetch_array().map(u32::from_le_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0];

    fn le_words(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    #[test]
    fn le32_words() {
        let store = le_words(&[0x12345678, 0x9abcdef0, 0x11223344, 0x55667788]);
        // Not 0x78563412
        assert_eq!(read_le32(0, &store), 0x12345678);
        assert_eq!(read_le32(8, &store), 0xf0123456);
        assert_eq!(read_le32(96, &store), 0x55667788);
        assert_eq!(read_be32(8, &store), 0x563412f0);
    }

    #[test]
    fn byte_at_bit_offsets() {
        assert_eq!(read_byte(0, &DATA), 0x12);
        assert_eq!(read_byte(4, &DATA), 0x23);
        assert_eq!(read_byte(8, &DATA), 0x34);
        assert_eq!(read_byte(1, &DATA), 0x24);
    }

    #[test]
    fn sixteen_bit() {
        assert_eq!(read_be16(0, &DATA), 0x1234);
        assert_eq!(read_le16(0, &DATA), 0x3412);
        assert_eq!(read_be16(4, &DATA), 0x2345);
        assert_eq!(read_le16(4, &DATA), 0x4523);
    }

    #[test]
    fn thirty_two_bit() {
        assert_eq!(read_be32(4, &DATA), 0x23456789);
        assert_eq!(read_le32(12, &DATA), 0xab896745);
        assert_eq!(read_be32(32, &DATA), 0x9abcdef0);
    }

    #[test]
    fn try_readers_stop_at_end() {
        assert_eq!(try_read_be32(36, &DATA), None);
        assert_eq!(try_read_be32(32, &DATA), Some(0x9abcdef0));
        assert_eq!(try_read_le16(44, &DATA), Some(0xefcd));
        assert_eq!(try_read_le16(52, &DATA), None);
        assert_eq!(try_read_le16(60, &DATA), None);
        assert_eq!(try_read_byte(64, &DATA), None);
        assert_eq!(try_read_be16(48, &DATA), Some(0xdef0));
        assert_eq!(try_read_le32(0, &DATA), Some(0x78563412));
    }

    #[test]
    #[should_panic(expected = "fetched past the end of the store")]
    fn read_past_end_panics() {
        read_be32(36, &DATA);
    }
}

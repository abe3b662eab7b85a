use core::iter::FusedIterator;

use static_assertions::const_assert;

use crate::{align::PhaseAligner, common::macros::{assert_arg, trace}};

/// Widest field [`read_field`] returns, in bits
pub const FIELD_MAX_BITS: usize = 32;

const_assert!(FIELD_MAX_BITS <= u32::BITS as usize);

/// Unsigned `width`-bit field starting at `source_bit`, most significant bit
/// first, right-justified.
///
/// Panics when `width` is not in `1..=32` or the field runs past the store.
pub fn read_field(source_bit: usize, width: usize, store: &[u8]) -> u32 {
    assert_arg!(width, (1..=FIELD_MAX_BITS).contains(&width), "Field width must be 1 to 32 bits");
    assert_arg!(store, fits(source_bit, width, store), "Field runs past the end of the store");

    extract(source_bit, width, store)
}

/// As [`read_field`], `None` when the field runs past the store.
///
/// Panics when `width` is not in `1..=32`.
pub fn try_read_field(source_bit: usize, width: usize, store: &[u8]) -> Option<u32> {
    assert_arg!(width, (1..=FIELD_MAX_BITS).contains(&width), "Field width must be 1 to 32 bits");

    if fits(source_bit, width, store) {
        Some(extract(source_bit, width, store))
    } else {
        None
    }
}

/// Consecutive `width`-bit fields from `source_bit` on, e.g. a row of packed
/// pixels. Ends at the last field that fits in the store.
pub fn fields(source_bit: usize, width: usize, store: &[u8]) -> Fields<'_> {
    assert_arg!(width, (1..=FIELD_MAX_BITS).contains(&width), "Field width must be 1 to 32 bits");

    Fields { store, bit: source_bit, width }
}

fn fits(source_bit: usize, width: usize, store: &[u8]) -> bool {
    source_bit
        .checked_add(width)
        .map_or(false, |end| end.div_ceil(8) <= store.len())
}

// Caller checks the width and that the field fits
fn extract(source_bit: usize, width: usize, store: &[u8]) -> u32 {
    let bytes = width.div_ceil(8);
    let mut aligner = PhaseAligner::start(0, source_bit, store);
    // A field ending in the last store byte leaves its tail in the carry
    let value = (0..bytes).fold(0u32, |acc, _| {
        let byte = aligner.try_fetch().unwrap_or_else(|| aligner.flush());
        acc << 8 | u32::from(byte)
    }) >> (bytes * 8 - width);

    trace!(
        "read field - source: {}, width: {}, bytes: {}, value: {:#x}",
        source_bit,
        width,
        bytes,
        value
    );

    value
}

#[derive(Clone, Debug)]
pub struct Fields<'a> {
    store: &'a [u8],
    bit: usize,
    width: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if !fits(self.bit, self.width, self.store) {
            return None;
        }

        let value = extract(self.bit, self.width, self.store);
        self.bit += self.width;
        Some(value)
    }
}

impl<'a> FusedIterator for Fields<'a> {}
